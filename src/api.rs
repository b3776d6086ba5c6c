// ─── Command Layer ───
// One async function per operation the UI calls, mirroring the HTTP
// surface one-to-one (`GET /api/mods` → `list_mods`, …). Everything in
// and out is serde-shaped so a routing shim can pass JSON through
// verbatim. No logic lives here beyond payload folding.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::dialog::{DialogRequest, OpenDialogResponse, SaveDialogResponse};
use crate::core::error::LauncherResult;
use crate::core::launch;
use crate::core::mods::{Mod, ModFile};
use crate::core::settings::{AppSettings, SettingsUpdate};
use crate::core::state::AppState;
use crate::core::versions::DoomVersion;

/// Body of `POST /api/mods` and `PUT /api/mods/:id`.
#[derive(Debug, Deserialize)]
pub struct SaveModPayload {
    #[serde(rename = "mod")]
    pub mod_record: Mod,
    #[serde(default)]
    pub files: Vec<ModFile>,
}

/// Optional filters on `GET /api/mods`.
#[derive(Debug, Default, Deserialize)]
pub struct ModQuery {
    pub version: Option<String>,
    pub search: Option<String>,
}

/// Response of `GET /api/mods/:id`; the file list rides along both
/// embedded and as its own field, as the UI expects.
#[derive(Debug, Serialize)]
pub struct ModWithFiles {
    #[serde(rename = "mod")]
    pub mod_record: Mod,
    pub files: Vec<ModFile>,
}

/// Response of `POST /api/mods/:id/launch`.
#[derive(Debug, Serialize, PartialEq)]
pub struct LaunchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ── Versions ────────────────────────────────────────────

pub async fn list_versions(state: &AppState) -> LauncherResult<Vec<DoomVersion>> {
    state.versions.list().await
}

pub async fn get_version(state: &AppState, slug: &str) -> LauncherResult<DoomVersion> {
    state.versions.get_by_slug(slug).await
}

// ── Mods ────────────────────────────────────────────────

pub async fn list_mods(state: &AppState, query: ModQuery) -> LauncherResult<Vec<Mod>> {
    let mut mods = state.mods.list().await?;

    if let Some(version) = &query.version {
        mods.retain(|m| &m.doom_version_id == version);
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        mods.retain(|m| m.title.to_lowercase().contains(&needle));
    }

    Ok(mods)
}

pub async fn get_mod(state: &AppState, id: &str) -> LauncherResult<ModWithFiles> {
    let mod_record = state.mods.get(id).await?;
    let files = mod_record.files.clone();
    Ok(ModWithFiles { mod_record, files })
}

/// Create or update a mod. `id` comes from the path on updates and
/// overrides whatever the payload carries; the separate `files` list is
/// folded into the record before it hits the store.
pub async fn save_mod(
    state: &AppState,
    id: Option<&str>,
    payload: SaveModPayload,
) -> LauncherResult<Mod> {
    let mut mod_record = payload.mod_record;
    if let Some(id) = id {
        mod_record.id = id.to_string();
    }
    mod_record.files = payload.files;
    state.mods.save(mod_record).await
}

pub async fn delete_mod(state: &AppState, id: &str) -> LauncherResult<bool> {
    state.mods.delete(id).await
}

/// Fire-and-forget launch. Failures come back as a structured response,
/// never as an error the caller has to unwrap.
pub async fn launch_mod(state: &AppState, id: &str) -> LaunchResponse {
    match launch::launch_mod(state, id).await {
        Ok(()) => LaunchResponse {
            success: true,
            message: None,
        },
        Err(e) => {
            error!("Launch of mod {} failed: {}", id, e);
            LaunchResponse {
                success: false,
                message: Some(e.to_string()),
            }
        }
    }
}

// ── Mod file catalog ────────────────────────────────────

pub async fn list_catalog(state: &AppState) -> Vec<ModFile> {
    state.catalog.list().await
}

pub async fn add_catalog_file(state: &AppState, candidate: ModFile) -> LauncherResult<ModFile> {
    state.catalog.add_if_absent(candidate).await
}

// ── Settings ────────────────────────────────────────────

pub async fn get_settings(state: &AppState) -> AppSettings {
    state.settings.load().await
}

pub async fn update_settings(
    state: &AppState,
    update: SettingsUpdate,
) -> LauncherResult<AppSettings> {
    state.settings.update(update).await
}

// ── Dialogs ─────────────────────────────────────────────

pub async fn dialog_open(state: &AppState, request: DialogRequest) -> OpenDialogResponse {
    state.dialog.pick_open(request).await
}

pub async fn dialog_save(state: &AppState, request: DialogRequest) -> SaveDialogResponse {
    state.dialog.pick_save(request).await
}
