// ─── Application Settings ───
// Process-wide settings persisted as `settings.json`. Reads overlay the
// file onto defaults field by field; updates overlay a partial payload
// onto the current values and write the whole file back.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths::ConfigPaths;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Path to the engine executable; a bare name resolves via PATH.
    pub gz_doom_path: String,
    pub savegames_path: String,
    pub screenshots_path: String,
    pub default_source_port: String,
    pub theme: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            gz_doom_path: "gzdoom".into(),
            savegames_path: "~/.config/gzdoom/saves".into(),
            screenshots_path: "~/Pictures/MRDoom/screenshots".into(),
            default_source_port: "GZDoom".into(),
            theme: "dark".into(),
        }
    }
}

/// Partial settings payload from the UI; absent fields keep their
/// current values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub gz_doom_path: Option<String>,
    pub savegames_path: Option<String>,
    pub screenshots_path: Option<String>,
    pub default_source_port: Option<String>,
    pub theme: Option<String>,
}

pub struct SettingsStore {
    paths: ConfigPaths,
}

impl SettingsStore {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    /// Current settings. Missing or unreadable file falls back to
    /// defaults; fields missing from the file take their default.
    pub async fn load(&self) -> AppSettings {
        let path = self.paths.settings_file();
        match tokio::fs::read_to_string(&path).await {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("Corrupt settings at {:?}: {}", path, e);
                AppSettings::default()
            }),
            Err(_) => AppSettings::default(),
        }
    }

    /// Merge a partial update onto the current settings and persist.
    pub async fn update(&self, update: SettingsUpdate) -> LauncherResult<AppSettings> {
        let mut settings = self.load().await;

        if let Some(v) = update.gz_doom_path {
            settings.gz_doom_path = v;
        }
        if let Some(v) = update.savegames_path {
            settings.savegames_path = v;
        }
        if let Some(v) = update.screenshots_path {
            settings.screenshots_path = v;
        }
        if let Some(v) = update.default_source_port {
            settings.default_source_port = v;
        }
        if let Some(v) = update.theme {
            settings.theme = v;
        }

        self.write(&settings).await?;
        info!("Saved settings");
        Ok(settings)
    }

    pub(crate) async fn write(&self, settings: &AppSettings) -> LauncherResult<()> {
        let path = self.paths.settings_file();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LauncherError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| LauncherError::io(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(ConfigPaths::rooted_at(dir.path()));

        let settings = store.load().await;
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.gz_doom_path, "gzdoom");
    }

    #[tokio::test]
    async fn partial_file_overlays_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"gzDoomPath":"/opt/gzdoom/gzdoom"}"#,
        )
        .unwrap();
        let store = SettingsStore::new(ConfigPaths::rooted_at(dir.path()));

        let settings = store.load().await;
        assert_eq!(settings.gz_doom_path, "/opt/gzdoom/gzdoom");
        assert_eq!(settings.theme, "dark");
    }

    #[tokio::test]
    async fn update_merges_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(ConfigPaths::rooted_at(dir.path()));

        let updated = store
            .update(SettingsUpdate {
                theme: Some("light".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.theme, "light");
        assert_eq!(updated.gz_doom_path, "gzdoom");

        // Second partial update must keep the first one's change.
        let updated = store
            .update(SettingsUpdate {
                savegames_path: Some("/saves".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.theme, "light");
        assert_eq!(updated.savegames_path, "/saves");

        let reloaded = store.load().await;
        assert_eq!(reloaded, updated);
    }
}
