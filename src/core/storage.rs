// ─── First-Run Storage Initialization ───
// Ensures the config directory layout exists and seeds default documents
// so every store can assume its backing file is at least present.

use tracing::info;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths::ConfigPaths;
use crate::core::settings::AppSettings;
use crate::core::versions::seed_versions;

/// Create directories and default files that are missing. Idempotent;
/// existing files are never touched.
pub async fn init(paths: &ConfigPaths) -> LauncherResult<()> {
    for dir in [paths.config_dir.clone(), paths.mods_dir()] {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| LauncherError::io(&dir, e))?;
    }

    let settings_file = paths.settings_file();
    if !settings_file.exists() {
        let json = serde_json::to_string_pretty(&AppSettings::default())?;
        tokio::fs::write(&settings_file, json)
            .await
            .map_err(|e| LauncherError::io(&settings_file, e))?;
        info!("Created default settings at {:?}", settings_file);
    }

    let versions_file = paths.versions_file();
    if !versions_file.exists() {
        let json = serde_json::to_string_pretty(&seed_versions())?;
        tokio::fs::write(&versions_file, json)
            .await
            .map_err(|e| LauncherError::io(&versions_file, e))?;
        info!("Created default version list at {:?}", versions_file);
    }

    let catalog_file = paths.catalog_file();
    if !catalog_file.exists() {
        tokio::fs::write(&catalog_file, "[]")
            .await
            .map_err(|e| LauncherError::io(&catalog_file, e))?;
        info!("Created empty mod file catalog at {:?}", catalog_file);
    }

    Ok(())
}
