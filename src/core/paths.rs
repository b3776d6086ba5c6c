// ─── Config Directory Layout ───
// Everything the launcher persists lives under `~/.config/mrdoom/`:
//   settings.json          — application settings
//   doomVersions.json      — seeded base-game profiles
//   modFileCatalogue.json  — shared mod-file catalog
//   mods/<id>.json         — one document per installed mod

use std::path::PathBuf;

const APP_DIR_NAME: &str = "mrdoom";

/// Resolved storage locations, threaded through every store instead of
/// being re-derived from the environment at each call site.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
}

impl ConfigPaths {
    /// Layout rooted at the user's config directory.
    pub fn default_location() -> Self {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            config_dir: base.join(APP_DIR_NAME),
        }
    }

    /// Layout rooted at an arbitrary directory. Tests point this at a
    /// scratch dir so they never touch the real config.
    pub fn rooted_at(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn mods_dir(&self) -> PathBuf {
        self.config_dir.join("mods")
    }

    pub fn mod_record(&self, id: &str) -> PathBuf {
        self.mods_dir().join(format!("{id}.json"))
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    pub fn versions_file(&self) -> PathBuf {
        self.config_dir.join("doomVersions.json")
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.config_dir.join("modFileCatalogue.json")
    }
}
