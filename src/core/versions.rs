// ─── Base Game Profiles ───
// Handles the seeded list of Doom versions the launcher can target.
// Seeded once at first run, read by every launch, never mutated.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths::ConfigPaths;

/// One base-game profile (IWAD + engine pairing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoomVersion {
    pub id: String,
    pub name: String,
    /// Unique URL-safe key the UI addresses profiles by.
    pub slug: String,
    /// Base argument string, may already carry `-iwad <name>`.
    #[serde(default)]
    pub args: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub executable: String,
    #[serde(default)]
    pub parameters: String,
    #[serde(default)]
    pub default_iwad: String,
}

/// Profiles written to `doomVersions.json` on first run.
pub fn seed_versions() -> Vec<DoomVersion> {
    let entry = |id: &str, name: &str, slug: &str, iwad: &str, icon: &str| DoomVersion {
        id: id.into(),
        name: name.into(),
        slug: slug.into(),
        args: format!("-iwad {iwad}"),
        icon: icon.into(),
        executable: "gzdoom".into(),
        parameters: String::new(),
        default_iwad: iwad.into(),
    };

    vec![
        entry("1", "Doom", "doom", "DOOM.WAD", "doom.png"),
        entry("2", "Doom II", "doom2", "DOOM2.WAD", "doom2.png"),
        entry("3", "Final Doom: TNT", "tnt", "TNT.WAD", "tnt.png"),
        entry("4", "Final Doom: Plutonia", "plutonia", "PLUTONIA.WAD", "plutonia.png"),
        entry("5", "FreeDoom Phase 1", "freedoom1", "freedoom1.wad", "freedoom1.png"),
        entry("6", "FreeDoom Phase 2", "freedoom2", "freedoom2.wad", "freedoom2.png"),
    ]
}

/// Read-only store over the seeded version list.
pub struct VersionStore {
    paths: ConfigPaths,
}

impl VersionStore {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    /// All profiles. An unreadable or unparsable file degrades to the
    /// empty list with a warning rather than breaking the library view.
    pub async fn list(&self) -> LauncherResult<Vec<DoomVersion>> {
        let path = self.paths.versions_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LauncherError::io(&path, e))?;

        match serde_json::from_str(&json) {
            Ok(versions) => Ok(versions),
            Err(e) => {
                warn!("Corrupt version list at {:?}: {}", path, e);
                Ok(Vec::new())
            }
        }
    }

    /// Find a profile by its unique slug.
    pub async fn get_by_slug(&self, slug: &str) -> LauncherResult<DoomVersion> {
        self.list()
            .await?
            .into_iter()
            .find(|v| v.slug == slug)
            .ok_or_else(|| LauncherError::not_found("Doom version", slug))
    }

    /// Find a profile by id.
    pub async fn get(&self, id: &str) -> LauncherResult<DoomVersion> {
        self.list()
            .await?
            .into_iter()
            .find(|v| v.id == id)
            .ok_or_else(|| LauncherError::not_found("Doom version", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage;

    #[tokio::test]
    async fn seeded_store_lists_six_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::rooted_at(dir.path());
        storage::init(&paths).await.unwrap();

        let store = VersionStore::new(paths);
        let versions = store.list().await.unwrap();
        assert_eq!(versions.len(), 6);
        assert!(versions.iter().all(|v| !v.default_iwad.is_empty()));
    }

    #[tokio::test]
    async fn slug_lookup_finds_doom2() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::rooted_at(dir.path());
        storage::init(&paths).await.unwrap();

        let store = VersionStore::new(paths);
        let version = store.get_by_slug("doom2").await.unwrap();
        assert_eq!(version.name, "Doom II");
        assert_eq!(version.args, "-iwad DOOM2.WAD");
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::rooted_at(dir.path());
        storage::init(&paths).await.unwrap();

        let store = VersionStore::new(paths);
        let err = store.get_by_slug("heretic").await.unwrap_err();
        assert!(matches!(err, LauncherError::NotFound { .. }));
    }
}
