// ─── Shared Mod File Catalog ───
// Pool of previously-referenced mod files, reusable across installs.
// One flat JSON array keyed by exact file path; the core only appends.

use chrono::Utc;
use tracing::{info, warn};

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::mods::ModFile;
use crate::core::paths::ConfigPaths;

pub struct Catalog {
    paths: ConfigPaths,
}

impl Catalog {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    /// All catalog entries. A missing, unreadable, corrupt, or non-array
    /// file degrades to the empty list with a warning.
    pub async fn list(&self) -> Vec<ModFile> {
        let path = self.paths.catalog_file();
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Cannot read catalog at {:?}: {}", path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ModFile>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Corrupt catalog at {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Append a file to the catalog unless an entry with the same path
    /// already exists, in which case that entry comes back unchanged.
    ///
    /// The stored entry gets its `file_name` derived from the path, a
    /// display name falling back to the file name, a timestamp id unique
    /// within the catalog, and no parent mod marker.
    pub async fn add_if_absent(&self, candidate: ModFile) -> LauncherResult<ModFile> {
        if candidate.file_path.trim().is_empty() {
            return Err(LauncherError::Validation(
                "catalog entry requires a file path".into(),
            ));
        }

        let mut entries = self.list().await;
        if let Some(existing) = entries
            .iter()
            .find(|entry| entry.file_path == candidate.file_path)
        {
            return Ok(existing.clone());
        }

        let file_name = base_file_name(&candidate.file_path);
        let name = if candidate.name.trim().is_empty() {
            file_name.clone()
        } else {
            candidate.name.clone()
        };

        let entry = ModFile {
            id: next_id(&entries),
            name,
            file_name,
            mod_id: None,
            ..candidate
        };

        entries.push(entry.clone());
        self.write(&entries).await?;
        info!("Added '{}' to mod file catalog", entry.file_path);
        Ok(entry)
    }

    async fn write(&self, entries: &[ModFile]) -> LauncherResult<()> {
        let path = self.paths.catalog_file();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LauncherError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| LauncherError::io(&path, e))
    }
}

/// Millisecond timestamp, bumped past any id already in the catalog so
/// two appends inside the same millisecond stay distinct.
fn next_id(entries: &[ModFile]) -> i64 {
    let stamp = Utc::now().timestamp_millis();
    let max_existing = entries.iter().map(|e| e.id).max().unwrap_or(0);
    stamp.max(max_existing + 1)
}

fn base_file_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
        .to_string()
}
