use std::path::PathBuf;

use tracing::{info, warn};

use super::model::Mod;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths::ConfigPaths;

/// Manages the lifecycle of mod records on disk.
///
/// One JSON document per mod under `mods/<id>.json`, written whole on every
/// save — last write wins, no merging.
pub struct ModStore {
    paths: ConfigPaths,
}

impl ModStore {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.paths.mod_record(id)
    }

    /// Persist a mod record, embedded file list included.
    ///
    /// Assigns a fresh id when the mod has none and stamps it onto the
    /// embedded files, then overwrites any existing record with that id.
    pub async fn save(&self, mut mod_record: Mod) -> LauncherResult<Mod> {
        if mod_record.title.trim().is_empty() {
            return Err(LauncherError::Validation(
                "mod title must not be empty".into(),
            ));
        }

        if mod_record.id.is_empty() {
            mod_record.id = Mod::generate_id();
        }
        for file in &mut mod_record.files {
            file.mod_id = Some(mod_record.id.clone());
        }

        let path = self.record_path(&mod_record.id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LauncherError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&mod_record)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| LauncherError::io(&path, e))?;

        info!("Saved mod '{}' ({})", mod_record.title, mod_record.id);
        Ok(mod_record)
    }

    /// Load a single mod by id.
    ///
    /// A missing record is `NotFound`; a record that exists but fails to
    /// parse is `CorruptRecord`. A parsable record without a `files` field
    /// comes back with an empty list (serde default on the model).
    pub async fn get(&self, id: &str) -> LauncherResult<Mod> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(LauncherError::not_found("Mod", id));
        }

        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LauncherError::io(&path, e))?;

        serde_json::from_str(&json).map_err(|e| LauncherError::CorruptRecord {
            path,
            reason: e.to_string(),
        })
    }

    /// Delete the backing record. Returns whether a record existed.
    pub async fn delete(&self, id: &str) -> LauncherResult<bool> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(false);
        }

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| LauncherError::io(&path, e))?;

        info!("Deleted mod {}", id);
        Ok(true)
    }

    /// List all mod records.
    ///
    /// Individual records that cannot be read or parsed are skipped with a
    /// warning so one corrupt file never takes down the whole library view.
    pub async fn list(&self) -> LauncherResult<Vec<Mod>> {
        let mods_dir = self.paths.mods_dir();
        let mut mods = Vec::new();

        if !mods_dir.exists() {
            return Ok(mods);
        }

        let mut entries = tokio::fs::read_dir(&mods_dir)
            .await
            .map_err(|e| LauncherError::io(&mods_dir, e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| LauncherError::io(&mods_dir, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match tokio::fs::read_to_string(&path).await {
                Ok(json) => match serde_json::from_str::<Mod>(&json) {
                    Ok(record) => mods.push(record),
                    Err(e) => {
                        warn!("Corrupt mod record at {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    warn!("Cannot read {:?}: {}", path, e);
                }
            }
        }

        Ok(mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mods::model::{FileType, ModFile};

    fn scratch_store() -> (tempfile::TempDir, ModStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ModStore::new(ConfigPaths::rooted_at(dir.path()));
        (dir, store)
    }

    fn sample_mod(title: &str) -> Mod {
        Mod {
            id: String::new(),
            title: title.into(),
            description: "a test mod".into(),
            doom_version_id: "2".into(),
            source_port: "GZDoom".into(),
            save_directory: None,
            launch_parameters: None,
            screenshot_path: None,
            files: vec![ModFile {
                id: 1,
                name: "Maps".into(),
                file_name: "maps.wad".into(),
                file_path: "/mods/maps.wad".into(),
                file_type: FileType::Wad,
                mod_id: None,
                load_order: Some(1),
                is_required: true,
            }],
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_roundtrips() {
        let (_dir, store) = scratch_store();

        let saved = store.save(sample_mod("Sigil")).await.unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(saved.files[0].mod_id.as_deref(), Some(saved.id.as_str()));

        let loaded = store.get(&saved.id).await.unwrap();
        assert_eq!(loaded.title, "Sigil");
        assert_eq!(loaded.files.len(), 1);
        assert_eq!(loaded.files[0].file_path, "/mods/maps.wad");
    }

    #[tokio::test]
    async fn save_overwrites_existing_record() {
        let (_dir, store) = scratch_store();

        let mut saved = store.save(sample_mod("First")).await.unwrap();
        saved.title = "Second".into();
        saved.files.clear();
        store.save(saved.clone()).await.unwrap();

        let loaded = store.get(&saved.id).await.unwrap();
        assert_eq!(loaded.title, "Second");
        assert!(loaded.files.is_empty());
    }

    #[tokio::test]
    async fn save_rejects_empty_title() {
        let (_dir, store) = scratch_store();
        let mut record = sample_mod("x");
        record.title = "  ".into();

        let err = store.save(record).await.unwrap_err();
        assert!(matches!(err, LauncherError::Validation(_)));
    }

    #[tokio::test]
    async fn get_missing_record_is_not_found() {
        let (_dir, store) = scratch_store();
        let err = store.get("no-such-id").await.unwrap_err();
        assert!(matches!(err, LauncherError::NotFound { .. }));
    }

    #[tokio::test]
    async fn get_unparsable_record_is_corrupt() {
        let (dir, store) = scratch_store();
        let mods_dir = dir.path().join("mods");
        std::fs::create_dir_all(&mods_dir).unwrap();
        std::fs::write(mods_dir.join("bad.json"), "{ not json").unwrap();

        let err = store.get("bad").await.unwrap_err();
        assert!(matches!(err, LauncherError::CorruptRecord { .. }));
    }

    #[tokio::test]
    async fn get_tolerates_missing_files_field() {
        let (dir, store) = scratch_store();
        let mods_dir = dir.path().join("mods");
        std::fs::create_dir_all(&mods_dir).unwrap();
        std::fs::write(
            mods_dir.join("legacy.json"),
            r#"{"id":"legacy","name":"Old Record"}"#,
        )
        .unwrap();

        let loaded = store.get("legacy").await.unwrap();
        assert_eq!(loaded.title, "Old Record");
        assert!(loaded.files.is_empty());
    }

    #[tokio::test]
    async fn get_tolerates_null_files_field() {
        let (dir, store) = scratch_store();
        let mods_dir = dir.path().join("mods");
        std::fs::create_dir_all(&mods_dir).unwrap();
        std::fs::write(
            mods_dir.join("nullfiles.json"),
            r#"{"id":"nullfiles","title":"Null Files","files":null}"#,
        )
        .unwrap();

        let loaded = store.get("nullfiles").await.unwrap();
        assert_eq!(loaded.title, "Null Files");
        assert!(loaded.files.is_empty());
    }

    #[tokio::test]
    async fn get_tolerates_non_array_files_field() {
        let (dir, store) = scratch_store();
        let mods_dir = dir.path().join("mods");
        std::fs::create_dir_all(&mods_dir).unwrap();
        std::fs::write(
            mods_dir.join("oddfiles.json"),
            r#"{"id":"oddfiles","title":"Odd Files","files":{"0":"a.wad"}}"#,
        )
        .unwrap();

        let loaded = store.get("oddfiles").await.unwrap();
        assert!(loaded.files.is_empty());
    }

    #[tokio::test]
    async fn list_skips_corrupt_records() {
        let (dir, store) = scratch_store();
        store.save(sample_mod("Good")).await.unwrap();
        std::fs::write(dir.path().join("mods").join("bad.json"), "]]]").unwrap();

        let mods = store.list().await.unwrap();
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].title, "Good");
    }

    #[tokio::test]
    async fn delete_reports_whether_record_existed() {
        let (_dir, store) = scratch_store();
        let saved = store.save(sample_mod("Gone Soon")).await.unwrap();

        assert!(store.delete(&saved.id).await.unwrap());
        assert!(!store.delete(&saved.id).await.unwrap());
        assert!(matches!(
            store.get(&saved.id).await.unwrap_err(),
            LauncherError::NotFound { .. }
        ));
    }
}
