use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Known mod-file kinds, strongly typed instead of magic strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Wad,
    Pk3,
    Deh,
    Bex,
    Zip,
    #[default]
    Other,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Wad => write!(f, "wad"),
            FileType::Pk3 => write!(f, "pk3"),
            FileType::Deh => write!(f, "deh"),
            FileType::Bex => write!(f, "bex"),
            FileType::Zip => write!(f, "zip"),
            FileType::Other => write!(f, "other"),
        }
    }
}

/// One file a mod loads into the engine.
///
/// Lives either embedded in a mod record (`mod_id` set) or in the shared
/// catalog (`mod_id` absent). Field names follow the on-disk JSON the
/// desktop app reads and writes (`filePath`, `loadOrder`, …).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModFile {
    #[serde(default)]
    pub id: i64,
    /// Display name shown in the UI.
    #[serde(default)]
    pub name: String,
    /// Base file name, derived from the path.
    #[serde(default)]
    pub file_name: String,
    /// Absolute or engine-relative path. A file without a path cannot be
    /// passed to the engine and is dropped by the load-order resolver.
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub file_type: FileType,
    /// Parent mod id; `None` marks a shared catalog entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_id: Option<String>,
    /// Lower loads first; absent counts as 0. Ties keep insertion order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_order: Option<i32>,
    #[serde(default)]
    pub is_required: bool,
}

/// Full mod representation persisted to disk as `mods/<id>.json`,
/// file list embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mod {
    /// Stable string id; doubles as the record's file-system key.
    /// Assigned on first save when empty.
    #[serde(default)]
    pub id: String,
    /// `alias` accepts records written by older app revisions that used
    /// `name` for the same field.
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// References a `DoomVersion` by id.
    #[serde(default)]
    pub doom_version_id: String,
    #[serde(default)]
    pub source_port: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_directory: Option<String>,
    /// Free-form extra arguments, split on whitespace at launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_parameters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_path: Option<String>,
    /// A record missing this field, or carrying `null` or some other
    /// non-array value, still parses; the list comes back empty.
    #[serde(default, deserialize_with = "files_or_empty")]
    pub files: Vec<ModFile>,
}

/// Older app revisions wrote `files: null` into some records; anything
/// that is not a parsable array degrades to an empty list instead of
/// poisoning the whole record.
fn files_or_empty<'de, D>(deserializer: D) -> Result<Vec<ModFile>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl Mod {
    /// Generate a fresh string id. UUIDs survive store resets without
    /// collision, unlike the auto-increment ids of older revisions.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}
