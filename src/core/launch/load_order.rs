// ─── Load-Order Resolver ───
// Deterministic ordering of a mod's file list before launch.

use tracing::warn;

use crate::core::mods::ModFile;

/// Order a mod's files for the engine: ascending `load_order`, absent
/// order counting as 0, ties keeping their input position.
///
/// Files without a path cannot be handed to the engine and are dropped
/// with a warning. Returns a new list; the input is untouched. Running
/// the resolver over its own output is a no-op.
pub fn resolve(files: &[ModFile]) -> Vec<ModFile> {
    let mut resolved: Vec<ModFile> = files
        .iter()
        .filter(|file| {
            if file.file_path.trim().is_empty() {
                warn!("Mod file {} ('{}') has no path, skipping", file.id, file.name);
                false
            } else {
                true
            }
        })
        .cloned()
        .collect();

    // Vec::sort_by_key is stable, which is what keeps equal orders from
    // swapping relative position.
    resolved.sort_by_key(|file| file.load_order.unwrap_or(0));
    resolved
}
