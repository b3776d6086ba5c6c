// ─── Launch Argument Builder ───
// Assembles the engine command line from the base-game profile, the
// resolved file list, the save directory, and custom parameters.

use std::path::Path;

use crate::core::mods::Mod;
use crate::core::settings::AppSettings;
use crate::core::versions::DoomVersion;

use super::load_order;

/// Build the full argument vector for one launch.
///
/// Pure assembly, no side effects; whether the executable exists is the
/// launch orchestrator's problem. The segment order is fixed because the
/// engine treats trailing flags as overrides and must see `-file` entries
/// before difficulty/warp flags:
///
/// 1. base args from the version profile (IWAD injected up front when
///    the profile doesn't already name one),
/// 2. `-file` followed by every resolved mod file path,
/// 3. `-savedir` from the mod override or the global settings,
/// 4. the mod's free-form launch parameters.
pub fn build_args(
    mod_record: &Mod,
    version: Option<&DoomVersion>,
    settings: &AppSettings,
) -> Vec<String> {
    let mut args: Vec<String> = version
        .map(|v| v.args.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    let has_iwad = args.iter().any(|token| token.eq_ignore_ascii_case("-iwad"));
    if !has_iwad {
        if let Some(iwad) = version
            .map(|v| v.default_iwad.trim())
            .filter(|iwad| !iwad.is_empty())
        {
            args.splice(0..0, ["-iwad".to_string(), iwad.to_string()]);
        }
    }

    let resolved = load_order::resolve(&mod_record.files);
    if !resolved.is_empty() {
        args.push("-file".into());
        args.extend(resolved.iter().map(|file| absolute(&file.file_path)));
    }

    let save_dir = mod_record
        .save_directory
        .as_deref()
        .filter(|dir| !dir.trim().is_empty())
        .unwrap_or(&settings.savegames_path);
    if !save_dir.trim().is_empty() {
        args.push("-savedir".into());
        args.push(save_dir.to_string());
    }

    if let Some(custom) = &mod_record.launch_parameters {
        args.extend(custom.split_whitespace().map(str::to_string));
    }

    args
}

/// Engine working directory is not ours to control, so relative file
/// paths are anchored to the launcher's cwd before being handed over.
fn absolute(path: &str) -> String {
    let p = Path::new(path);
    if p.is_absolute() {
        return path.to_string();
    }
    match std::path::absolute(p) {
        Ok(abs) => abs.to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    }
}
