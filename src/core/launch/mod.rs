// ─── Launch Pipeline ───
// Store read → executable check → load-order resolve → argument
// assembly → detached spawn.

pub mod args;
pub mod load_order;
pub mod task;

pub use args::build_args;
pub use load_order::resolve;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::state::AppState;

/// Assemble the command line for a mod without spawning anything.
/// This is the whole launch minus the side effect, shared by the real
/// launch and the CLI dry-run.
pub async fn assemble(state: &AppState, mod_id: &str) -> LauncherResult<(PathBuf, Vec<String>)> {
    let mod_record = state.mods.get(mod_id).await?;
    let settings = state.settings.load().await;

    let executable = resolve_executable(&settings.gz_doom_path)?;

    // A dangling version reference degrades to "no base args" rather than
    // blocking the launch; the original app behaves the same way.
    let version = match state.versions.get(&mod_record.doom_version_id).await {
        Ok(v) => Some(v),
        Err(LauncherError::NotFound { .. }) => {
            warn!(
                "Mod '{}' references unknown Doom version '{}'",
                mod_record.title, mod_record.doom_version_id
            );
            None
        }
        Err(e) => return Err(e),
    };

    let argv = build_args(&mod_record, version.as_ref(), &settings);
    Ok((executable, argv))
}

/// Launch a mod by id, fire-and-forget.
pub async fn launch_mod(state: &AppState, mod_id: &str) -> LauncherResult<()> {
    let (executable, argv) = assemble(state, mod_id).await?;
    info!("Launching: {:?} {}", executable, argv.join(" "));
    task::spawn_detached(&executable, &argv)
}

/// Turn the configured engine path into a spawnable executable.
///
/// A bare name is searched on PATH; anything with a separator must point
/// at an existing file. Both failures are configuration problems, caught
/// here so nothing is ever spawned against a bad path.
fn resolve_executable(configured: &str) -> LauncherResult<PathBuf> {
    let configured = configured.trim();
    if configured.is_empty() {
        return Err(LauncherError::Configuration(
            "engine executable path is not set in settings".into(),
        ));
    }

    let path = Path::new(configured);
    if path.components().count() > 1 {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(LauncherError::Configuration(format!(
            "engine executable not found at {configured}"
        )));
    }

    find_on_path(configured).ok_or_else(|| {
        LauncherError::Configuration(format!("engine executable '{configured}' not found on PATH"))
    })
}

fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        #[cfg(target_os = "windows")]
        {
            let with_exe = dir.join(format!("{name}.exe"));
            if with_exe.is_file() {
                return Some(with_exe);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mods::Mod;
    use crate::core::paths::ConfigPaths;
    use crate::core::settings::SettingsUpdate;
    use crate::core::storage;

    async fn scratch_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::rooted_at(dir.path());
        storage::init(&paths).await.unwrap();
        let state = AppState::new(paths);
        (dir, state)
    }

    fn bare_mod(doom_version_id: &str) -> Mod {
        Mod {
            id: String::new(),
            title: "Launchable".into(),
            description: String::new(),
            doom_version_id: doom_version_id.into(),
            source_port: "GZDoom".into(),
            save_directory: Some("/saves".into()),
            launch_parameters: Some("-skill 4 -nomonsters".into()),
            screenshot_path: None,
            files: Vec::new(),
        }
    }

    #[tokio::test]
    async fn unset_executable_is_a_configuration_error() {
        let (_dir, state) = scratch_state().await;
        let saved = state.mods.save(bare_mod("2")).await.unwrap();
        state
            .settings
            .update(SettingsUpdate {
                gz_doom_path: Some("  ".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let err = assemble(&state, &saved.id).await.unwrap_err();
        assert!(matches!(err, LauncherError::Configuration(_)));
    }

    #[tokio::test]
    async fn missing_executable_file_is_a_configuration_error() {
        let (_dir, state) = scratch_state().await;
        let saved = state.mods.save(bare_mod("2")).await.unwrap();
        state
            .settings
            .update(SettingsUpdate {
                gz_doom_path: Some("/nonexistent/engines/gzdoom".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let err = assemble(&state, &saved.id).await.unwrap_err();
        assert!(matches!(err, LauncherError::Configuration(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn assemble_produces_the_full_command_line() {
        let (_dir, state) = scratch_state().await;
        let saved = state.mods.save(bare_mod("2")).await.unwrap();
        state
            .settings
            .update(SettingsUpdate {
                // Any existing file satisfies the configuration check.
                gz_doom_path: Some("/bin/sh".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let (executable, argv) = assemble(&state, &saved.id).await.unwrap();
        assert_eq!(executable, PathBuf::from("/bin/sh"));
        assert_eq!(
            argv,
            ["-iwad", "DOOM2.WAD", "-savedir", "/saves", "-skill", "4", "-nomonsters"]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unknown_version_reference_still_assembles() {
        let (_dir, state) = scratch_state().await;
        let saved = state.mods.save(bare_mod("999")).await.unwrap();
        state
            .settings
            .update(SettingsUpdate {
                gz_doom_path: Some("/bin/sh".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let (_, argv) = assemble(&state, &saved.id).await.unwrap();
        assert!(!argv.contains(&"-iwad".to_string()));
    }

    #[tokio::test]
    async fn launching_a_missing_mod_is_not_found() {
        let (_dir, state) = scratch_state().await;
        let err = launch_mod(&state, "no-such-mod").await.unwrap_err();
        assert!(matches!(err, LauncherError::NotFound { .. }));
    }
}
