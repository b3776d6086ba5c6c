// ─── Launch Task ───
// Spawns the game process with the assembled arguments.

use std::path::Path;
use std::process::Stdio;

#[cfg(unix)]
use std::os::unix::process::CommandExt;
#[cfg(target_os = "windows")]
use std::os::windows::process::CommandExt;

use tracing::info;

use crate::core::error::{LauncherError, LauncherResult};

/// Spawn the engine detached and return immediately.
///
/// No stdio is captured and no handle is kept: the game keeps running if
/// the launcher exits, and an in-flight launch cannot be cancelled.
pub fn spawn_detached(executable: &Path, argv: &[String]) -> LauncherResult<()> {
    let mut cmd = std::process::Command::new(executable);
    cmd.args(argv)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    configure_platform_spawn(&mut cmd);

    match cmd.spawn() {
        Ok(child) => {
            info!("Spawned {:?} (pid {})", executable, child.id());
            drop(child);
            Ok(())
        }
        Err(e) => Err(LauncherError::Launch {
            executable: executable.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn configure_platform_spawn(cmd: &mut std::process::Command) {
    #[cfg(unix)]
    {
        // Own process group, so the game never receives the launcher's
        // terminal signals and outlives it.
        cmd.process_group(0);
    }

    #[cfg(target_os = "windows")]
    {
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_reports_launch_error() {
        let err = spawn_detached(Path::new("/nonexistent/gzdoom-binary"), &[]).unwrap_err();
        match err {
            LauncherError::Launch { executable, .. } => {
                assert_eq!(executable, Path::new("/nonexistent/gzdoom-binary"));
            }
            other => panic!("expected Launch error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn spawning_a_real_binary_succeeds() {
        spawn_detached(Path::new("/bin/true"), &[]).unwrap();
    }
}
