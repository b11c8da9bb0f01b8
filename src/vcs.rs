//! Process exit side effects: committing the versions file and handing off to
//! the plugin updater

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::error::VcsError;

/// Commits `path` alone with `message`, from the repository containing it
pub fn commit(path: &Path, message: &str) -> Result<(), VcsError> {
    info!("#### Committing changes... ####");
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = path.file_name().unwrap_or(path.as_os_str());

    run(Command::new("git")
        .current_dir(dir)
        .arg("commit")
        .arg(format!("-m{message}"))
        .arg("--")
        .arg(file))
}

/// Runs the external plugin update procedure; its outcome is only logged
pub fn run_plugin_updater(program: &Path) {
    info!("#### Updating plugins ####");
    match Command::new(program).status() {
        Ok(status) if status.success() => info!("Plugin updater finished"),
        Ok(status) => warn!("Plugin updater exited with {}", status),
        Err(e) => warn!("Failed to run plugin updater {}: {}", program.display(), e),
    }
}

fn run(command: &mut Command) -> Result<(), VcsError> {
    let program = command.get_program().to_string_lossy().into_owned();
    let status = command.status().map_err(|source| VcsError::Spawn {
        program: program.clone(),
        source,
    })?;

    if !status.success() {
        return Err(VcsError::Failed { program, status });
    }
    Ok(())
}
