use std::process::Command;

use crate::error::{BumpError, Result};
use crate::ui;

/// Runs the package manager's packaging script.
///
/// Invokes `<package_manager> run package` with stdout/stderr inherited so
/// build output streams straight to the console. A non-zero exit aborts the
/// release.
///
/// # Arguments
/// * `package_manager` - Package manager executable, e.g. "pnpm"
/// * `dry_run` - When true, only announce the command
///
/// # Returns
/// * `Ok(())` - Script succeeded or was skipped in dry-run mode
/// * `Err` - If the process could not be spawned or exited non-zero
pub fn run_package_script(package_manager: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        ui::display_status(&format!("Would run: {} run package", package_manager));
        return Ok(());
    }

    println!("\n📦 Running '{} run package'...", package_manager);

    let status = Command::new(package_manager)
        .args(["run", "package"])
        .status()
        .map_err(|e| {
            BumpError::script(format!("could not run {} run package: {}", package_manager, e))
        })?;

    if !status.success() {
        return Err(BumpError::script(format!(
            "{} run package exited with {}",
            package_manager,
            status
                .code()
                .map_or_else(|| "signal".to_string(), |c| c.to_string())
        )));
    }

    ui::display_success("Package built successfully");
    Ok(())
}
