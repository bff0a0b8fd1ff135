//! Release workflow orchestration.
//!
//! Separates CLI argument parsing (main.rs) from the release pipeline so
//! the whole run can be driven programmatically with a mock VCS and a
//! no-op clipboard in tests.

use std::path::Path;

use crate::clipboard::{self, Clipboard};
use crate::config::Config;
use crate::error::Result;
use crate::manifest;
use crate::script;
use crate::ui;
use crate::vcs::Vcs;
use crate::version::{self, BumpKind, Version};

/// Resolved invocation parameters for one release run.
///
/// Constructed once from the command line and passed explicitly to every
/// stage; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Which version component to increment
    pub bump: BumpKind,

    /// Preview mode - compute and report everything, mutate nothing
    pub dry_run: bool,

    /// Commit message for the release commit
    pub commit_message: String,
}

/// Result of a completed release run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Version read from the manifest
    pub old_version: Version,

    /// Version written back to the manifest
    pub new_version: Version,

    /// Tag created for the release
    pub tag: String,

    /// Whether the packaging script was invoked
    pub script_ran: bool,
}

/// Runs the release pipeline.
///
/// Stages, strictly in order: load manifest, compute the bumped version,
/// rewrite the manifest, run the packaging script if the manifest declares
/// one, publish through the VCS (stage, commit, tag, push, push tags), and
/// copy the install command to the clipboard.
///
/// Every stage through the VCS publish is fatal on failure and aborts the
/// remaining sequence; there is no rollback of earlier side effects. Only
/// the clipboard stage degrades to a warning.
///
/// In dry-run mode no file is written and no state-mutating process is
/// spawned; each stage prints what it would do instead.
///
/// # Arguments
/// * `run` - Resolved invocation parameters
/// * `config` - Tool configuration (manifest path, remote, account)
/// * `vcs` - Version-control implementation
/// * `clipboard` - Clipboard capability
///
/// # Returns
/// Result containing the release outcome or the first stage error
pub fn run_release(
    run: &RunConfig,
    config: &Config,
    vcs: &dyn Vcs,
    clipboard: &dyn Clipboard,
) -> Result<ReleaseOutcome> {
    let manifest_path = Path::new(&config.manifest);

    // Load manifest and compute the version change
    let manifest = manifest::load(manifest_path)?;
    let old_version = version::parse_version(&manifest.version)?;
    let new_version = version::bump_version(old_version.clone(), run.bump);
    let tag = new_version.tag_name();

    ui::display_version_change(&old_version, &new_version);

    // Rewrite the manifest's version field
    let updated = manifest::substitute_version(
        manifest.raw(),
        &manifest.version,
        &new_version.to_string(),
    )?;

    if run.dry_run {
        ui::display_status(&format!(
            "Would update {} to version {}",
            config.manifest, new_version
        ));
    } else {
        manifest::write(manifest_path, &updated)?;
        ui::display_success(&format!(
            "Updated {} to version {}",
            config.manifest, new_version
        ));
    }

    // Run the packaging script when the manifest declares one
    let script_ran = manifest.has_package_script && !run.dry_run;
    if manifest.has_package_script {
        script::run_package_script(&config.package_manager, run.dry_run)?;
    }

    // Publish through the VCS
    if run.dry_run {
        ui::display_vcs_preview(&run.commit_message, &tag, &config.remote);
    } else {
        vcs.stage_all()?;
        vcs.commit(&run.commit_message)?;
        ui::display_success("Committed changes");

        vcs.tag(&tag)?;
        ui::display_success(&format!("Created git tag {}", tag));

        vcs.push(&config.remote)?;
        ui::display_success(&format!("Pushed commits to {}", config.remote));

        vcs.push_tags(&config.remote)?;
        ui::display_success(&format!("Pushed tags to {}", config.remote));
    }

    // Copy the install command to the clipboard; never fatal
    notify_clipboard(run, config, &manifest.name, &new_version, clipboard);

    if run.dry_run {
        println!("\n✅ Dry run complete - version would be {}", new_version);
    } else {
        println!(
            "\n✅ Successfully bumped to version {} and pushed to {}!",
            new_version, config.remote
        );
    }

    Ok(ReleaseOutcome {
        old_version,
        new_version,
        tag,
        script_ran,
    })
}

fn notify_clipboard(
    run: &RunConfig,
    config: &Config,
    package_name: &str,
    new_version: &Version,
    clipboard: &dyn Clipboard,
) {
    if package_name.is_empty() {
        ui::display_status("Manifest has no package name, skipping clipboard");
        return;
    }

    let text = clipboard::install_command(
        &config.package_manager,
        &config.account,
        package_name,
        new_version,
    );

    if run.dry_run {
        println!("\nWould copy to clipboard: {}", text);
        return;
    }

    match clipboard.copy(&text) {
        Ok(()) => println!("\n📋 Copied to clipboard: {}", text),
        Err(e) => ui::display_warning(&format!("Could not copy to clipboard: {}", e)),
    }
}
