//! Pure formatting functions for terminal output.
//!
//! All display logic lives here, separated from the release workflow.

use crate::version::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Format and print a non-fatal warning to stderr.
pub fn display_warning(message: &str) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", message);
}

/// Display the version change for this release.
pub fn display_version_change(old_version: &Version, new_version: &Version) {
    println!("\n\x1b[1mBumping version:\x1b[0m");
    println!("  From: \x1b[31m{}\x1b[0m", old_version);
    println!("  To:   \x1b[32m{}\x1b[0m", new_version);
}

/// Display the git commands that would run, without executing them.
pub fn display_vcs_preview(commit_message: &str, tag: &str, remote: &str) {
    println!("\nWould execute:");
    println!("  git add -A");
    println!("  git commit -m \"{}\"", commit_message);
    println!("  git tag {}", tag);
    println!("  git push {}", remote);
    println!("  git push {} --tags", remote);
}
