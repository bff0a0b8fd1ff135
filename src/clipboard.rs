//! Clipboard capability layer.
//!
//! The release workflow depends only on the [Clipboard] trait; the concrete
//! mechanism is selected once at startup. Clipboard failure is the one
//! non-fatal stage of a release, so implementations report errors and the
//! caller downgrades them to a warning.

use std::process::{Command, Stdio};

use crate::error::{BumpError, Result};
use crate::version::Version;

/// Capability to place text on the system clipboard.
pub trait Clipboard: Send + Sync {
    /// Short mechanism name for status output
    fn name(&self) -> &'static str;

    /// Place the given text on the clipboard
    fn copy(&self, text: &str) -> Result<()>;
}

/// Clipboard backed by the platform's native utility.
///
/// Uses `pbcopy` on macOS, `Set-Clipboard` via `pwsh` on Windows, and
/// `wl-copy` or `xclip` on other systems depending on the session type.
pub struct SystemClipboard;

/// Clipboard that drops the text, for headless environments.
pub struct NoopClipboard;

/// Selects the clipboard mechanism for this environment.
///
/// Headless Unix sessions (no `DISPLAY` or `WAYLAND_DISPLAY`) get the no-op
/// variant so the notify stage degrades cleanly instead of spawning a
/// utility that cannot reach a display server.
pub fn detect() -> Box<dyn Clipboard> {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        Box::new(SystemClipboard)
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        if std::env::var_os("WAYLAND_DISPLAY").is_some()
            || std::env::var_os("DISPLAY").is_some()
        {
            Box::new(SystemClipboard)
        } else {
            Box::new(NoopClipboard)
        }
    }
}

/// Formats the install command copied to the clipboard after a release.
///
/// A leading `@` scope marker is stripped from the package name.
pub fn install_command(
    package_manager: &str,
    account: &str,
    package_name: &str,
    version: &Version,
) -> String {
    let package = package_name.strip_prefix('@').unwrap_or(package_name);
    format!(
        "{} add https://github.com/{}/{}#v{}",
        package_manager, account, package, version
    )
}

fn pipe_to(mut command: Command, text: &str) -> Result<()> {
    use std::io::Write as _;

    let program = command.get_program().to_string_lossy().into_owned();

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| BumpError::clipboard(format!("could not run {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| BumpError::clipboard(format!("could not write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| BumpError::clipboard(format!("could not wait for {}: {}", program, e)))?;

    if !status.success() {
        return Err(BumpError::clipboard(format!(
            "{} exited with {}",
            program,
            status
                .code()
                .map_or_else(|| "signal".to_string(), |c| c.to_string())
        )));
    }

    Ok(())
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    #[cfg(target_os = "macos")]
    fn copy(&self, text: &str) -> Result<()> {
        pipe_to(Command::new("pbcopy"), text)
    }

    #[cfg(target_os = "windows")]
    fn copy(&self, text: &str) -> Result<()> {
        // Set-Clipboard takes the value inline; single quotes are escaped
        // by doubling inside a PowerShell single-quoted string.
        let escaped = text.replace('\'', "''");
        let status = Command::new("pwsh")
            .args([
                "-NoProfile",
                "-Command",
                &format!("Set-Clipboard -Value '{}'", escaped),
            ])
            .status()
            .map_err(|e| BumpError::clipboard(format!("could not run pwsh: {}", e)))?;

        if !status.success() {
            return Err(BumpError::clipboard(format!(
                "pwsh Set-Clipboard exited with {}",
                status
                    .code()
                    .map_or_else(|| "signal".to_string(), |c| c.to_string())
            )));
        }
        Ok(())
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn copy(&self, text: &str) -> Result<()> {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            pipe_to(Command::new("wl-copy"), text)
        } else {
            let mut command = Command::new("xclip");
            command.args(["-selection", "clipboard"]);
            pipe_to(command, text)
        }
    }
}

impl Clipboard for NoopClipboard {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn copy(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}
