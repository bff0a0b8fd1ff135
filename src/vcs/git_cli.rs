use std::path::PathBuf;
use std::process::Command;

use crate::error::{BumpError, Result};
use crate::vcs::Vcs;

/// Real [Vcs] implementation driving the `git` command-line tool.
///
/// Each operation captures the command's combined output; on a non-zero
/// exit the error names the exact command line and carries that output so
/// the operator can see what git reported. A missing `git` binary surfaces
/// as a generic execution failure.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Creates a GitCli operating in the current working directory.
    pub fn new() -> Self {
        GitCli {
            workdir: PathBuf::from("."),
        }
    }

    /// Creates a GitCli operating in the given directory.
    pub fn at(workdir: impl Into<PathBuf>) -> Self {
        GitCli {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                BumpError::vcs(format!("could not run git {}: {}", args.join(" "), e))
            })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BumpError::vcs(format!(
                "git {} exited with {}\n{}{}",
                args.join(" "),
                output
                    .status
                    .code()
                    .map_or_else(|| "signal".to_string(), |c| c.to_string()),
                stdout,
                stderr
            )));
        }

        Ok(())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for GitCli {
    fn stage_all(&self) -> Result<()> {
        self.run(&["add", "-A"])
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message])
    }

    fn tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", name])
    }

    fn push(&self, remote: &str) -> Result<()> {
        self.run(&["push", remote])
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.run(&["push", remote, "--tags"])
    }
}
