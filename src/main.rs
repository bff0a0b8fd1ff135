use anyhow::Result;
use clap::Parser;

use bump_version::clipboard;
use bump_version::config;
use bump_version::error::BumpError;
use bump_version::ui;
use bump_version::vcs::GitCli;
use bump_version::version::BumpKind;
use bump_version::workflow::{self, RunConfig};

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    about = "Bump the package version, then commit, tag, and push the release"
)]
struct Args {
    #[arg(long, help = "Bump major version (x.0.0)", conflicts_with = "minor")]
    major: bool,

    #[arg(long, help = "Bump minor version (x.y.0)")]
    minor: bool,

    #[arg(long = "dryrun", help = "Show what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        help = "Commit message for the release",
        trailing_var_arg = true,
        num_args = 0..
    )]
    commit_message: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The commit message is everything after the flags
    let commit_message = args.commit_message.join(" ");
    if commit_message.trim().is_empty() {
        let err = BumpError::usage(
            "commit message is required\n\
             Usage: bump-version [--major|--minor] [--dryrun] <commit-message>",
        );
        eprintln!("{}", err);
        std::process::exit(1);
    }

    let run = RunConfig {
        bump: if args.major {
            BumpKind::Major
        } else if args.minor {
            BumpKind::Minor
        } else {
            BumpKind::Patch
        },
        dry_run: args.dry_run,
        commit_message,
    };

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("could not load config: {}", e));
            std::process::exit(1);
        }
    };

    let vcs = GitCli::new();
    let clipboard = clipboard::detect();

    if let Err(e) = workflow::run_release(&run, &config, &vcs, clipboard.as_ref()) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
