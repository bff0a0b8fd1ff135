// tests/git_cli_test.rs
//
// Exercises the real git-backed publisher against throwaway repositories,
// using a local bare repository as the push target.
use std::fs;
use std::path::Path;
use std::process::Command;

use bump_version::clipboard::NoopClipboard;
use bump_version::config::Config;
use bump_version::vcs::{GitCli, Vcs};
use bump_version::version::{BumpKind, Version};
use bump_version::workflow::{run_release, RunConfig};
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("could not run git");
    assert!(status.success(), "git {:?} failed in {:?}", args, dir);
}

fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("could not run git");
    assert!(output.status.success(), "git {:?} failed in {:?}", args, dir);
    String::from_utf8(output.stdout).unwrap()
}

// Creates a working repo with one commit and a bare origin it can push to.
fn setup_repo_with_origin() -> (TempDir, TempDir) {
    let origin = TempDir::new().expect("could not create origin dir");
    git(origin.path(), &["init", "--bare"]);

    let work = TempDir::new().expect("could not create work dir");
    git(work.path(), &["init"]);
    git(work.path(), &["config", "user.name", "Test User"]);
    git(work.path(), &["config", "user.email", "test@example.com"]);
    git(work.path(), &["config", "commit.gpgsign", "false"]);

    fs::write(
        work.path().join("package.json"),
        "{\n  \"name\": \"@acct/pkg\",\n  \"version\": \"0.1.0\"\n}\n",
    )
    .expect("could not write manifest");

    git(work.path(), &["add", "-A"]);
    git(work.path(), &["commit", "-m", "initial commit"]);
    git(
        work.path(),
        &["remote", "add", "origin", origin.path().to_str().unwrap()],
    );
    git(work.path(), &["push", "-u", "origin", "HEAD"]);

    (work, origin)
}

#[test]
fn test_git_cli_stage_commit_tag() {
    let (work, _origin) = setup_repo_with_origin();
    let vcs = GitCli::at(work.path());

    fs::write(work.path().join("CHANGELOG.md"), "changes\n").unwrap();
    vcs.stage_all().expect("stage should succeed");
    vcs.commit("add changelog").expect("commit should succeed");
    vcs.tag("v0.1.1").expect("tag should succeed");

    // Creating the same tag again fails and the error carries git's output.
    let err = vcs.tag("v0.1.1").expect_err("duplicate tag should fail");
    assert!(err.to_string().contains("git tag v0.1.1"));
}

#[test]
fn test_release_publishes_to_origin() {
    let (work, origin) = setup_repo_with_origin();

    let manifest_path = work.path().join("package.json");
    let config = Config {
        account: "acct".to_string(),
        remote: "origin".to_string(),
        manifest: manifest_path.to_str().unwrap().to_string(),
        package_manager: "pnpm".to_string(),
    };
    let run = RunConfig {
        bump: BumpKind::Patch,
        dry_run: false,
        commit_message: "release: bump to 0.1.1".to_string(),
    };

    let vcs = GitCli::at(work.path());
    let outcome =
        run_release(&run, &config, &vcs, &NoopClipboard).expect("release should succeed");

    assert_eq!(outcome.new_version, Version::new(0, 1, 1));
    assert_eq!(outcome.tag, "v0.1.1");

    // The manifest change was committed and both the commit and the tag
    // arrived at the origin repository.
    let log = git_stdout(work.path(), &["log", "--oneline", "-1"]);
    assert!(log.contains("release: bump to 0.1.1"));

    let remote_tags = git_stdout(origin.path(), &["tag"]);
    assert!(remote_tags.contains("v0.1.1"));

    let remote_log = git_stdout(origin.path(), &["log", "--oneline", "-1"]);
    assert!(remote_log.contains("release: bump to 0.1.1"));
}
