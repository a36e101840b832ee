//! Git repository management and setup utilities
//!
//! Every test repository comes with its own cache and config directories so the
//! binary under test never reads or writes the user's real ones.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use git_deck::core::error::{GitDeckError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository plus isolated XDG directories. The TempDirs must be kept
/// alive for the duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    pub cache_home: TempDir,
    pub config_home: TempDir,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The git-deck binary, running inside this repository
    pub fn cmd(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("git-deck").map_err(|e| {
            GitDeckError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, e))
        })?;
        cmd.current_dir(&self.path)
            .env("XDG_CACHE_HOME", self.cache_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    /// Run `git-deck status` so the selection commands have a cached list
    pub fn run_status_to_cache(&self) -> Result<()> {
        self.cmd()?.arg("status").assert().success();
        Ok(())
    }
}

/// Run git in `repo_path`, failing the setup when git does
pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(repo_path).output()?;
    if !output.status.success() {
        return Err(GitDeckError::git_command_failed(
            args.join(" "),
            String::from_utf8_lossy(&output.stderr),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Sets up a fresh git repository on branch `main` with a test identity
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
        cache_home: TempDir::new()?,
        config_home: TempDir::new()?,
    })
}

/// Sets up a git repository with "initial.txt" committed
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

pub fn git_checkout(repo_path: &Path, args: &[&str]) -> Result<()> {
    let mut full = vec!["checkout", "-q"];
    full.extend_from_slice(args);
    git(repo_path, &full)?;
    Ok(())
}

pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

/// Creates multiple test files with sequential content
pub fn create_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("content{}\nline 2\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

pub fn modify_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("modified{}\nline 2\nnew line\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}
