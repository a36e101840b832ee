//! Git command collaborators.
//!
//! The parsing core never runs git itself. It consumes raw text produced by an
//! implementation of [`GitCommands`]. [`GitRepo`] is the production
//! implementation: it uses `git2` for repository discovery, merge bases and
//! ahead/behind counts, and shells out to the `git` binary for the plumbing
//! reports whose text format the parsers understand.
//!
//! # Public API
//! - [`GitCommands`]: the raw-text producers the core depends on
//! - [`GitRepo`]: `git2` + `git` CLI implementation

use crate::core::{
    config::Config,
    error::{GitDeckError, Result},
    porcelain::parse_status,
    state::StatusSnapshot,
};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Rendered header of `show` output: commit id, author, date and parents.
const SHOW_FORMAT: &str = "--format=commit %H%nAuthor: %an <%ae>%nDate:   %ad%nParents: %P";

/// Raw-text producers consumed by the parsing core.
pub trait GitCommands {
    /// Current working-tree status with branch header and ahead/behind counts
    fn run_status(&self) -> Result<StatusSnapshot>;

    /// `show --name-status` text for one commit
    fn run_show(&self, commit: &str, first_parent_only: bool) -> Result<String>;

    /// Best common ancestor of two revisions, as a full object id
    fn merge_base(&self, ours: &str, theirs: &str) -> Result<String>;

    /// Three-way `merge-tree` report
    fn run_merge_tree(&self, base: &str, ours: &str, theirs: &str) -> Result<String>;

    /// `diff --check` report of the working tree, or of the index when `cached`
    fn run_diff_check(&self, cached: bool) -> Result<String>;
}

pub struct GitRepo {
    repo: Repository,
    config: Config,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P, config: Config) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| GitDeckError::NotInGitRepo)?;
        Ok(GitRepo { repo, config })
    }

    /// Working directory of the repository
    pub fn get_repo_path(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or(GitDeckError::NoWorkingDirectory)
    }

    /// Run git with `args` in the working directory and return its stdout.
    ///
    /// Exit codes listed in `accepted` count as success; anything else is a
    /// [`GitDeckError::GitCommandFailed`].
    fn execute_git_command(&self, args: &[&str], accepted: &[i32]) -> Result<String> {
        let workdir = self.get_repo_path()?;
        log::debug!("Running {} {:?} in {}", self.config.git_binary, args, workdir.display());

        let output = Command::new(&self.config.git_binary)
            .args(args)
            .current_dir(&workdir)
            .output()?;

        let code = output.status.code().unwrap_or(-1);
        if !accepted.contains(&code) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::debug!("git {:?} exited with {code}: {}", args, stderr.trim());
            return Err(GitDeckError::git_command_failed(
                args.first().copied().unwrap_or_default(),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Commits HEAD is ahead of and behind its upstream. `None` on a detached
    /// or unborn HEAD, or when the branch tracks nothing.
    pub fn get_ahead_behind(&self) -> Option<(usize, usize)> {
        let head = self.repo.head().ok()?;
        let local_oid = head.target()?;
        let branch_name = head.shorthand()?;
        let local_branch = self
            .repo
            .find_branch(branch_name, git2::BranchType::Local)
            .ok()?;
        let upstream_oid = local_branch.upstream().ok()?.get().target()?;
        self.repo.graph_ahead_behind(local_oid, upstream_oid).ok()
    }

    fn resolve_commit(&self, rev: &str) -> Result<git2::Oid> {
        Ok(self.repo.revparse_single(rev)?.peel_to_commit()?.id())
    }
}

impl GitCommands for GitRepo {
    fn run_status(&self) -> Result<StatusSnapshot> {
        let untracked = if self.config.include_untracked {
            "--untracked-files=all"
        } else {
            "--untracked-files=no"
        };
        let raw = self.execute_git_command(&["status", "--porcelain=v1", "-b", untracked], &[0])?;
        let status = parse_status(&raw)?;
        let (ahead, behind) = self.get_ahead_behind().unwrap_or((0, 0));

        Ok(StatusSnapshot {
            files: status.files,
            ahead,
            behind,
            branch_header: status.branch_header,
        })
    }

    fn run_show(&self, commit: &str, first_parent_only: bool) -> Result<String> {
        let mut args = vec!["show", "--no-color", "--no-renames", "--name-status", SHOW_FORMAT];
        if first_parent_only {
            args.extend(["-m", "--first-parent"]);
        }
        args.extend([commit, "--"]);
        self.execute_git_command(&args, &[0])
    }

    fn merge_base(&self, ours: &str, theirs: &str) -> Result<String> {
        let ours = self.resolve_commit(ours)?;
        let theirs = self.resolve_commit(theirs)?;
        Ok(self.repo.merge_base(ours, theirs)?.to_string())
    }

    fn run_merge_tree(&self, base: &str, ours: &str, theirs: &str) -> Result<String> {
        self.execute_git_command(&["merge-tree", base, ours, theirs], &[0])
    }

    fn run_diff_check(&self, cached: bool) -> Result<String> {
        let mut args = vec!["diff", "--no-color", "--check"];
        if cached {
            args.push("--cached");
        }
        // A non-zero exit only means problems were found.
        let raw = self.execute_git_command(&args, &[0, 1, 2])?;

        // Drop the offending lines git echoes under each report line.
        Ok(raw
            .lines()
            .filter(|line| !line.starts_with('+'))
            .map(|line| format!("{line}\n"))
            .collect())
    }
}
