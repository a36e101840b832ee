//! Shared setup for the CLI commands.
//!
//! Every command needs the repository opened from the current directory with the
//! user's configuration. Selection commands additionally restore the view model
//! saved by the last `status` run.

use crate::core::{
    cache::load_status_cache,
    config::Config,
    error::{GitDeckError, Result},
    git::GitRepo,
    repository_status::RepositoryStatus,
};
use std::env;
use std::path::PathBuf;

/// An opened repository and its status service.
pub struct CommandContext {
    pub repo_path: PathBuf,
    pub status: RepositoryStatus<GitRepo>,
}

pub struct CommandInit;

impl CommandInit {
    /// Open the repository containing the current directory with an empty view model.
    pub fn open() -> Result<CommandContext> {
        let (repo_path, git_repo, config) = Self::open_repo()?;
        Ok(CommandContext {
            repo_path,
            status: RepositoryStatus::new(git_repo, config),
        })
    }

    /// Like [`CommandInit::open`], seeded with the last cached status.
    ///
    /// Selection only makes sense against a list the user has seen, so a missing
    /// cache is [`GitDeckError::NoCachedStatus`].
    pub fn with_cached_status() -> Result<CommandContext> {
        let (repo_path, git_repo, config) = Self::open_repo()?;
        let cache = load_status_cache(&repo_path)?.ok_or(GitDeckError::NoCachedStatus)?;

        log::debug!(
            "Restored {} files cached at {}",
            cache.summary.files.len(),
            cache.last_updated
        );

        Ok(CommandContext {
            repo_path,
            status: RepositoryStatus::restore(git_repo, config, cache.summary),
        })
    }

    /// Seed with the last cached status when there is a readable one.
    ///
    /// An unreadable cache only loses the previous selection.
    pub fn with_previous_status() -> Result<CommandContext> {
        let (repo_path, git_repo, config) = Self::open_repo()?;
        let status = match load_status_cache(&repo_path) {
            Ok(Some(cache)) => RepositoryStatus::restore(git_repo, config, cache.summary),
            Ok(None) => RepositoryStatus::new(git_repo, config),
            Err(e) => {
                log::warn!("Ignoring unreadable status cache: {e}");
                RepositoryStatus::new(git_repo, config)
            }
        };
        Ok(CommandContext { repo_path, status })
    }

    fn open_repo() -> Result<(PathBuf, GitRepo, Config)> {
        let config = Config::load_or_create()?;
        let current_dir = env::current_dir()?;
        let git_repo = GitRepo::open(&current_dir, config.clone())?;
        let repo_path = git_repo.get_repo_path()?;
        Ok((repo_path, git_repo, config))
    }
}
