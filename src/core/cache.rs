use crate::core::dirs::get_cache_directory;
use crate::core::error::{GitDeckError, Result};
use crate::core::state::{StateCache, StatusSummary};
use std::fs;
use std::path::{Path, PathBuf};

const CACHE_FILE: &str = "status.json";

/// Per-repository cache directory below `cache_root`, keyed by a hash of the
/// repository path.
fn repo_cache_dir(cache_root: &Path, repo_path: &Path) -> PathBuf {
    let repo_hash = format!("{:x}", md5::compute(repo_path.to_string_lossy().as_bytes()));
    log::debug!("Cache key for {} is {repo_hash}", repo_path.display());
    cache_root.join(repo_hash)
}

pub fn save_status_cache(summary: &StatusSummary, repo_path: &Path) -> Result<()> {
    save_status_cache_in(&get_cache_directory(), summary, repo_path)
}

pub fn load_status_cache(repo_path: &Path) -> Result<Option<StateCache>> {
    load_status_cache_in(&get_cache_directory(), repo_path)
}

pub fn save_status_cache_in(cache_root: &Path, summary: &StatusSummary, repo_path: &Path) -> Result<()> {
    log::debug!("Attempting to save {} files to cache", summary.files.len());

    let cache_dir = repo_cache_dir(cache_root, repo_path);
    if let Err(e) = fs::create_dir_all(&cache_dir) {
        log::error!("Failed to create cache directory '{}': {e}", cache_dir.display());
        return Err(GitDeckError::cache_directory_creation_failed(&cache_dir, e));
    }

    let cache_file = cache_dir.join(CACHE_FILE);
    let cache = StateCache::new(repo_path.to_path_buf(), summary.clone());
    let json = serde_json::to_string_pretty(&cache)?;

    if let Err(e) = fs::write(&cache_file, json) {
        log::error!("Failed to write cache file '{}': {e}", cache_file.display());
        return Err(GitDeckError::cache_write_failed(&cache_file, e));
    }

    log::debug!("Cached status in {}", cache_file.display());
    Ok(())
}

/// Load the cached summary; `Ok(None)` when nothing was cached yet.
pub fn load_status_cache_in(cache_root: &Path, repo_path: &Path) -> Result<Option<StateCache>> {
    let cache_file = repo_cache_dir(cache_root, repo_path).join(CACHE_FILE);
    if !cache_file.exists() {
        log::debug!("Cache file does not exist: {}", cache_file.display());
        return Ok(None);
    }

    let content = fs::read_to_string(&cache_file).map_err(|e| {
        log::error!("Failed to read cache file '{}': {e}", cache_file.display());
        GitDeckError::cache_read_failed(&cache_file, e)
    })?;

    let cache: StateCache = serde_json::from_str(&content).map_err(|e| {
        log::error!("Failed to parse cache file '{}': {e}", cache_file.display());
        GitDeckError::cache_parse_failed(&cache_file, e)
    })?;

    log::debug!("Loaded {} files from cache", cache.summary.files.len());
    Ok(Some(cache))
}
