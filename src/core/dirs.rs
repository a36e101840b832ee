use crate::core::error::{GitDeckError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "git-deck";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join(APP_DIR))
        .ok_or(GitDeckError::ConfigDirectoryNotFound)
}

pub fn get_cache_directory() -> PathBuf {
    // XDG_CACHE_HOME wins on every platform so tests can isolate the cache
    let base = std::env::var("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"));

    base.join(APP_DIR)
}
