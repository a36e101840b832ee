//! Remote URL helpers.
//!
//! Credentials are stored encrypted by the host application. This module only
//! sees them through the opaque [`Decrypt`] capability and never retries a
//! failed decryption.

use crate::core::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static REMOTE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((git|ssh|https?)|(git@[\w.]+))(:(//)?)([\w.@:/\-~]+)(\.git)$")
        .expect("valid regex")
});

/// Failure reported by a [`Decrypt`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionError {
    message: String,
}

impl DecryptionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DecryptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DecryptionError {}

/// Opaque decryption of stored credential tokens.
pub trait Decrypt {
    fn decrypt(&self, token: &str) -> std::result::Result<String, DecryptionError>;
}

/// Account used to authenticate against an HTTPS remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub login: String,
    /// Encrypted token, only readable through [`Decrypt`]
    pub token: String,
}

/// Percent-encode a value for the userinfo part of a URL.
///
/// Everything outside the unreserved set is escaped, `%` and spaces included,
/// so git decodes exactly the original value.
pub fn git_string_safe(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Insert `login:token@` after the scheme of an HTTP(S) remote.
///
/// Other URL forms are returned unchanged; the token is never decrypted for them.
pub fn add_credentials_to_remote(
    remote_url: &str,
    credential: &Credential,
    decryptor: &dyn Decrypt,
) -> Result<String> {
    let Some((scheme, rest)) = remote_url.split_once("//") else {
        return Ok(remote_url.to_string());
    };
    if !matches!(scheme, "http:" | "https:") {
        return Ok(remote_url.to_string());
    }

    let token = git_string_safe(&decryptor.decrypt(&credential.token)?);
    Ok(format!("{scheme}//{}:{token}@{rest}", credential.login))
}

/// Repository name from a clone URL, e.g. `project` for
/// `https://example.com/team/project.git`.
pub fn repository_name_from_url(remote_url: &str) -> Option<String> {
    if !REMOTE_URL.is_match(remote_url) {
        return None;
    }
    remote_url
        .rsplit('/')
        .next()
        .and_then(|segment| segment.strip_suffix(".git"))
        .map(|name| name.rsplit(':').next().unwrap_or(name))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Convert Windows separators to `/`.
pub fn normalize_slashes(path: &str) -> String {
    path.replace('\\', "/")
}
