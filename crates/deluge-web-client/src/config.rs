//! Client configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for a [`DelugeClient`](crate::DelugeClient).
///
/// Only the URL and the password are required. By default self-signed
/// certificates are accepted (the daemon usually runs on a trusted network),
/// cookie domains are checked against the bundled public suffix list and no
/// timeout is applied.
#[derive(Clone)]
pub struct DelugeConfig {
    pub(crate) url: String,
    pub(crate) password: String,
    pub(crate) accept_invalid_certs: bool,
    pub(crate) public_suffix_list: Option<PathBuf>,
    pub(crate) timeout: Option<Duration>,
}

impl DelugeConfig {
    /// Create a configuration for the Web UI at `url`, e.g. `https://seedbox:8112`.
    pub fn new(url: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            password: password.into(),
            accept_invalid_certs: true,
            public_suffix_list: None,
            timeout: None,
        }
    }

    /// Whether certificates that fail verification are accepted.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Path to a `public_suffix_list.dat` used for cookie domain matching
    /// instead of the bundled one.
    pub fn public_suffix_list(mut self, path: impl AsRef<Path>) -> Self {
        self.public_suffix_list = Some(path.as_ref().to_path_buf());
        self
    }

    /// Upper bound for a single request, connect included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The Web UI base URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for DelugeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelugeConfig")
            .field("url", &self.url)
            .field("password", &"<redacted>")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("public_suffix_list", &self.public_suffix_list)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DelugeConfig::new("https://seedbox:8112", "deluge");
        assert_eq!(config.url(), "https://seedbox:8112");
        assert!(config.accept_invalid_certs);
        assert!(config.public_suffix_list.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn setters() {
        let config = DelugeConfig::new("http://localhost:8112", "deluge")
            .accept_invalid_certs(false)
            .public_suffix_list("/usr/share/publicsuffix/public_suffix_list.dat")
            .timeout(Duration::from_secs(5));
        assert!(!config.accept_invalid_certs);
        assert_eq!(
            config.public_suffix_list.as_deref(),
            Some(Path::new("/usr/share/publicsuffix/public_suffix_list.dat"))
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn debug_hides_password() {
        let config = DelugeConfig::new("http://localhost:8112", "hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
