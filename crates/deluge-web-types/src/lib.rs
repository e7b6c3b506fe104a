//! # Deluge Web Types
//!
//! This crate defines the error type, the transfer record and the client trait
//! for torrent daemons reached through the Deluge Web JSON-RPC interface.

use std::fmt;

use thiserror::Error;

/// Error type for torrent daemon operations.
#[derive(Error, Debug)]
pub enum DelugeError {
    /// The client could not be configured (bad URL, unreadable public suffix list, ...)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Network-related errors (connection failures, timeouts, etc.)
    #[error("connection error. {0}")]
    Network(String),

    /// The daemon answered with a status other than 200 OK.
    #[error("server error response: {0}")]
    HttpStatus(String),

    /// The response body is not a JSON envelope of the expected shape.
    #[error("unable to parse response body: {0}")]
    UnparseableResponse(String),

    /// The daemon rejected the password.
    #[error("authentication failed: error code {code}! {message}")]
    Authentication {
        /// Remote error code, 0 when the daemon sent none.
        code: i64,
        /// Remote error message, empty when the daemon sent none.
        message: String,
    },

    /// The daemon returned an error envelope.
    #[error("error code {code}! {message}")]
    Remote {
        /// Remote error code.
        code: i64,
        /// Remote error message.
        message: String,
    },
}

impl DelugeError {
    /// Returns the remote error code, if the error came from the daemon itself.
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            Self::Authentication { code, .. } | Self::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// TorrentDaemon defines the operations a session with the daemon supports.
///
/// Every call performs exactly one round trip. Methods take `&mut self` because
/// each successful call advances the session's request counter.
#[allow(async_fn_in_trait)]
pub trait TorrentDaemon {
    /// Log in with the configured password. Must be called before anything else,
    /// the daemon ties authorization to the session cookie.
    async fn connect(&mut self) -> Result<(), DelugeError>;
    /// Add a magnet or torrent link. The daemon starts downloading immediately.
    async fn add_magnet(&mut self, link: &str) -> Result<(), DelugeError>;
    /// Get a single torrent with its file list. `None` if the daemon has no file
    /// listing for the ID.
    async fn get(&mut self, id: &str) -> Result<Option<Torrent>, DelugeError>;
    /// List all torrents, sorted by ID.
    async fn get_all(&mut self) -> Result<Vec<Torrent>, DelugeError>;
    /// Remove a torrent and erase its downloaded data.
    async fn remove(&mut self, id: &str) -> Result<(), DelugeError>;
    /// Move a torrent to the top of the download queue.
    async fn move_to_queue_top(&mut self, id: &str) -> Result<(), DelugeError>;
}

/// Torrent information.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Torrent {
    /// Torrent hash as assigned by the daemon.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Completion, from 0 to 100.
    pub progress: f64,

    /// Share ratio (uploaded / downloaded).
    pub ratio: f64,

    /// Files contained in the torrent. Only filled in by single torrent lookups.
    pub files: Vec<String>,

    /// Status message. Only filled in by listings.
    pub message: Option<String>,
}

impl fmt::Display for Torrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} name={} ratio={:.6} files={:?}",
            self.id, self.name, self.ratio, self.files
        )
    }
}
