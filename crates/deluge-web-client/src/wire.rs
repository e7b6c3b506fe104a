//! JSON-RPC request and response shapes used by the Deluge Web interface.

use std::collections::BTreeMap;

use deluge_web_types::DelugeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single JSON-RPC call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RpcRequest {
    pub(crate) id: u64,
    pub(crate) method: &'static str,
    pub(crate) params: Value,
}

/// Error object of a response envelope. A code of 0 means no error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RpcError {
    #[serde(default)]
    pub(crate) code: i64,
    #[serde(default)]
    pub(crate) message: String,
}

/// Response envelope, typed by the result shape of the method that was called.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<R> {
    #[serde(default)]
    pub(crate) id: i64,
    pub(crate) result: Option<R>,
    pub(crate) error: Option<RpcError>,
}

impl<R> Envelope<R> {
    /// The error object, if it signals a failure.
    pub(crate) fn failure(&self) -> Option<&RpcError> {
        self.error.as_ref().filter(|e| e.code != 0)
    }

    /// Turns an error envelope into [`DelugeError::Remote`], otherwise yields the result.
    pub(crate) fn into_result(self) -> Result<Option<R>, DelugeError> {
        match self.error {
            Some(RpcError { code, message }) if code != 0 => {
                Err(DelugeError::Remote { code, message })
            }
            _ => Ok(self.result),
        }
    }
}

/// Node of the file tree returned by `web.get_torrent_files`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum FileNode {
    #[serde(rename = "file")]
    File(FileEntry),
    #[serde(rename = "dir")]
    Dir(DirEntry),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileEntry {
    #[serde(default)]
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) progress: f64,
    #[serde(default)]
    pub(crate) ratio: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirEntry {
    #[serde(default)]
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) progress: f64,
    #[serde(default)]
    pub(crate) ratio: f64,
    #[serde(default)]
    pub(crate) contents: BTreeMap<String, FileNode>,
}

/// Result of `web.update_ui`. Only the torrent digest is decoded.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UiUpdate {
    pub(crate) torrents: Option<BTreeMap<String, TorrentEntry>>,
}

/// One torrent of the `web.update_ui` digest.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TorrentEntry {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) progress: f64,
    #[serde(default)]
    pub(crate) ratio: f64,
}
