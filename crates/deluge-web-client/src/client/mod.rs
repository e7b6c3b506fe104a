//! Deluge Web JSON-RPC client implementation.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::{Value, json};
use tracing::{debug, warn};

use deluge_web_types::{DelugeError, Torrent, TorrentDaemon};

use crate::config::DelugeConfig;
use crate::conversions::torrent_from_files;
use crate::ops::DelugeOps;
use crate::transport::HttpTransport;
use crate::wire::{Envelope, FileNode, RpcError, RpcRequest, UiUpdate};


/// Fields requested from `web.update_ui` for every torrent.
const DIGEST_FIELDS: [&str; 4] = ["name", "ratio", "message", "progress"];

/// DelugeClient is a session with a Deluge daemon through its Web UI.
///
/// The session owns a request counter that is advanced after every successful
/// call, which is why all operations take `&mut self`. Share a client between
/// tasks only behind a mutex.
#[allow(missing_debug_implementations, private_bounds)]
pub struct DelugeClient<T: DelugeOps = HttpTransport> {
    client: T,
    password: String,
    request_id: u64,
}

impl DelugeClient {
    /// Create a new DelugeClient for the Web UI at `url` (the `/json` endpoint
    /// path is appended). Self-signed certificates are accepted.
    ///
    /// No request is sent; call [`TorrentDaemon::connect`] to log in.
    ///
    /// # Panics
    ///
    /// Panics if `url` or `password` is empty.
    pub fn new(url: &str, password: &str) -> Result<Self, DelugeError> {
        Self::with_config(DelugeConfig::new(url, password))
    }

    /// Create a new DelugeClient from a full configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configured URL or password is empty.
    pub fn with_config(config: DelugeConfig) -> Result<Self, DelugeError> {
        assert!(!config.url.is_empty(), "url cannot be empty");
        assert!(!config.password.is_empty(), "password cannot be empty");

        let client = HttpTransport::try_new(&config)?;
        debug!("Deluge Web RPC endpoint is {}", client.url());
        Ok(Self {
            client,
            password: config.password,
            request_id: 1,
        })
    }
}

#[allow(private_bounds)]
impl<T: DelugeOps> DelugeClient<T> {
    /// Create a DelugeClient with a custom transport implementation.
    /// This is primarily useful for testing with mocks.
    #[cfg(test)]
    pub(crate) fn with_client(client: T, password: &str) -> Self {
        Self {
            client,
            password: password.to_owned(),
            request_id: 1,
        }
    }

    /// ID the next request will be sent with.
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Posts `method` with the current request ID and decodes the response
    /// envelope. The request ID is left untouched.
    async fn call<R: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Value,
    ) -> Result<Envelope<R>, DelugeError> {
        let request = RpcRequest {
            id: self.request_id,
            method,
            params,
        };
        debug!("Calling {method} with id {}", request.id);
        let body = self.client.post(&request).await?;

        let envelope: Envelope<R> = serde_json::from_str(&body).map_err(|e| {
            warn!("Unparseable response to {method}: {e}");
            DelugeError::UnparseableResponse(e.to_string())
        })?;
        debug!("Response {} to {method} received", envelope.id);
        Ok(envelope)
    }

    /// Like [`Self::call`], but fails on an error envelope and advances the
    /// request ID on success.
    async fn call_checked<R: DeserializeOwned>(
        &mut self,
        method: &'static str,
        params: Value,
    ) -> Result<Option<R>, DelugeError> {
        let envelope = self.call(method, params).await?;
        if let Some(RpcError { code, message }) = envelope.failure() {
            warn!("{method} failed: error code {code}! {message}");
        }
        let result = envelope.into_result()?;
        self.request_id += 1;
        Ok(result)
    }
}

#[allow(private_bounds)]
impl<T: DelugeOps> TorrentDaemon for DelugeClient<T> {
    async fn connect(&mut self) -> Result<(), DelugeError> {
        debug!("Logging in");
        let envelope: Envelope<bool> = self.call("auth.login", json!([self.password])).await?;

        if envelope.result != Some(true) {
            let RpcError { code, message } = envelope.error.unwrap_or_default();
            warn!("Login rejected: error code {code}! {message}");
            return Err(DelugeError::Authentication { code, message });
        }

        self.request_id += 1;
        debug!("Logged in");
        Ok(())
    }

    async fn add_magnet(&mut self, link: &str) -> Result<(), DelugeError> {
        debug!("Adding torrent {link}");
        self.call_checked::<IgnoredAny>(
            "web.add_torrents",
            json!([[{ "path": link, "options": "" }]]),
        )
        .await?;
        debug!("Add command sent");
        Ok(())
    }

    async fn get(&mut self, id: &str) -> Result<Option<Torrent>, DelugeError> {
        debug!("Getting files of torrent {id}");
        let torrent = self
            .call_checked::<FileNode>("web.get_torrent_files", json!([id]))
            .await?
            .and_then(|root| torrent_from_files(id, root));
        debug!("Torrent {id}: {torrent:?}");

        Ok(torrent)
    }

    async fn get_all(&mut self) -> Result<Vec<Torrent>, DelugeError> {
        debug!("Listing torrents");
        let torrents = self
            .call_checked::<UiUpdate>("web.update_ui", json!([DIGEST_FIELDS, {}]))
            .await?
            .unwrap_or_default()
            .into_torrents();
        debug!("Torrents: {torrents:?}");

        Ok(torrents)
    }

    async fn remove(&mut self, id: &str) -> Result<(), DelugeError> {
        debug!("Removing torrent {id} with its data");
        self.call_checked::<IgnoredAny>("core.remove_torrent", json!([id, true]))
            .await?;
        debug!("Remove command sent");
        Ok(())
    }

    async fn move_to_queue_top(&mut self, id: &str) -> Result<(), DelugeError> {
        debug!("Moving torrent {id} to the top of the queue");
        self.call_checked::<IgnoredAny>("core.queue_top", json!([[id]]))
            .await?;
        debug!("Queue command sent");
        Ok(())
    }
}
