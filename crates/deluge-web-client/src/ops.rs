//! Internal trait abstracting the JSON-RPC transport.
//!
//! This module provides the [`DelugeOps`] trait which abstracts the HTTP round
//! trip to the daemon, enabling mocking in tests.

use deluge_web_types::DelugeError;

use crate::wire::RpcRequest;

/// Internal trait that abstracts posting a request to the daemon.
/// This allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub(crate) trait DelugeOps {
    /// Posts `request` and returns the raw body of a 200 OK response.
    async fn post(&self, request: &RpcRequest) -> Result<String, DelugeError>;
}
