//! # Deluge Web JSON-RPC client.
//!
//! usage:
//!
//! ```rust,ignore
//! use deluge_web_client::DelugeClient;
//! use deluge_web_types::TorrentDaemon;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = DelugeClient::new("https://seedbox:8112", "deluge")?;
//!     client.connect().await?;
//!     client.add_magnet("magnet:?xt=urn:btih:...").await?;
//!     for torrent in client.get_all().await? {
//!         println!("{torrent}");
//!     }
//!     Ok(())
//! }
//! ```
//!

mod client;
mod config;
mod conversions;
mod ops;
mod transport;
mod wire;

#[cfg(test)]
mod testutil;

// only used by the integration tests
#[cfg(test)]
use tracing_subscriber as _;
#[cfg(test)]
use wiremock as _;

pub use client::DelugeClient;
pub use config::DelugeConfig;
pub use transport::HttpTransport;
