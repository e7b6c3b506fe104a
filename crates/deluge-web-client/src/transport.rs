//! HTTP transport to the Deluge Web UI.

use std::{fs, path::Path, sync::Arc};

use cookie_store::CookieStore;
use deluge_web_types::DelugeError;
use reqwest::StatusCode;
use reqwest_cookie_store::CookieStoreMutex;
use tracing::debug;
use url::Url;

use crate::config::DelugeConfig;
use crate::ops::DelugeOps;
use crate::wire::RpcRequest;

/// Path of the JSON-RPC endpoint, relative to the Web UI base URL.
const RPC_PATH: &str = "json";

/// Public suffix list used for cookie domain matching unless one is configured.
const BUNDLED_PUBLIC_SUFFIX_LIST: &str = include_str!("../data/public_suffix_list.dat");

/// HTTP transport with a persistent cookie store, so the session cookie
/// handed out by `auth.login` is sent along with every later call.
#[derive(Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    url: Url,
    cookies: Arc<CookieStoreMutex>,
}

impl HttpTransport {
    pub(crate) fn try_new(config: &DelugeConfig) -> Result<Self, DelugeError> {
        let url = rpc_url(&config.url)?;

        let public_suffix_list = match config.public_suffix_list.as_deref() {
            Some(path) => load_public_suffix_list(path)?,
            None => parse_public_suffix_list(BUNDLED_PUBLIC_SUFFIX_LIST)?,
        };
        let cookies = Arc::new(CookieStoreMutex::new(CookieStore::new(Some(
            public_suffix_list,
        ))));

        let mut builder = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| DelugeError::InvalidConfig(format!("Unable to build HTTP client: {e}")))?;

        Ok(Self { http, url, cookies })
    }

    /// The JSON-RPC endpoint requests are posted to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Cookies of the current session.
    pub fn cookies(&self) -> &CookieStoreMutex {
        &self.cookies
    }
}

impl DelugeOps for HttpTransport {
    async fn post(&self, request: &RpcRequest) -> Result<String, DelugeError> {
        let response = self
            .http
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| DelugeError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("Request {} rejected with HTTP {status}", request.id);
            return Err(DelugeError::HttpStatus(status.to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| DelugeError::Network(e.to_string()))
    }
}

/// Appends the JSON-RPC path to the Web UI base URL.
fn rpc_url(base: &str) -> Result<Url, DelugeError> {
    let joined = format!("{}/{RPC_PATH}", base.trim_end_matches('/'));
    Url::parse(&joined).map_err(|e| DelugeError::InvalidConfig(format!("Invalid RPC URL: {e}")))
}

fn load_public_suffix_list(path: &Path) -> Result<publicsuffix::List, DelugeError> {
    debug!("Loading public suffix list from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|e| {
        DelugeError::InvalidConfig(format!(
            "Unable to read public suffix list {}: {e}",
            path.display()
        ))
    })?;
    parse_public_suffix_list(&contents)
}

fn parse_public_suffix_list(contents: &str) -> Result<publicsuffix::List, DelugeError> {
    contents
        .parse()
        .map_err(|e| DelugeError::InvalidConfig(format!("Invalid public suffix list: {e}")))
}
