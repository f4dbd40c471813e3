//! HTTP client construction with optional SOCKS5 proxy routing
//!
//! All outbound requests share one config: a per-request timeout and an
//! optional anonymizing proxy address.

use reqwest::{Client, Proxy};
use std::time::Duration;
use thiserror::Error;

/// Default footprint probe timeout in seconds
pub const PROBE_TIMEOUT_SECS: u64 = 8;

/// Network configuration shared by the profile source and the prober
#[derive(Debug, Clone)]
pub struct NetConfig {
    /// SOCKS5 proxy address (e.g. socks5h://127.0.0.1:9050), None for direct
    pub proxy_addr: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            proxy_addr: None,
            timeout_secs: PROBE_TIMEOUT_SECS,
        }
    }
}

impl NetConfig {
    pub fn with_proxy(mut self, addr: &str) -> Self {
        self.proxy_addr = Some(addr.to_string());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Errors from client construction and proxy checking
#[derive(Debug, Error)]
pub enum NetError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Proxy unreachable at {0}")]
    ProxyUnreachable(String),
}

/// User agents for rotation
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:138.0) Gecko/20100101 Firefox/138.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.7; rv:138.0) Gecko/20100101 Firefox/138.0",
];

/// Get a random user agent
pub fn random_user_agent() -> &'static str {
    use rand::Rng;
    let idx = rand::thread_rng().gen_range(0..USER_AGENTS.len());
    USER_AGENTS[idx]
}

/// Create an HTTP client, routed through the proxy when one is configured
pub fn create_client(config: &NetConfig) -> Result<Client, NetError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(random_user_agent());

    if let Some(addr) = &config.proxy_addr {
        let proxy = Proxy::all(addr).map_err(|e| NetError::ClientBuild(e.to_string()))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| NetError::ClientBuild(e.to_string()))
}

/// Canary URL for the proxy reachability check
const PROXY_CANARY_URL: &str = "https://www.wikipedia.org/";

/// Verify the configured proxy is reachable before any probing starts.
///
/// A dead proxy would otherwise make every platform look "not found", which
/// is indistinguishable from a clean miss. Failure here is scan-aborting.
/// No-op when no proxy is configured.
pub async fn check_proxy_connection(config: &NetConfig) -> Result<(), NetError> {
    let Some(addr) = &config.proxy_addr else {
        return Ok(());
    };

    let client = create_client(config)?;

    match client.get(PROXY_CANARY_URL).send().await {
        Ok(_) => Ok(()),
        Err(_) => Err(NetError::ProxyUnreachable(addr.clone())),
    }
}
