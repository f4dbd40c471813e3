//! Username footprint prober
//!
//! Checks each platform in the fixed registry for a page answering under the
//! target username. One bounded-timeout GET per platform, strictly one at a
//! time; probes are idempotent GETs with no side effects.

use reqwest::Client;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use shrike_core::PLATFORMS;

use crate::{check_proxy_connection, create_client, NetConfig, NetError};

/// Per-platform probe result.
///
/// `ProbeError` (timeout, DNS, connection reset) is kept distinct from a
/// clean non-success response while the report is assembled, then collapsed
/// to "not found" in the hits table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Platform answered success for the username URL
    Found,
    /// Platform answered, but not with success
    NotFound,
    /// The probe itself failed; treated as not found at the table level
    ProbeError,
}

/// Outcome of a full footprint sweep
#[derive(Debug, Clone, Default)]
pub struct FootprintReport {
    /// Platform name -> probed URL, only platforms that answered success
    pub hits: BTreeMap<String, String>,
    /// Raw per-platform outcomes, retained for observability
    pub outcomes: BTreeMap<String, ProbeOutcome>,
}

/// Probe every registered platform for the username, sequentially.
///
/// When a proxy is configured its reachability is verified first; a dead
/// proxy aborts the sweep instead of rendering every platform "not found".
pub async fn probe_username_footprint(
    username: &str,
    config: &NetConfig,
) -> Result<FootprintReport, NetError> {
    check_proxy_connection(config).await?;

    let client = create_client(config)?;
    let mut report = FootprintReport::default();

    for platform in PLATFORMS {
        let url = platform.build_url(username);
        let outcome = probe_one(&client, &url).await;
        debug!("{}: {:?}", platform.name, outcome);

        if outcome == ProbeOutcome::Found {
            report.hits.insert(platform.name.to_string(), url);
        }
        report.outcomes.insert(platform.name.to_string(), outcome);
    }

    Ok(report)
}

async fn probe_one(client: &Client, url: &str) -> ProbeOutcome {
    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => ProbeOutcome::Found,
        Ok(response) => {
            debug!("{} returned status: {}", url, response.status());
            ProbeOutcome::NotFound
        }
        Err(e) => {
            warn!("Probe of {} failed: {}", url, e);
            ProbeOutcome::ProbeError
        }
    }
}
