use async_trait::async_trait;
use log::debug;
use reqwest::header::RANGE;
use reqwest::redirect::Policy;
use tokio::time::Duration;

use crate::config::Config;
use crate::core::constants::{defaults, probe};
use crate::core::error::Result;

/// Decides whether a stream URL currently answers HTTP requests.
///
/// Implementations never fail: every error resolves to `false`.
#[async_trait]
pub trait CheckStream: Send + Sync {
    async fn check(&self, url: &str) -> bool;
}

/// Two-tier HTTP probe: a HEAD request, then a ranged GET when the HEAD
/// could not be completed or was answered outside 2xx.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: reqwest::Client,
}

impl HttpChecker {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(defaults::MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.timeout_duration(),
            config.user_agent.as_deref().unwrap_or(defaults::USER_AGENT),
        )
    }

    async fn ranged_get(&self, url: &str) -> bool {
        match self
            .client
            .get(url)
            .header(RANGE, probe::RANGE)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("GET {url} ({}) -> {status}", probe::RANGE);
                probe::RANGED_GET_ACCEPTED.contains(&status)
            }
            Err(err) => {
                debug!("GET {url} failed: {}", describe(&err));
                false
            }
        }
    }
}

#[async_trait]
impl CheckStream for HttpChecker {
    async fn check(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            // Non-2xx HEAD statuses get the ranged GET too.
            Ok(response) if !response.status().is_success() => {
                debug!(
                    "HEAD {url} -> {}, falling back to ranged GET",
                    response.status().as_u16()
                );
                self.ranged_get(url).await
            }
            // A completed 2xx HEAD is final.
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("HEAD {url} -> {status}");
                probe::HEAD_ACCEPTED.contains(&status)
            }
            Err(err) => {
                debug!("HEAD {url} failed, falling back to ranged GET: {}", describe(&err));
                self.ranged_get(url).await
            }
        }
    }
}

fn describe(err: &reqwest::Error) -> String {
    std::error::Error::source(err)
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string())
}
