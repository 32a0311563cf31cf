//! HTTP client for the portfolio revalidation endpoint.

use std::time::Instant;

use metrics::{counter, histogram};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::config::PortfolioConfig;
use super::error::NotifyError;
use super::request::{RevalidationRequest, RevalidationResponse, RevalidationTarget};

const METRIC_NOTIFY_TOTAL: &str = "posts_revalidate_portfolio_notify_total";
const METRIC_NOTIFY_MS: &str = "posts_revalidate_portfolio_notify_ms";
const UNREADABLE_BODY: &str = "<unreadable body>";

/// Result of a notification that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyOutcome {
    /// URL or secret is not configured; nothing was sent.
    Skipped,
    /// The portfolio accepted the request. `now` is echoed from its response.
    Delivered { now: Value },
}

/// Sends revalidation callbacks to the portfolio site.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct PortfolioNotifier {
    client: Client,
    config: PortfolioConfig,
}

impl PortfolioNotifier {
    pub fn new(config: PortfolioConfig) -> Result<Self, NotifyError> {
        let mut builder = Client::builder().user_agent(Self::user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(NotifyError::Client)?;
        Ok(Self::with_client(client, config))
    }

    /// Use an existing client, e.g. one shared with the rest of the host.
    /// `config.timeout` is ignored; configure it on the client instead.
    pub fn with_client(client: Client, config: PortfolioConfig) -> Self {
        Self { client, config }
    }

    pub fn user_agent() -> &'static str {
        concat!("posts-revalidate/", env!("CARGO_PKG_VERSION"))
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    /// Ask the portfolio site to revalidate `target`.
    ///
    /// Returns [`NotifyOutcome::Skipped`] without touching the network when
    /// the endpoint is not configured.
    pub async fn notify(&self, target: &RevalidationTarget) -> Result<NotifyOutcome, NotifyError> {
        let Some((url, secret)) = self.config.endpoint() else {
            debug!(
                path = %target.path,
                "Portfolio revalidation skipped: revalidate URL or secret not set"
            );
            counter!(METRIC_NOTIFY_TOTAL, "outcome" => "skipped").increment(1);
            return Ok(NotifyOutcome::Skipped);
        };

        let started_at = Instant::now();
        let result = self.send(url.clone(), secret, target).await;
        histogram!(METRIC_NOTIFY_MS).record(started_at.elapsed().as_secs_f64() * 1000.0);

        let outcome = match &result {
            Ok(_) => "delivered",
            Err(err) => err.kind(),
        };
        counter!(METRIC_NOTIFY_TOTAL, "outcome" => outcome).increment(1);

        result
    }

    /// Notify and log the outcome. Never fails.
    ///
    /// Lifecycle hooks call this so a slow or broken portfolio site cannot
    /// fail the save or delete that triggered it.
    pub async fn notify_and_log(&self, target: &RevalidationTarget) {
        match self.notify(target).await {
            Ok(NotifyOutcome::Delivered { now }) => {
                info!(path = %target.path, now = %now, "Portfolio revalidation successful");
            }
            Ok(NotifyOutcome::Skipped) => {}
            Err(NotifyError::Status { status, body }) => {
                error!(
                    path = %target.path,
                    status = status.as_u16(),
                    body = %body,
                    "Portfolio revalidation failed"
                );
            }
            Err(err) => {
                error!(path = %target.path, error = %err, "Portfolio revalidation error");
            }
        }
    }

    async fn send(
        &self,
        url: Url,
        secret: &str,
        target: &RevalidationTarget,
    ) -> Result<NotifyOutcome, NotifyError> {
        let body = RevalidationRequest::new(secret, target);
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(NotifyError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    warn!(
                        status = status.as_u16(),
                        error = %err,
                        "Failed to read portfolio error response body"
                    );
                    UNREADABLE_BODY.to_owned()
                }
            };
            return Err(NotifyError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(NotifyError::Transport)?;
        let parsed: RevalidationResponse = serde_json::from_slice(&bytes)?;
        Ok(NotifyOutcome::Delivered { now: parsed.now })
    }
}
