//! Portfolio endpoint configuration.

use std::fmt;
use std::time::Duration;

use url::Url;

/// Where and how to notify the portfolio site.
///
/// The external call is enabled only when both the URL and the secret are
/// present; otherwise every notification is skipped.
#[derive(Clone, Default)]
pub struct PortfolioConfig {
    pub revalidate_url: Option<Url>,
    pub revalidate_secret: Option<String>,
    /// Whole-request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
}

impl PortfolioConfig {
    pub fn new(revalidate_url: Url, revalidate_secret: impl Into<String>) -> Self {
        Self {
            revalidate_url: Some(revalidate_url),
            revalidate_secret: Some(revalidate_secret.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The endpoint and secret, when both are configured and non-empty.
    pub fn endpoint(&self) -> Option<(&Url, &str)> {
        let url = self.revalidate_url.as_ref()?;
        let secret = self
            .revalidate_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())?;
        Some((url, secret))
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint().is_some()
    }
}

impl fmt::Debug for PortfolioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioConfig")
            .field("revalidate_url", &self.revalidate_url.as_ref().map(Url::as_str))
            .field(
                "revalidate_secret",
                &self.revalidate_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl From<&crate::config::PortfolioSettings> for PortfolioConfig {
    fn from(settings: &crate::config::PortfolioSettings) -> Self {
        Self {
            revalidate_url: settings.revalidate_url.clone(),
            revalidate_secret: settings.revalidate_secret.clone(),
            timeout: settings.timeout,
        }
    }
}
