//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{fmt, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

pub use cli::{CliArgs, Command, NotifyArgs, Overrides};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "posts-revalidate";
const ENV_PREFIX: &str = "POSTS_REVALIDATE";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub portfolio: PortfolioSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Clone, Default)]
pub struct PortfolioSettings {
    pub revalidate_url: Option<Url>,
    pub revalidate_secret: Option<String>,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for PortfolioSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioSettings")
            .field("revalidate_url", &self.revalidate_url.as_ref().map(Url::as_str))
            .field(
                "revalidate_secret",
                &self.revalidate_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    portfolio: RawPortfolioSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(url) = overrides.portfolio_revalidate_url.as_ref() {
            self.portfolio.revalidate_url = Some(url.clone());
        }
        if let Some(secret) = overrides.portfolio_revalidate_secret.as_ref() {
            self.portfolio.revalidate_secret = Some(secret.clone());
        }
        if let Some(seconds) = overrides.portfolio_timeout_seconds {
            self.portfolio.timeout_seconds = Some(seconds);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings { logging, portfolio } = raw;

        let logging = build_logging_settings(logging)?;
        let portfolio = build_portfolio_settings(portfolio)?;

        Ok(Self { logging, portfolio })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_portfolio_settings(
    portfolio: RawPortfolioSettings,
) -> Result<PortfolioSettings, LoadError> {
    let revalidate_url = match non_blank(portfolio.revalidate_url) {
        Some(value) => Some(parse_endpoint(&value)?),
        None => None,
    };
    let revalidate_secret = non_blank(portfolio.revalidate_secret);

    let timeout = match portfolio.timeout_seconds {
        Some(0) => {
            return Err(LoadError::invalid(
                "portfolio.timeout_seconds",
                "must be greater than zero",
            ));
        }
        Some(seconds) => Some(Duration::from_secs(seconds)),
        None => None,
    };

    Ok(PortfolioSettings {
        revalidate_url,
        revalidate_secret,
        timeout,
    })
}

fn parse_endpoint(value: &str) -> Result<Url, LoadError> {
    let url = Url::parse(value).map_err(|err| {
        LoadError::invalid(
            "portfolio.revalidate_url",
            format!("invalid URL `{value}`: {err}"),
        )
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LoadError::invalid(
            "portfolio.revalidate_url",
            format!("unsupported scheme `{scheme}`, expected http or https"),
        )),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Clone, Deserialize, Default)]
#[serde(default)]
struct RawPortfolioSettings {
    revalidate_url: Option<String>,
    revalidate_secret: Option<String>,
    timeout_seconds: Option<u64>,
}

impl fmt::Debug for RawPortfolioSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawPortfolioSettings")
            .field("revalidate_url", &self.revalidate_url)
            .field(
                "revalidate_secret",
                &self.revalidate_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
