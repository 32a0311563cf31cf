use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

use crate::domain::routes::{POSTS_COLLECTION, POSTS_TAG};

/// Command-line arguments for the posts-revalidate binary.
#[derive(Debug, Parser)]
#[command(
    name = "posts-revalidate",
    version,
    about = "Post revalidation tooling for the CMS and portfolio sites"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "POSTS_REVALIDATE_CONFIG_FILE",
        value_name = "PATH"
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Ask the portfolio site to revalidate one post.
    Notify(NotifyArgs),
    /// Show whether portfolio revalidation is configured.
    Check,
}

#[derive(Debug, Args, Clone)]
pub struct NotifyArgs {
    /// Slug of the post; the portfolio path is `/blog/{slug}`.
    #[arg(long, value_name = "SLUG")]
    pub slug: String,

    /// Cache tag sent to the portfolio site.
    #[arg(long, value_name = "TAG", default_value = POSTS_TAG)]
    pub tag: String,

    /// Collection name sent to the portfolio site.
    #[arg(long, value_name = "NAME", default_value = POSTS_COLLECTION)]
    pub collection: String,
}

#[derive(Debug, Args, Default, Clone)]
pub struct Overrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Portfolio revalidation endpoint.
    #[arg(
        long = "portfolio-revalidate-url",
        env = "PORTFOLIO_REVALIDATE_URL",
        value_name = "URL"
    )]
    pub portfolio_revalidate_url: Option<String>,

    /// Shared secret sent with every portfolio revalidation.
    #[arg(
        long = "portfolio-revalidate-secret",
        env = "PORTFOLIO_REVALIDATE_SECRET",
        value_name = "SECRET",
        hide_env_values = true
    )]
    pub portfolio_revalidate_secret: Option<String>,

    /// Timeout for the portfolio request.
    #[arg(long = "portfolio-timeout-seconds", value_name = "SECONDS")]
    pub portfolio_timeout_seconds: Option<u64>,
}
