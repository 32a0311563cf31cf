use std::process;

use posts_revalidate::{
    application::error::AppError,
    config::{self, Command, NotifyArgs, Settings},
    domain::routes::portfolio_post_path,
    infra::telemetry,
    portfolio::{NotifyOutcome, PortfolioConfig, PortfolioNotifier, RevalidationTarget},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;

    match cli_args.command {
        Command::Notify(args) => run_notify(&settings, args).await,
        Command::Check => {
            run_check(&settings);
            Ok(())
        }
    }
}

async fn run_notify(settings: &Settings, args: NotifyArgs) -> Result<(), AppError> {
    let notifier = PortfolioNotifier::new(PortfolioConfig::from(&settings.portfolio))?;
    let target = RevalidationTarget::new(
        portfolio_post_path(args.slug.trim()),
        args.tag,
        args.collection,
    );

    info!(path = %target.path, "Sending portfolio revalidation");

    match notifier.notify(&target).await? {
        NotifyOutcome::Delivered { now } => {
            println!("revalidated {} (now: {now})", target.path);
        }
        NotifyOutcome::Skipped => {
            println!("skipped {}: portfolio revalidation is not configured", target.path);
        }
    }

    Ok(())
}

fn run_check(settings: &Settings) {
    let portfolio = &settings.portfolio;
    let config = PortfolioConfig::from(portfolio);

    match config.endpoint() {
        Some((url, _)) => println!("portfolio revalidation: enabled ({url})"),
        None => {
            let missing: Vec<&str> = [
                portfolio.revalidate_url.is_none().then_some("url"),
                portfolio.revalidate_secret.is_none().then_some("secret"),
            ]
            .into_iter()
            .flatten()
            .collect();
            println!(
                "portfolio revalidation: disabled (missing {})",
                missing.join(", ")
            );
        }
    }

    if let Some(timeout) = portfolio.timeout {
        println!("portfolio timeout: {}s", timeout.as_secs());
    }
}
