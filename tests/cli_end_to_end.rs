use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("posts-revalidate"));
    cmd.env_remove("PORTFOLIO_REVALIDATE_URL")
        .env_remove("PORTFOLIO_REVALIDATE_SECRET")
        .env_remove("POSTS_REVALIDATE_CONFIG_FILE");
    cmd
}

#[test]
fn notify_posts_to_portfolio_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/revalidate")
            .json_body_includes(r#"{"secret":"cli-secret","path":"/blog/hello","collection":"posts"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"revalidated":true,"now":1700000000000}"#);
    });

    cli()
        .env("PORTFOLIO_REVALIDATE_SECRET", "cli-secret")
        .arg("--portfolio-revalidate-url")
        .arg(server.url("/api/revalidate"))
        .arg("notify")
        .arg("--slug")
        .arg("hello")
        .assert()
        .success()
        .stdout(contains("revalidated /blog/hello"));

    mock.assert();
}

#[test]
fn notify_fails_when_portfolio_rejects() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/api/revalidate");
        then.status(401).body("Invalid secret");
    });

    cli()
        .arg("--portfolio-revalidate-url")
        .arg(server.url("/api/revalidate"))
        .arg("--portfolio-revalidate-secret")
        .arg("wrong")
        .arg("notify")
        .arg("--slug")
        .arg("hello")
        .assert()
        .failure();
}

#[test]
fn notify_without_configuration_is_skipped() {
    cli()
        .arg("notify")
        .arg("--slug")
        .arg("hello")
        .assert()
        .success()
        .stdout(contains("skipped /blog/hello"));
}

#[test]
fn check_reports_missing_secret_without_leaking_values() {
    cli()
        .arg("--portfolio-revalidate-url")
        .arg("https://portfolio.example/api/revalidate")
        .arg("check")
        .assert()
        .success()
        .stdout(contains("disabled (missing secret)"));
}

#[test]
fn invalid_url_fails_fast() {
    cli()
        .arg("--portfolio-revalidate-url")
        .arg("not a url")
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("portfolio.revalidate_url"));
}
