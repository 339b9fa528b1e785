//! The check against live HTTP servers.
use std::time::{Duration, Instant};

use torrust_http_check::check::request::HttpFetcher;
use torrust_http_check::check::run;
use torrust_http_check::check::verdict::{Level, Verdict};
use torrust_http_check_configuration::Configuration;
use torrust_http_check_test_helpers::configuration;
use torrust_http_check_test_helpers::server::{unreachable_url, SilentServer, StubServer};
use tracing::level_filters::LevelFilter;

use crate::common::logging::{self, tracing_stderr_init};

async fn check(config: &Configuration) -> Verdict {
    logging::INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::OFF);
    });

    run(config, &HttpFetcher::new(config.timeout())).await
}

mod for_the_status_code {
    use torrust_http_check::check::verdict::Level;
    use torrust_http_check_configuration::Configuration;
    use torrust_http_check_test_helpers::configuration;
    use torrust_http_check_test_helpers::server::StubServer;

    use super::check;

    #[tokio::test]
    async fn it_should_be_ok_when_the_server_responds_with_a_success_status() {
        let server = StubServer::start(200, "").await;

        let verdict = check(&configuration::ephemeral(&server.url())).await;

        assert_eq!(verdict.level, Level::Ok);
        assert_eq!(verdict.message, "200 OK");
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn it_should_be_critical_when_the_server_responds_with_an_error_status() {
        let server = StubServer::start(404, "").await;

        let verdict = check(&configuration::ephemeral(&server.url())).await;

        assert_eq!(verdict.level, Level::Critical);
        assert_eq!(verdict.message, "404 Not Found");
    }

    #[tokio::test]
    async fn it_should_be_a_warning_and_not_follow_the_redirection_when_redirections_are_not_allowed() {
        let server = StubServer::start(301, "").await;

        let verdict = check(&configuration::ephemeral(&server.url())).await;

        assert_eq!(verdict.level, Level::Warning);
        assert_eq!(verdict.message, "301 Moved Permanently: unexpected redirection");
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn it_should_be_ok_and_not_follow_the_redirection_when_redirections_are_allowed() {
        let server = StubServer::start(302, "").await;
        let config = Configuration {
            redirect_ok: true,
            ..configuration::ephemeral(&server.url())
        };

        let verdict = check(&config).await;

        assert_eq!(verdict.level, Level::Ok);
        assert_eq!(verdict.message, "302 Found");
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn it_should_be_ok_when_the_server_responds_with_the_expected_status() {
        let server = StubServer::start(503, "maintenance").await;
        let config = Configuration {
            response_code: Some(503),
            ..configuration::ephemeral(&server.url())
        };

        let verdict = check(&config).await;

        assert_eq!(verdict.level, Level::Ok);
        assert_eq!(verdict.message, "503 Service Unavailable");
    }

    #[tokio::test]
    async fn it_should_be_critical_when_the_server_does_not_respond_with_the_expected_status() {
        let server = StubServer::start(200, "").await;
        let config = Configuration {
            response_code: Some(301),
            ..configuration::ephemeral(&server.url())
        };

        let verdict = check(&config).await;

        assert_eq!(verdict.level, Level::Critical);
        assert_eq!(verdict.message, "expected HTTP status 301 Moved Permanently, got 200 OK");
    }
}

mod for_the_body {
    use torrust_http_check::check::verdict::Level;
    use torrust_http_check_configuration::Configuration;
    use torrust_http_check_test_helpers::configuration;
    use torrust_http_check_test_helpers::server::StubServer;

    use super::check;

    const HEALTHY: &str = r#"{"status":"Ok"}"#;

    #[tokio::test]
    async fn it_should_be_ok_when_a_required_pattern_is_present() {
        let server = StubServer::start(200, HEALTHY).await;
        let config = Configuration {
            query: Some(r#""status":"Ok""#.to_string()),
            ..configuration::ephemeral(&server.url())
        };

        let verdict = check(&config).await;

        assert_eq!(verdict.level, Level::Ok);
        assert_eq!(verdict.message, r#"200 OK found /"status":"Ok"/ in 15 bytes"#);
    }

    #[tokio::test]
    async fn it_should_be_critical_when_a_required_pattern_is_missing() {
        let server = StubServer::start(200, HEALTHY).await;
        let config = Configuration {
            query: Some("Error".to_string()),
            ..configuration::ephemeral(&server.url())
        };

        let verdict = check(&config).await;

        assert_eq!(verdict.level, Level::Critical);
        assert_eq!(verdict.message, "did not find /Error/ in 15 bytes");
    }

    #[tokio::test]
    async fn it_should_be_critical_when_a_forbidden_pattern_is_present() {
        let server = StubServer::start(200, HEALTHY).await;
        let config = Configuration {
            negquery: Some("Ok".to_string()),
            ..configuration::ephemeral(&server.url())
        };

        let verdict = check(&config).await;

        assert_eq!(verdict.level, Level::Critical);
        assert_eq!(verdict.message, "200 OK found /Ok/ in 15 bytes");
    }

    #[tokio::test]
    async fn it_should_be_ok_when_a_forbidden_pattern_is_missing() {
        let server = StubServer::start(200, HEALTHY).await;
        let config = Configuration {
            negquery: Some("Error".to_string()),
            ..configuration::ephemeral(&server.url())
        };

        let verdict = check(&config).await;

        assert_eq!(verdict.level, Level::Ok);
        assert_eq!(verdict.message, "did not find /Error/ in 15 bytes");
    }

    #[tokio::test]
    async fn it_should_verify_the_body_of_an_allowed_redirection() {
        let server = StubServer::start(301, "moved").await;
        let config = Configuration {
            redirect_ok: true,
            query: Some("moved".to_string()),
            ..configuration::ephemeral(&server.url())
        };

        let verdict = check(&config).await;

        assert_eq!(verdict.level, Level::Ok);
        assert_eq!(verdict.message, "301 Moved Permanently found /moved/ in 5 bytes");
    }
}

#[tokio::test]
async fn it_should_be_unknown_without_sending_any_request_when_the_configuration_is_invalid() {
    let server = StubServer::start(200, "").await;
    let config = Configuration {
        query: Some("foo".to_string()),
        negquery: Some("bar".to_string()),
        ..configuration::ephemeral(&server.url())
    };

    let verdict = check(&config).await;

    assert_eq!(verdict.level, Level::Unknown);
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn it_should_be_critical_when_the_server_does_not_respond_within_the_timeout() {
    let server = SilentServer::start().await;
    let config = Configuration {
        timeout: 1,
        ..configuration::ephemeral(&server.url())
    };

    let started = Instant::now();

    let verdict = check(&config).await;

    let elapsed = started.elapsed();

    assert_eq!(verdict.level, Level::Critical);
    assert_eq!(verdict.message, "Request exceeded timeout of 1 seconds");
    assert!(elapsed >= Duration::from_millis(900), "it returned too soon: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "it did not honor the timeout: {elapsed:?}");
}

#[tokio::test]
async fn it_should_be_critical_when_the_server_is_not_reachable() {
    let config = configuration::ephemeral(&unreachable_url().await);

    let verdict = check(&config).await;

    assert_eq!(verdict.level, Level::Critical);
    assert!(verdict.message.starts_with("Request error: "), "{}", verdict.message);
}

#[tokio::test]
async fn it_should_be_critical_when_the_url_is_not_valid() {
    let config = configuration::ephemeral("not a url");

    let verdict = check(&config).await;

    assert_eq!(verdict.level, Level::Critical);
    assert!(verdict.message.starts_with("Request error: "), "{}", verdict.message);
}
