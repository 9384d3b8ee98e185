//! Integration tests for the evaluation service
//!
//! These tests use wiremock to stand in for hosts publishing robots.txt
//! documents and exercise the full resolve → fetch → parse → decide path.

use torii_robots::config::Config;
use torii_robots::RobotsService;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_with_robots(body: impl Into<Vec<u8>>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.into()))
        .mount(&server)
        .await;
    server
}

fn service() -> RobotsService {
    RobotsService::new(&Config::default()).expect("Failed to build service")
}

fn url_of(server: &MockServer, resource_path: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), resource_path)).expect("Failed to build URL")
}

#[tokio::test]
async fn test_disallow_rule_honored() {
    let server = server_with_robots("User-agent: *\nDisallow: /private\n").await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/private/data"))
        .await
        .unwrap();
    assert!(!allowed);

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/public"))
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn test_specific_agent_group_preferred_over_wildcard() {
    let robots = "User-agent: *\nDisallow: /\n\nUser-agent: example-bot\nAllow: /\n";
    let server = server_with_robots(robots).await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/page"))
        .await
        .unwrap();
    assert!(allowed);

    let allowed = service
        .is_allowed("other-bot", &url_of(&server, "/page"))
        .await
        .unwrap();
    assert!(!allowed);
}

#[tokio::test]
async fn test_first_match_beats_longer_pattern() {
    let server = server_with_robots("User-agent: *\nDisallow: /a*\nAllow: /a/public\n").await;
    let service = service();

    // The disallow is listed first, so it wins over the longer allow
    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/a/public"))
        .await
        .unwrap();
    assert!(!allowed);
}

#[tokio::test]
async fn test_missing_robots_allows_everything() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/anything"))
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn test_server_error_allows_everything() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/anything"))
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn test_html_in_place_of_robots_allows_everything() {
    let html = "<!DOCTYPE html>\n<html>\n<body>\n<h1>Not found</h1>\n</body>\n</html>";
    let server = server_with_robots(html).await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/private"))
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn test_utf16_robots_allows_everything() {
    // A restrictive document in a rejected encoding must fail open
    let body: Vec<u8> = "User-agent: *\nDisallow: /\n"
        .encode_utf16()
        .flat_map(|u| u.to_be_bytes())
        .collect();
    let server = server_with_robots(body).await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/anything"))
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn test_latin1_robots_parses() {
    // 0xE9 is 'é' in ISO-8859-1 and invalid UTF-8
    let body = b"# caf\xe9\nUser-agent: *\nDisallow: /private\n".to_vec();
    let server = server_with_robots(body).await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/private"))
        .await
        .unwrap();
    assert!(!allowed);
}

#[tokio::test]
async fn test_document_fetched_once_and_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /x\n"))
        .expect(1)
        .mount(&server)
        .await;
    let service = service();

    for _ in 0..3 {
        let allowed = service
            .is_allowed("example-bot", &url_of(&server, "/x/page"))
            .await
            .unwrap();
        assert!(!allowed);
    }
    // The expect(1) on the mock verifies the cache when the server drops
}

#[tokio::test]
async fn test_empty_robots_allows_everything() {
    let server = server_with_robots("").await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/private"))
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn test_wildcard_and_anchor_patterns_end_to_end() {
    let server = server_with_robots("User-agent: *\nDisallow: /folder/*.gif$\n").await;
    let service = service();

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/folder/cat.gif"))
        .await
        .unwrap();
    assert!(!allowed);

    let allowed = service
        .is_allowed("example-bot", &url_of(&server, "/folder/cat.gif2"))
        .await
        .unwrap();
    assert!(allowed);
}
