// tests/http_crawl.rs
// =============================================================================
// End-to-end tests over real HTTP: the production HttpFetcher against a
// local wiremock server. The engine itself is covered by unit tests with an
// in-memory fetcher; these confirm the reqwest plumbing and the full
// start() -> crawl -> save path.
// =============================================================================

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use spiderling::{CrawlEvent, Spider, SpiderConfig};

async fn serve_page(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn crawls_a_site_over_http() {
    let server = MockServer::start().await;
    let root = server.uri();
    let child = format!("{root}/test");

    serve_page(
        &server,
        "/",
        200,
        &format!("<html><body><a href='{child}'>link</a></body></html>"),
    )
    .await;
    serve_page(&server, "/test", 200, "<html><body></body></html>").await;

    let mut spider = Spider::new(SpiderConfig::new(&root).with_max_visits(10)).unwrap();
    spider.start().await.unwrap();

    let result = spider.result();
    assert_eq!(result.len(), 2);
    assert_eq!(result.get(&root).unwrap().urls, vec![child.clone()]);
    assert!(result.get(&child).unwrap().urls.is_empty());
}

#[tokio::test]
async fn non_success_status_yields_no_entry() {
    let server = MockServer::start().await;
    let root = server.uri();

    serve_page(&server, "/", 404, "not found").await;

    let mut spider = Spider::new(SpiderConfig::new(&root)).unwrap();
    spider.start().await.unwrap();

    assert!(spider.result().is_empty());
    assert_eq!(
        spider.events(),
        &[CrawlEvent::FetchFailed {
            url: root,
            reason: "HTTP 404".to_string(),
        }]
    );
}

#[tokio::test]
async fn captures_exact_body_over_http() {
    let server = MockServer::start().await;
    let root = server.uri();
    let body = "<html><body><h1>This is a header</h1></body></html>";

    serve_page(&server, "/", 200, body).await;

    let mut spider =
        Spider::new(SpiderConfig::new(&root).with_capture_body(true)).unwrap();
    spider.start().await.unwrap();

    assert_eq!(spider.result().get(&root).unwrap().body.as_deref(), Some(body));
}

#[tokio::test]
async fn start_persists_results_to_disk() {
    let server = MockServer::start().await;
    let root = server.uri();
    let child = format!("{root}/numbered/42");

    serve_page(
        &server,
        "/",
        200,
        &format!("<a href='{child}'>42</a><a href='{root}/other'>other</a>"),
    )
    .await;
    serve_page(&server, "/numbered/42", 200, "").await;
    serve_page(&server, "/other", 200, "").await;

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("crawl.json");

    let config = SpiderConfig::new(&root)
        .with_link_filter(regex::Regex::new(r"/numbered/[0-9]+$").unwrap())
        .with_save_destination(&destination);
    let mut spider = Spider::new(config).unwrap();
    spider.start().await.unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(saved[&root]["urls"], serde_json::json!([child]));
}
