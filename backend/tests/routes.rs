use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bloom_backend::api::{PageView, UpdateNotice};
use bloom_backend::config::PageConfig;
use bloom_backend::lyrics::LyricSheet;
use bloom_backend::{app, AppState};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

struct Fixture {
    _frontend: tempfile::TempDir,
    _lyrics: tempfile::TempDir,
    router: Router,
}

fn fixture(config: PageConfig) -> Fixture {
    let frontend = tempfile::tempdir().unwrap();
    std::fs::write(frontend.path().join("index.html"), "<canvas></canvas>").unwrap();
    let lyrics = tempfile::tempdir().unwrap();
    std::fs::write(lyrics.path().join("a.txt"), "la la\nla").unwrap();
    std::fs::write(lyrics.path().join("b.txt"), "oh").unwrap();

    let state = AppState::new(config, lyrics.path()).unwrap();
    let router = app(state, frontend.path());
    Fixture {
        _frontend: frontend,
        _lyrics: lyrics,
        router,
    }
}

fn sample_config() -> PageConfig {
    PageConfig {
        lyrics: vec!["a.txt".to_string(), "b.txt".to_string()],
        messages: vec!["m1".to_string(), "m2".to_string(), "m3".to_string()],
        prompts: vec!["Are you sure?".to_string()],
        version_url: None,
        ..PageConfig::default()
    }
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json<T: DeserializeOwned>(router: &Router, uri: &str) -> T {
    let (status, body) = get(router, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn page_view_reflects_config() {
    let fixture = fixture(sample_config());
    let view: PageView = get_json(&fixture.router, "/api/page").await;
    assert_eq!(view.messages, vec!["m1", "m2", "m3"]);
    assert_eq!(view.prompts, vec!["Are you sure?"]);
    assert_eq!(view.lyric_count, 2);
    assert_eq!(view.yes_destination, "yes.html");
}

#[tokio::test]
async fn lyrics_wrap_by_index() {
    let fixture = fixture(sample_config());
    let sheet: LyricSheet = get_json(&fixture.router, "/api/lyrics/0").await;
    assert_eq!(sheet.lines, vec!["la la", "la"]);

    let sheet: LyricSheet = get_json(&fixture.router, "/api/lyrics/3").await;
    assert_eq!(sheet.index, 1);
    assert_eq!(sheet.name, "b.txt");
    assert_eq!(sheet.lines, vec!["oh"]);
}

#[tokio::test]
async fn lyrics_without_resources_is_not_found() {
    let fixture = fixture(PageConfig::default());
    let (status, _) = get(&fixture.router, "/api/lyrics/0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_lyric_index_is_rejected() {
    let fixture = fixture(sample_config());
    let (status, _) = get(&fixture.router, "/api/lyrics/first").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_without_url_is_null() {
    let fixture = fixture(sample_config());
    let notice: UpdateNotice = get_json(&fixture.router, "/api/update").await;
    assert_eq!(notice.message, None);
}

#[tokio::test]
async fn frontend_is_served_at_the_root() {
    let fixture = fixture(sample_config());
    let (status, body) = get(&fixture.router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<canvas></canvas>");

    let (status, _) = get(&fixture.router, "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
