mod common;

use serde_json::json;
use shortlink::AppState;

#[tokio::test]
async fn test_health_store_mode() {
    let (state, _dir) = common::create_store_state();
    let server = common::server(state);

    server
        .post("/encode")
        .add_header("Host", common::HOST)
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["strategy"], "random");
    assert_eq!(json["mappings"], 1);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("recaptcha_site_key").is_none());
}

#[tokio::test]
async fn test_health_codec_mode() {
    let server = common::server(common::create_codec_state("secret"));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["strategy"], "keyed_hash");
    assert!(json.get("mappings").is_none());
}

#[tokio::test]
async fn test_health_exposes_site_key() {
    let (state, _dir) = common::create_store_state();
    let state = AppState {
        recaptcha_site_key: Some("site-key".to_string()),
        ..state
    };
    let server = common::server(state);

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["recaptcha_site_key"], "site-key");
}
