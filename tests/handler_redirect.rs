mod common;

use common::HOST;
use serde_json::json;

async fn encode(server: &axum_test::TestServer, url: &str) -> String {
    let short_url = server
        .post("/encode")
        .add_header("Host", HOST)
        .json(&json!({ "url": url }))
        .await
        .json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    common::code_of(&short_url)
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, _dir) = common::create_store_state();
    let server = common::server(state);
    let code = encode(&server, "https://example.com/target").await;

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _dir) = common::create_store_state();
    let server = common::server(state);

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}

#[tokio::test]
async fn test_redirect_codec_mode() {
    let server = common::server(common::create_codec_state("secret"));
    let code = encode(&server, "https://example.com/codec").await;

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/codec");
}

#[tokio::test]
async fn test_redirect_codec_garbage_token() {
    let server = common::server(common::create_codec_state("secret"));

    let response = server.get("/AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_encodes_non_ascii_location() {
    let (state, _dir) = common::create_store_state();
    let server = common::server(state);
    let code = encode(&server, "https://example.com/straße").await;

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/stra%C3%9Fe"
    );
}

#[tokio::test]
async fn test_get_on_encode_is_not_a_code() {
    let (state, _dir) = common::create_store_state();
    let server = common::server(state);

    let response = server.get("/encode").await;

    assert_eq!(response.status_code(), 405);
}
