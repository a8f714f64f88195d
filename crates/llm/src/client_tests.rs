use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{GenerativeModel, LlmClient, LlmError, Part};

const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

fn client_for(server: &MockServer) -> LlmClient {
    LlmClient::new("test-key".to_owned(), format!("{}/", server.uri()))
        .unwrap()
        .with_model("test-model".to_owned())
}

fn reply_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]}
        }]
    })
}

#[tokio::test]
async fn generate_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "hello"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("{\"cases\": []}")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server).generate(&[Part::Text("hello".to_owned())]).await.unwrap();
    assert_eq!(reply, "{\"cases\": []}");
}

#[tokio::test]
async fn generate_sends_image_as_base64_inline_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_partial_json(json!({
            "contents": [{"parts": [
                {"text": "look"},
                {"inlineData": {"mimeType": "image/png", "data": "AQID"}}
            ]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let parts = [
        Part::Text("look".to_owned()),
        Part::InlineImage { mime_type: "image/png".to_owned(), data: vec![1, 2, 3] },
    ];
    assert_eq!(client_for(&server).generate(&parts).await.unwrap(), "ok");
}

#[tokio::test]
async fn generate_joins_multiple_text_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "{\"cases\":"}, {"text": " []}"}]}}]
        })))
        .mount(&server)
        .await;

    let reply = client_for(&server).generate(&[Part::Text("x".to_owned())]).await.unwrap();
    assert_eq!(reply, "{\"cases\": []}");
}

#[tokio::test]
async fn generate_does_not_retry_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).generate(&[Part::Text("x".to_owned())]).await.unwrap_err();
    match err {
        LlmError::HttpStatus { code, body } => {
            assert_eq!(code, 503);
            assert_eq!(body, "overloaded");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn generate_without_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(&[Part::Text("x".to_owned())]).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn generate_with_garbage_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(&[Part::Text("x".to_owned())]).await.unwrap_err();
    assert!(matches!(err, LlmError::JsonParse { .. }));
}

#[test]
fn debug_output_redacts_api_key() {
    let client = LlmClient::new("secret-key".to_owned(), "http://localhost/".to_owned()).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("secret-key"));
    assert_eq!(client.base_url(), "http://localhost");
}
