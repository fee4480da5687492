//! Wire-level tests for the Groq adapter against a local mock server.

use groqchat::{CompletionService, GroqClient, ModelId, SessionConfig, Turn};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config() -> SessionConfig {
    SessionConfig::new(ModelId::default(), "k")
}

#[tokio::test]
async fn test_success_returns_the_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(header("authorization", "Bearer k"))
        .and(body_partial_json(json!({
            "model": "openai/gpt-oss-120b",
            "messages": [{"role": "user", "content": "Hello"}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "Hi there"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GroqClient::with_base_url(server.uri());
    let turns = vec![Turn::user("Hello")];

    let reply = client.complete(&turns, &config()).await.unwrap();
    assert_eq!(reply.as_deref(), Some("Hi there"));
}

#[tokio::test]
async fn test_the_full_conversation_is_sent_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "user", "content": "Hello"},
                {"role": "assistant", "content": "Hi there"},
                {"role": "user", "content": "How are you?"},
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "Fine, thanks"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GroqClient::with_base_url(server.uri());
    let turns = vec![
        Turn::user("Hello"),
        Turn::assistant("Hi there"),
        Turn::user("How are you?"),
    ];

    let reply = client.complete(&turns, &config()).await.unwrap();
    assert_eq!(reply.as_deref(), Some("Fine, thanks"));
}

#[tokio::test]
async fn test_server_error_maps_to_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GroqClient::with_base_url(server.uri());
    let turns = vec![Turn::user("Hello")];

    let err = client.complete(&turns, &config()).await.unwrap_err();
    assert!(err.is_api(), "expected Api error, got: {err}");
}

#[tokio::test]
async fn test_missing_content_is_a_success_without_a_reply() {
    let server = MockServer::start().await;
    for body in [json!({}), json!({"choices": []}), json!({"choices": [{"message": {}}]})] {
        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = GroqClient::with_base_url(server.uri());
        let turns = vec![Turn::user("Hello")];

        let reply = client.complete(&turns, &config()).await.unwrap();
        assert_eq!(reply, None);
    }
}

#[tokio::test]
async fn test_non_json_body_maps_to_a_malformed_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("definitely not json", "text/plain"))
        .mount(&server)
        .await;

    let client = GroqClient::with_base_url(server.uri());
    let turns = vec![Turn::user("Hello")];

    let err = client.complete(&turns, &config()).await.unwrap_err();
    assert!(err.is_malformed(), "expected MalformedResponse, got: {err}");
}

#[tokio::test]
async fn test_unreachable_server_maps_to_a_network_error() {
    // Nothing listens on the discard port; connecting is refused outright.
    let client = GroqClient::with_base_url("http://127.0.0.1:9");
    let turns = vec![Turn::user("Hello")];

    let err = client.complete(&turns, &config()).await.unwrap_err();
    assert!(err.is_network(), "expected Network error, got: {err}");
}
