use llm_brain::{Brain, BrainError, ChatMessage, LlmBrainConfig, OllamaBrain, OpenAiBrain, Provider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a complaint assistant."),
        ChatMessage::user("Hello"),
    ]
}

#[tokio::test]
async fn test_ollama_completion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "llama3.2:3b",
            "stream": false,
            "messages": [
                {"role": "system", "content": "You are a complaint assistant."},
                {"role": "user", "content": "Hello"}
            ],
            "options": {"temperature": 0.3}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "llama3.2:3b",
            "message": {"role": "assistant", "content": "Hi! How can I help?"},
            "done": true,
            "prompt_eval_count": 12,
            "eval_count": 6
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let brain = OllamaBrain::new(
        LlmBrainConfig::builder()
            .api_url(mock_server.uri())
            .build(),
    )
    .unwrap();

    let reply = brain.complete(&conversation()).await.unwrap();
    assert_eq!(reply, "Hi! How can I help?");
}

#[tokio::test]
async fn test_ollama_error_body_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "model 'nope' not found"})),
        )
        .mount(&mock_server)
        .await;

    let brain = OllamaBrain::new(
        LlmBrainConfig::builder()
            .api_url(mock_server.uri())
            .model("nope")
            .build(),
    )
    .unwrap();

    match brain.complete(&conversation()).await {
        Err(BrainError::ProcessingFailed(msg)) => {
            assert!(msg.contains("404"));
            assert!(msg.contains("model 'nope' not found"));
        }
        other => panic!("Expected ProcessingFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_ollama_empty_reply_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {"role": "assistant", "content": ""},
            "done": true
        })))
        .mount(&mock_server)
        .await;

    let brain = OllamaBrain::new(LlmBrainConfig::builder().api_url(mock_server.uri()).build()).unwrap();
    assert!(matches!(
        brain.complete(&conversation()).await,
        Err(BrainError::ProcessingFailed(_))
    ));
}

#[tokio::test]
async fn test_ollama_readiness() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&mock_server)
        .await;

    let brain = OllamaBrain::new(LlmBrainConfig::builder().api_url(mock_server.uri()).build()).unwrap();
    assert!(brain.is_ready().await);

    let unreachable = OllamaBrain::new(
        LlmBrainConfig::builder()
            .api_url("http://127.0.0.1:1")
            .build(),
    )
    .unwrap();
    assert!(!unreachable.is_ready().await);
}

#[tokio::test]
async fn test_openai_completion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini", "temperature": 0.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1677652288,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello there!"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 9, "completion_tokens": 3, "total_tokens": 12}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let brain = OpenAiBrain::new(
        LlmBrainConfig::builder()
            .provider(Provider::OpenAi)
            .api_url(mock_server.uri())
            .api_key("test-key")
            .build(),
    )
    .unwrap();

    let reply = brain.complete(&conversation()).await.unwrap();
    assert_eq!(reply, "Hello there!");
}

#[tokio::test]
async fn test_openai_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .mount(&mock_server)
        .await;

    let brain = OpenAiBrain::new(
        LlmBrainConfig::builder()
            .provider(Provider::OpenAi)
            .api_url(mock_server.uri())
            .api_key("bad-key")
            .build(),
    )
    .unwrap();

    match brain.complete(&conversation()).await {
        Err(BrainError::ProcessingFailed(msg)) => {
            assert!(msg.contains("401"));
            assert!(msg.contains("Incorrect API key provided"));
        }
        other => panic!("Expected ProcessingFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_openai_unreachable_is_network_error() {
    let brain = OpenAiBrain::new(
        LlmBrainConfig::builder()
            .provider(Provider::OpenAi)
            .api_url("http://127.0.0.1:1")
            .api_key("test-key")
            .build(),
    )
    .unwrap();

    assert!(matches!(
        brain.complete(&conversation()).await,
        Err(BrainError::Network(_))
    ));
}
