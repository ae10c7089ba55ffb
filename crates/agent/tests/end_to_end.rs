//! Full-stack test: the agent built from config, talking to a mocked model
//! server and the real complaint API over HTTP.

use std::io::Write;

use agent::{AgentConfig, AgentError, ChatSession, ComplaintAgent};
use api::{router, AppState};
use database::Database;
use knowledge::EmbedderConfig;
use llm_brain::LlmBrainConfig;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_api() -> String {
    let db = Database::connect_with_pool_size("sqlite::memory:", 1)
        .await
        .unwrap();
    db.migrate().await.unwrap();

    let app = router().with_state(AppState::new(db));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn model_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "llama3.2:3b",
        "message": {"role": "assistant", "content": content},
        "done": true
    }))
}

fn config_for(model_url: &str, api_url: &str, kb: &std::path::Path) -> AgentConfig {
    AgentConfig {
        llm: LlmBrainConfig::builder().api_url(model_url).build(),
        api_url: api_url.to_string(),
        kb_path: kb.to_path_buf(),
        embedder: EmbedderConfig::hashing(),
        ..AgentConfig::default()
    }
}

fn knowledge_base() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Complaints are resolved within 48 hours.\n\nRefunds take 5-7 business days."
    )
    .unwrap();
    file
}

#[tokio::test]
async fn test_file_then_look_up_complaint() {
    let api_url = spawn_api().await;
    let model = MockServer::start().await;
    let kb = knowledge_base();

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(model_reply(
            "{\"action\": \"create_complaint_tool\", \"input\": \"Deepak, 9876543210, deepak@example.com, My order was delayed\"}",
        ))
        .up_to_n_times(1)
        .mount(&model)
        .await;

    let agent = ComplaintAgent::build(config_for(&model.uri(), &api_url, kb.path()))
        .await
        .unwrap();
    assert_eq!(
        agent.tools().list_tools(),
        vec!["GeneralQA", "create_complaint_tool", "get_complaint_tool"]
    );

    let mut session = ChatSession::new();
    let reply = agent
        .run(&mut session, "Please file my complaint.")
        .await
        .unwrap();

    let prefix = "Here is your complaint ID: ";
    let id = reply
        .split(prefix)
        .nth(1)
        .expect("reply should carry the id")
        .trim()
        .to_string();
    assert_eq!(id.len(), 8);

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(model_reply(&format!(
            "{{\"action\": \"get_complaint_tool\", \"input\": \"{}\"}}",
            id
        )))
        .mount(&model)
        .await;

    let reply = agent
        .run(&mut session, &format!("What is the status of {}?", id))
        .await
        .unwrap();

    assert!(reply.starts_with("Here are the details of your complaint:"));
    assert!(reply.contains("👤 Name: Deepak"));
    assert!(reply.contains("📞 Phone: 9876543210"));
    assert!(reply.contains("📝 Details: My order was delayed"));
    assert_eq!(session.turns(), 2);
}

#[tokio::test]
async fn test_general_question_uses_knowledge_base() {
    let model = MockServer::start().await;
    let kb = knowledge_base();

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(model_reply(
            r#"{"action": "GeneralQA", "input": "How long do refunds take?"}"#,
        ))
        .up_to_n_times(1)
        .mount(&model)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(model_reply("Refunds take 5-7 business days."))
        .mount(&model)
        .await;

    let agent = ComplaintAgent::build(config_for(&model.uri(), "http://127.0.0.1:1", kb.path()))
        .await
        .unwrap();

    let mut session = ChatSession::new();
    let reply = agent
        .run(&mut session, "How long do refunds take?")
        .await
        .unwrap();
    assert_eq!(reply, "Refunds take 5-7 business days.");
}

#[tokio::test]
async fn test_missing_knowledge_base_is_fatal() {
    let config = config_for(
        "http://127.0.0.1:1",
        "http://127.0.0.1:1",
        std::path::Path::new("/nonexistent/faq.txt"),
    );

    let result = ComplaintAgent::build(config).await;
    assert!(matches!(result, Err(AgentError::Knowledge(_))));
}
