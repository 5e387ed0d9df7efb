use std::time::Duration;

use serde_json::json;
use sgwi_ai::session::{CONNECTION_ERROR_NOTICE, NO_RESPONSE_NOTICE};
use sgwi_ai::{
    AiError, AnswerProvider, ChatSession, GeminiClient, GeminiConfig, PaperAgent, PaperInfo,
    SubmitOutcome,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::new("test-key")
        .with_base_url(format!("{}/v1beta/models", server.uri()))
        .with_timeouts(Duration::from_secs(2), Duration::from_secs(2));
    match GeminiClient::new(config) {
        Ok(client) => client,
        Err(e) => panic!("failed to build client: {e}"),
    }
}

#[tokio::test]
async fn sends_question_with_paper_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "2019 was a severe drought year." }] }
            }],
            "usageMetadata": { "promptTokenCount": 310, "candidatesTokenCount": 9 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let agent = PaperAgent::new(PaperInfo::sgwi(), Ok(client_for(&server)));
    let response = match agent.ask("Which year was driest?").await {
        Ok(r) => r,
        Err(e) => panic!("ask failed: {e}"),
    };
    assert_eq!(response.content, "2019 was a severe drought year.");
    assert_eq!(response.usage.total_tokens(), 319);

    let requests = match server.received_requests().await {
        Some(reqs) => reqs,
        None => panic!("request not recorded"),
    };
    let body: serde_json::Value = match requests[0].body_json() {
        Ok(v) => v,
        Err(e) => panic!("invalid json body: {e}"),
    };
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Which year was driest?");
    let instruction = body["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    assert!(instruction.contains("Standardized Groundwater Index"));
    assert_eq!(body["generationConfig"]["temperature"], 0.3);
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("", "q").await.unwrap_err();
    assert!(matches!(err, AiError::RateLimited));
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("", "q").await.unwrap_err();
    match err {
        AiError::ApiError(msg) => {
            assert!(msg.contains("403"));
            assert!(msg.contains("API key not valid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("", "q").await.unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "candidates": [] }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = GeminiConfig::new("test-key")
        .with_base_url(format!("{}/v1beta/models", server.uri()))
        .with_timeouts(Duration::from_secs(1), Duration::from_millis(200));
    let client = match GeminiClient::new(config) {
        Ok(c) => c,
        Err(e) => panic!("failed to build client: {e}"),
    };

    let err = client.generate("", "q").await.unwrap_err();
    assert!(matches!(err, AiError::Timeout));
}

#[tokio::test]
async fn session_over_http_handles_blocked_and_failing_backends() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let agent = PaperAgent::new(PaperInfo::sgwi(), Ok(client_for(&server)));
    let mut session = ChatSession::new();

    assert_eq!(session.ask(&agent, "blocked?").await, SubmitOutcome::Answered);
    assert_eq!(session.messages()[1].text, NO_RESPONSE_NOTICE);

    assert_eq!(session.ask(&agent, "down?").await, SubmitOutcome::Failed);
    assert_eq!(session.messages()[3].text, CONNECTION_ERROR_NOTICE);
    assert!(!session.is_typing());
}

#[tokio::test]
async fn missing_credential_surfaces_as_call_failure() {
    let agent = PaperAgent::new(
        PaperInfo::sgwi(),
        Err(AiError::MissingCredential("GEMINI_API_KEY is not set".into())),
    );
    let mut session = ChatSession::new();

    let outcome = session.ask(&agent, "What is SGWI?").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(session.message_count(), 2);
    assert_eq!(session.messages()[1].text, CONNECTION_ERROR_NOTICE);
}
