use httpmock::Method::POST;
use httpmock::MockServer;
use inference::{ChatCompleter, ChatMessage, InferenceError, OpenAiChatClient};
use serde_json::json;

#[tokio::test]
async fn complete_sends_messages_and_extracts_reply() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .header("authorization", "Bearer chat-key")
            .json_body(json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant that generates questions from text."},
                    {"role": "user", "content": "generate a question: Black holes are dense."}
                ]
            }));
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"choices\": [{\"message\": {\"role\": \"assistant\", \"content\": \"What makes black holes dense?\"}}]}");
    });

    let client = OpenAiChatClient::new(server.base_url(), "chat-key");
    let messages = vec![
        ChatMessage::system("You are a helpful assistant that generates questions from text."),
        ChatMessage::user("generate a question: Black holes are dense."),
    ];
    let reply = client
        .complete("gpt-3.5-turbo", &messages)
        .await
        .unwrap();
    mock.assert();
    assert_eq!(reply, "What makes black holes dense?");
}

#[tokio::test]
async fn missing_content_is_invalid_response() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"choices\": []}");
    });

    let client = OpenAiChatClient::new(server.base_url(), "chat-key");
    let err = client
        .complete("gpt-3.5-turbo", &[ChatMessage::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, InferenceError::InvalidResponse));
}

#[tokio::test]
async fn error_status_carries_status_and_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(401).body("{\"error\": \"invalid api key\"}");
    });

    let client = OpenAiChatClient::new(server.base_url(), "bad-key");
    let err = client
        .complete("gpt-3.5-turbo", &[ChatMessage::user("hi")])
        .await
        .unwrap_err();
    match err {
        InferenceError::ChatStatus { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
