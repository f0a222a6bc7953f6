use prompt_enhancer::{
    Enhancer, EnhancerConfig, EnhancerError, Model, OutputFormat, PromptFields, ASSUMPTIONS_LINE,
    SYSTEM_INSTRUCTIONS,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200 }
    })
}

fn enhancer_for(server: &MockServer, config: EnhancerConfig) -> Enhancer {
    Enhancer::new(
        config
            .with_api_key("sk-test")
            .with_base_url(server.uri()),
    )
    .unwrap()
}

fn fields() -> PromptFields {
    PromptFields::new(
        "You are an experienced Python developer.",
        "I am a beginner learning to code.",
        "Help me build an app that enhances prompts.",
    )
}

#[tokio::test]
async fn enhance_sends_instructions_and_appends_clause() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "temperature": 0.25,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTIONS },
                {
                    "role": "user",
                    "content": "Role: You are an experienced Python developer.\nContext: I am a beginner learning to code.\nTask: Help me build an app that enhances prompts."
                }
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("You are a patient senior Python mentor.\n")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let enhancer = enhancer_for(&server, EnhancerConfig::new(Model::Gpt4o).with_temperature(0.25));
    let result = enhancer.enhance(&fields()).await.unwrap();

    assert_eq!(
        result.prompt,
        format!(
            "You are a patient senior Python mentor.\n\nAssumptions & Clarifications:\n- {}",
            ASSUMPTIONS_LINE
        )
    );
    assert_eq!(result.model, Model::Gpt4o);
    assert_eq!(result.usage.total_tokens, 200);
    assert_eq!(result.outputs.get(OutputFormat::Plain), result.prompt);

    let json: serde_json::Value =
        serde_json::from_str(result.outputs.get(OutputFormat::Json)).unwrap();
    assert_eq!(json, json!({ "enhanced_prompt": result.prompt }));
}

#[tokio::test]
async fn enhance_keeps_text_that_mentions_assumptions() {
    let server = MockServer::start().await;
    let reply = "Act as a mentor. First, state your Assumptions & <open questions>.";
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
        .mount(&server)
        .await;

    let enhancer = enhancer_for(&server, EnhancerConfig::default());
    let result = enhancer.enhance(&fields()).await.unwrap();

    assert_eq!(result.prompt, reply);
    assert_eq!(
        result.outputs.xml,
        "<enhancedPrompt>\nAct as a mentor. First, state your Assumptions &amp; &lt;open questions&gt;.\n</enhancedPrompt>"
    );
}

#[tokio::test]
async fn enhance_truncates_long_replies() {
    let server = MockServer::start().await;
    let reply = format!("List every assumption. {}", "detail ".repeat(200));
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&reply)))
        .mount(&server)
        .await;

    let enhancer = enhancer_for(&server, EnhancerConfig::default().with_max_output_chars(400));
    let result = enhancer.enhance(&fields()).await.unwrap();

    assert_eq!(result.prompt.chars().count(), 400);
    assert!(result.prompt.ends_with("..."));
    assert!(result.prompt.starts_with("List every assumption."));
}

#[tokio::test]
async fn enhance_refuses_empty_inputs_without_calling_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let enhancer = enhancer_for(&server, EnhancerConfig::default());
    let err = enhancer
        .enhance(&PromptFields::new("", "", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, EnhancerError::EmptyInputs));
    assert!(err.is_validation());
}

#[tokio::test]
async fn enhance_surfaces_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let enhancer = enhancer_for(&server, EnhancerConfig::default());
    let err = enhancer.enhance(&fields()).await.unwrap_err();

    assert!(matches!(err, EnhancerError::OpenAi(_)));
    assert!(!err.is_validation());
    let message = err.to_string();
    assert!(message.starts_with("OpenAI API error: "));
    assert!(message.contains("Incorrect API key provided"));
}

#[tokio::test]
async fn enhance_sends_whitespace_only_inputs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                { "role": "system" },
                { "role": "user", "content": "Role:   \nContext: \nTask: " }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Ask about assumptions.")))
        .expect(1)
        .mount(&server)
        .await;

    let enhancer = enhancer_for(&server, EnhancerConfig::default());
    let result = enhancer
        .enhance(&PromptFields::new("  ", "", ""))
        .await
        .unwrap();

    assert_eq!(result.prompt, "Ask about assumptions.");
}

#[tokio::test]
async fn enhance_renders_empty_generation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("")))
        .mount(&server)
        .await;

    let enhancer = enhancer_for(&server, EnhancerConfig::default());
    let result = enhancer.enhance(&fields()).await.unwrap();

    assert_eq!(result.prompt, "");
    assert_eq!(result.outputs.plain, "");
    assert_eq!(result.outputs.xml, "<enhancedPrompt>\n\n</enhancedPrompt>");
    assert_eq!(result.outputs.json, "{\n  \"enhanced_prompt\": \"\"\n}");
}
