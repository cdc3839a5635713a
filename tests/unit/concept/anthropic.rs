use super::*;

#[test]
fn endpoint_joins_base_url_without_double_slash() {
    let api = ApiConfig {
        base_url: "http://localhost:9999/".to_string(),
        ..ApiConfig::default()
    };
    let g = AnthropicGenerator::from_config(&api).unwrap();
    assert_eq!(g.endpoint(), "http://localhost:9999/v1/messages");
}

#[test]
fn missing_key_fails_before_any_request() {
    // Unroutable base URL: reaching the network would surface as Transport.
    let api = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ApiConfig::default()
    };
    let g = AnthropicGenerator::from_config(&api).unwrap();
    assert!(!g.has_credentials());
    let err = g.generate("hello").unwrap_err();
    assert!(matches!(err, GenerationError::MissingCredentials));
}

#[test]
fn request_body_has_one_user_message() {
    let body = MessagesRequest {
        model: "m",
        max_tokens: 1024,
        messages: [Message {
            role: "user",
            content: "p",
        }],
    };
    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "model": "m",
            "max_tokens": 1024,
            "messages": [{"role": "user", "content": "p"}]
        })
    );
}

#[test]
fn first_text_block_skips_other_blocks() {
    let env: MessagesResponse = serde_json::from_str(
        r#"{"id":"msg_1","content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"{}"},{"type":"text","text":"second"}]}"#,
    )
    .unwrap();
    assert_eq!(env.first_text().unwrap(), "{}");
}

#[test]
fn envelope_without_text_is_malformed() {
    let env: MessagesResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
    assert!(matches!(
        env.first_text().unwrap_err(),
        GenerationError::MalformedReply(_)
    ));
}

#[test]
fn error_bodies_are_truncated_on_char_boundaries() {
    let long = "é".repeat(600);
    let t = truncate_chars(&long, 512);
    assert_eq!(t.chars().count(), 515);
    assert!(t.ends_with("..."));
    assert_eq!(truncate_chars("short", 512), "short");
}
