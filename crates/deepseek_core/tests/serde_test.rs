//! Wire-format tests for the chat completion types.

use deepseek_core::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse, Message};
use serde_json::{Value, json};

fn to_json(request: &ChatCompletionRequest) -> Value {
    serde_json::to_value(request).expect("request serializes")
}

#[test]
fn unset_sampling_fields_are_absent_from_payload() {
    let request = ChatCompletionRequest::builder()
        .model("deepseek-chat")
        .messages(vec![Message::user("hi")])
        .build()
        .expect("request builds");

    let value = to_json(&request);
    let object = value.as_object().expect("payload is an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["messages", "model"]);
}

#[test]
fn explicit_zero_temperature_is_serialized() {
    let request = ChatCompletionRequest::builder()
        .model("deepseek-chat")
        .messages(vec![Message::user("hi")])
        .temperature(0.0_f64)
        .build()
        .expect("request builds");

    assert_eq!(to_json(&request)["temperature"], json!(0.0));
}

#[test]
fn populated_request_uses_wire_field_names() {
    let request = ChatCompletionRequest::builder()
        .model("deepseek-chat")
        .messages(vec![
            Message::system("You are terse."),
            Message::user("hi"),
        ])
        .temperature(0.7_f64)
        .top_p(0.9_f64)
        .max_tokens(128_u32)
        .presence_penalty(1.0_f64)
        .frequency_penalty(0.5_f64)
        .build()
        .expect("request builds");

    let value = to_json(&request);
    assert_eq!(value["model"], json!("deepseek-chat"));
    assert_eq!(value["messages"][0]["role"], json!("system"));
    assert_eq!(value["messages"][1]["content"], json!("hi"));
    assert_eq!(value["top_p"], json!(0.9));
    assert_eq!(value["max_tokens"], json!(128));
    assert_eq!(value["presence_penalty"], json!(1.0));
    assert_eq!(value["frequency_penalty"], json!(0.5));
    assert!(value.get("stream").is_none());
}

#[test]
fn role_tags_are_passed_through_unvalidated() {
    let message = Message::new("tool", "result: 4");
    let value = serde_json::to_value(&message).expect("message serializes");
    assert_eq!(value, json!({"role": "tool", "content": "result: 4"}));

    let back: Message = serde_json::from_value(value).expect("message decodes");
    assert_eq!(back, message);
}

#[test]
fn full_success_body_decodes() {
    let body = json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1730241104,
        "model": "deepseek-chat",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": "Paris."},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 18, "completion_tokens": 3, "total_tokens": 21}
    });

    let response: ChatCompletionResponse =
        serde_json::from_value(body).expect("response decodes");

    assert_eq!(response.id, "chatcmpl-123");
    assert_eq!(response.object, "chat.completion");
    assert_eq!(response.created, 1_730_241_104);
    assert_eq!(response.choices.len(), 1);
    assert_eq!(response.choices[0].index, 0);
    assert_eq!(response.choices[0].message.role, "assistant");
    assert_eq!(response.choices[0].message.content, "Paris.");
    assert_eq!(response.choices[0].finish_reason, "stop");
    assert_eq!(response.usage.prompt_tokens, 18);
    assert_eq!(response.usage.completion_tokens, 3);
    assert_eq!(response.usage.total_tokens, 21);
}

#[test]
fn omitted_response_fields_decode_to_defaults() {
    let body = json!({
        "id": "chatcmpl-456",
        "object": "chat.completion",
        "created": 1730241105,
        "model": "deepseek-chat",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "..."}}
        ]
    });

    let response: ChatCompletionResponse =
        serde_json::from_value(body).expect("response decodes");

    assert_eq!(response.choices[0].finish_reason, "");
    assert_eq!(response.usage.total_tokens, 0);
}

#[test]
fn error_body_decodes() {
    let body = json!({
        "error": {"message": "Insufficient balance", "code": "invalid_request_error"}
    });

    let error: ErrorResponse = serde_json::from_value(body).expect("error body decodes");
    assert_eq!(error.error.message, "Insufficient balance");
    assert_eq!(error.error.code, "invalid_request_error");
}

#[test]
fn empty_error_body_decodes_to_defaults() {
    let error: ErrorResponse = serde_json::from_value(json!({})).expect("empty object decodes");
    assert_eq!(error.error.message, "");
    assert_eq!(error.error.code, "");
}
