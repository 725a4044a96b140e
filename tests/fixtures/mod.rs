use serde_json::{Value, json};

pub fn completion_with_text(text: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 80, "total_tokens": 90}
    })
}

pub fn completion_without_choices() -> Value {
    json!({
        "id": "chatcmpl-test-2",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "test-model",
        "choices": []
    })
}

pub fn completion_without_content() -> Value {
    json!({
        "id": "chatcmpl-test-3",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant"},
            "finish_reason": "stop"
        }]
    })
}

pub fn completion_with_empty_content() -> Value {
    completion_with_text("")
}
