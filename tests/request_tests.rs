use push_gateway::models::request::{SendRequest, normalize_body};
use serde_json::{Value, json};

/// Test: a plain JSON object body passes through normalization unchanged
#[test]
fn test_normalize_object_body() {
    let raw = br#"{"senderId": "u1", "receiverId": "u2", "text": "hi"}"#;

    let body = normalize_body(raw);

    assert_eq!(body["senderId"], "u1");
    assert_eq!(body["receiverId"], "u2");
    assert_eq!(body["text"], "hi");
}

/// Test: a JSON string whose contents are JSON gets a second parse pass
#[test]
fn test_normalize_string_wrapped_body() {
    let inner = json!({"senderId": "u1", "receiverId": "u2", "text": "hi"});
    let wrapped = serde_json::to_vec(&Value::String(inner.to_string())).unwrap();

    let body = normalize_body(&wrapped);

    assert_eq!(body, inner);
}

/// Test: unparseable bytes degrade to an empty object, never an error
#[test]
fn test_normalize_garbage_body() {
    assert_eq!(normalize_body(b"not json at all"), json!({}));
    assert_eq!(normalize_body(b"{truncated"), json!({}));
    assert_eq!(normalize_body(&[0xff, 0xfe, 0x00]), json!({}));
}

/// Test: empty and whitespace-only bodies degrade to an empty object
#[test]
fn test_normalize_empty_body() {
    assert_eq!(normalize_body(b""), json!({}));
    assert_eq!(normalize_body(b"  \n\t "), json!({}));
}

/// Test: a string body that is not itself JSON degrades to an empty object
#[test]
fn test_normalize_string_body_with_plain_text() {
    assert_eq!(normalize_body(br#""just some text""#), json!({}));
}

/// Test: non-object JSON values are not usable bodies
#[test]
fn test_normalize_non_object_body() {
    assert_eq!(normalize_body(b"[1, 2, 3]"), json!({}));
    assert_eq!(normalize_body(b"42"), json!({}));
    assert_eq!(normalize_body(b"null"), json!({}));
}

/// Test: all three required fields present yields a typed request
#[test]
fn test_parse_complete_request() {
    let body = json!({"senderId": "u1", "receiverId": "u2", "text": "hi"});

    let request = SendRequest::parse(&body).expect("request should parse");

    assert_eq!(request.sender_id, "u1");
    assert_eq!(request.receiver_id, "u2");
    assert_eq!(request.text, "hi");
    assert_eq!(request.notification_type, "message");
    assert!(!request.is_call());
}

/// Test: any missing required field rejects the request
#[test]
fn test_parse_missing_fields() {
    assert!(SendRequest::parse(&json!({})).is_none());
    assert!(SendRequest::parse(&json!({"senderId": "u1"})).is_none());
    assert!(SendRequest::parse(&json!({"senderId": "u1", "receiverId": "u2"})).is_none());
    assert!(SendRequest::parse(&json!({"receiverId": "u2", "text": "hi"})).is_none());
}

/// Test: falsy field values count as absent
#[test]
fn test_parse_falsy_fields() {
    let empty_text = json!({"senderId": "u1", "receiverId": "u2", "text": ""});
    assert!(SendRequest::parse(&empty_text).is_none());

    let zero_sender = json!({"senderId": 0, "receiverId": "u2", "text": "hi"});
    assert!(SendRequest::parse(&zero_sender).is_none());

    let null_receiver = json!({"senderId": "u1", "receiverId": null, "text": "hi"});
    assert!(SendRequest::parse(&null_receiver).is_none());

    let false_text = json!({"senderId": "u1", "receiverId": "u2", "text": false});
    assert!(SendRequest::parse(&false_text).is_none());
}

/// Test: compound field values are rejected rather than stringified
#[test]
fn test_parse_rejects_compound_values() {
    let object_text = json!({"senderId": "u1", "receiverId": "u2", "text": {"nested": "hi"}});
    assert!(SendRequest::parse(&object_text).is_none());

    let array_sender = json!({"senderId": ["u1"], "receiverId": "u2", "text": "hi"});
    assert!(SendRequest::parse(&array_sender).is_none());
}

/// Test: non-string field values are coerced to strings
#[test]
fn test_parse_coerces_values() {
    let body = json!({"senderId": 7, "receiverId": "u2", "text": 42});

    let request = SendRequest::parse(&body).expect("request should parse");

    assert_eq!(request.sender_id, "7");
    assert_eq!(request.text, "42");
}

/// Test: an explicit type is kept, and "call" is recognized
#[test]
fn test_parse_notification_type() {
    let call = json!({"senderId": "u1", "receiverId": "u2", "text": "ring", "type": "call"});
    let request = SendRequest::parse(&call).expect("request should parse");

    assert_eq!(request.notification_type, "call");
    assert!(request.is_call());

    let falsy_type = json!({"senderId": "u1", "receiverId": "u2", "text": "hi", "type": ""});
    let request = SendRequest::parse(&falsy_type).expect("request should parse");

    assert_eq!(request.notification_type, "message");
}
