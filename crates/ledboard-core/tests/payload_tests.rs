#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use ledboard_core::payload::encode_payload;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_exact_content() {
        let payload = json!({
            "mode": "message",
            "message": {
                "text": "it's \"quoted\" `backticked` $(subshell)\nsecond line",
                "emoji": "❤",
            },
        });

        let encoded = encode_payload(&payload).unwrap();
        let bytes = STANDARD.decode(&encoded).unwrap();
        let decoded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_encoded_form_is_a_single_shell_safe_token() {
        let payload = json!({"text": "' \" ` $ ( ) ; & | \n"});
        let encoded = encode_payload(&payload).unwrap();

        assert!(!encoded.is_empty());
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn test_serialization_is_compact() {
        let payload = json!({"a": 1, "b": [1, 2]});
        let encoded = encode_payload(&payload).unwrap();
        let bytes = STANDARD.decode(&encoded).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn test_null_payload_encodes() {
        let encoded = encode_payload(&serde_json::Value::Null).unwrap();
        let bytes = STANDARD.decode(&encoded).unwrap();
        assert_eq!(bytes, b"null");
    }
}
