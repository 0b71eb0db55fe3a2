//! JSON decoding and encoding of ApiError

use proptest::prelude::*;
use serde_json::{json, Value};
use services_utils_api_error::{ApiError, ParseError};

#[test]
fn test_from_bytes_empty_is_invalid_format() {
    let result = ApiError::from_bytes(&[]);
    assert_eq!(result, Err(ParseError::InvalidFormat));
    assert_eq!(ParseError::InvalidFormat.to_string(), "invalid json");
}

#[test]
fn test_from_bytes_malformed_is_invalid_format() {
    let payloads: [&[u8]; 4] = [b"{", b"not json", b"{\"message\": 5", b"[1, 2]"];
    for payload in payloads {
        assert_eq!(ApiError::from_bytes(payload), Err(ParseError::InvalidFormat));
    }
}

#[test]
fn test_from_bytes_wrong_shape_is_invalid_format() {
    let payloads: [&[u8]; 4] = [
        b"{}",
        b"{\"message\":\"only message\"}",
        b"{\"message\":\"neg\",\"statuscode\":-1}",
        b"{\"message\":\"bad causes\",\"statuscode\":400,\"causes\":\"x\"}",
    ];
    for payload in payloads {
        assert_eq!(ApiError::from_bytes(payload), Err(ParseError::InvalidFormat));
    }
}

#[test]
fn test_from_bytes_null_causes() {
    let err = ApiError::from_bytes(b"{\"message\":\"bytesTest\",\"statuscode\":56,\"causes\":null}")
        .expect("well-formed error object should decode");
    assert_eq!(err.message(), "bytesTest");
    assert_eq!(err.status_code(), 56);
    assert!(err.causes().is_empty());
}

#[test]
fn test_from_bytes_missing_causes() {
    let err = ApiError::from_bytes(b"{\"message\":\"m\",\"statuscode\":404}")
        .expect("causes is optional");
    assert!(err.causes().is_empty());
}

#[test]
fn test_from_str_with_causes() {
    let err: ApiError = r#"{"message":"m","statuscode":500,"causes":["db down",{"retry":false}]}"#
        .parse()
        .expect("error object with causes should decode");
    assert_eq!(err.causes(), &[json!("db down"), json!({"retry": false})]);
}

#[test]
fn test_to_json_shape() {
    let err = ApiError::not_found("gone");
    let value: Value = serde_json::from_str(&err.to_json().expect("serialize"))
        .expect("output is JSON");
    assert_eq!(
        value,
        json!({"message": "gone", "statuscode": 404, "causes": []})
    );
}

fn cause_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<String>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn prop_constructed_fields_read_back(
        message in ".*",
        code in any::<u16>(),
        causes in proptest::collection::vec(cause_strategy(), 0..4),
    ) {
        let err = ApiError::new(message.clone(), code, causes.clone());
        prop_assert_eq!(err.message(), message.as_str());
        prop_assert_eq!(err.status_code(), code);
        prop_assert_eq!(err.causes(), causes.as_slice());
    }

    #[test]
    fn prop_json_round_trip(
        message in ".*",
        code in any::<u16>(),
        causes in proptest::collection::vec(cause_strategy(), 0..4),
    ) {
        let err = ApiError::new(message, code, causes);
        let bytes = err.to_vec().expect("serialize");
        prop_assert_eq!(ApiError::from_bytes(&bytes), Ok(err));
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = ApiError::from_bytes(&bytes);
    }
}
