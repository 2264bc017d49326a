//! Shared fixtures and JSON helpers for the workspace tests.

use chrono::{DateTime, FixedOffset};
use serde_json::{Value, json};

/// RFC3339 timestamp with a non-UTC offset and microsecond precision.
pub const TIME_TEXT: &str = "2018-05-17T17:17:17.171717+03:00";

/// Raw bytes fixture.
pub const BYTES_FIXTURE: &[u8] = b"Test data 1pHuOxADZkeh8Y9WvL75";

/// Standard padded base64 of [`BYTES_FIXTURE`].
pub const BYTES_FIXTURE_BASE64: &str = "VGVzdCBkYXRhIDFwSHVPeEFEWmtlaDhZOVd2TDc1";

/// String fixture.
pub const STRING_FIXTURE: &str = "3LbOVMltCjj1Mg6sSRYLzS5j64DDNEVax29ypIGxwEx9mnbFnT9FY0sZqP11";

/// Input that is not JSON at all.
pub const INVALID_JSON: &[u8] = b":{;-}";

/// Well-formed JSON object with none of the expected keys.
pub const BLANK_OBJECT_JSON: &[u8] = b"{}";

/// Parse [`TIME_TEXT`].
pub fn time_fixture() -> DateTime<FixedOffset> {
	DateTime::parse_from_rfc3339(TIME_TEXT).expect("time fixture should parse")
}

/// Build the object-shaped JSON form `{"<key>": value, "Valid": valid}`.
pub fn object_json(key: &str, value: Value, valid: bool) -> Vec<u8> {
	let mut object = serde_json::Map::new();
	object.insert(key.to_owned(), value);
	object.insert("Valid".to_owned(), json!(valid));
	serde_json::to_vec(&Value::Object(object)).expect("object should serialize")
}

/// Parse encoded JSON bytes into a generic value.
pub fn parse_json(bytes: &[u8]) -> Value {
	serde_json::from_slice(bytes).expect("output should be valid JSON")
}

/// Interpret encoded bytes as UTF-8 text.
pub fn utf8(bytes: &[u8]) -> &str {
	std::str::from_utf8(bytes).expect("output should be UTF-8")
}
