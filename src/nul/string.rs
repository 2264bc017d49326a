use std::borrow::Cow;

use serde_json::Value;

use crate::nul::driver::unsupported_scan;
use crate::nul::json::unexpected_json;
use crate::nul::{DriverValue, EnvelopeKind, JsonKind, Nullable, Primitive, Result};

/// Nullable UTF-8 string.
pub type String = Nullable<std::string::String>;

impl Primitive for std::string::String {
	const NAME: &'static str = "String";
	const JSON_KIND: JsonKind = JsonKind::String;
	const ENVELOPE: EnvelopeKind = EnvelopeKind::String;

	fn zero() -> Self {
		Self::new()
	}

	fn is_zero(&self) -> bool {
		self.is_empty()
	}

	fn parse_text(text: &[u8]) -> Result<Self> {
		Ok(std::str::from_utf8(text)?.to_owned())
	}

	fn format_text(&self) -> Result<Vec<u8>> {
		Ok(self.as_bytes().to_vec())
	}

	fn from_json(value: &Value) -> Result<Option<Self>> {
		match value {
			Value::String(text) => Ok(Some(text.clone())),
			other => Err(unexpected_json::<Self>(other)),
		}
	}

	fn to_json(&self) -> Result<Value> {
		Ok(Value::String(self.clone()))
	}

	// Any non-null driver value has a text form except non-UTF-8 bytes.
	fn from_driver(value: &DriverValue) -> Result<Self> {
		value
			.to_text()
			.map(Cow::into_owned)
			.map_err(|_| unsupported_scan::<Self>(value))
	}

	fn to_driver(&self) -> DriverValue {
		DriverValue::String(self.clone())
	}

	fn write_payload(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(self.as_bytes());
	}

	fn read_payload(payload: &[u8]) -> Result<Self> {
		Self::parse_text(payload)
	}
}
