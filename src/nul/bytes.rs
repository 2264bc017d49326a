use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::nul::driver::unsupported_scan;
use crate::nul::json::unexpected_json;
use crate::nul::{DriverValue, EnvelopeKind, JsonKind, Nullable, Primitive, Result};

/// Nullable byte sequence.
///
/// The wrapper owns its buffer; construction from a slice copies it.
pub type Bytes = Nullable<Vec<u8>>;

impl Bytes {
	/// Create a valid instance holding a copy of `value`.
	pub fn from_slice(value: &[u8]) -> Self {
		Self::from_value(value.to_vec())
	}
}

impl Primitive for Vec<u8> {
	const NAME: &'static str = "Bytes";
	const JSON_KIND: JsonKind = JsonKind::String;
	const ENVELOPE: EnvelopeKind = EnvelopeKind::Bytes;

	fn zero() -> Self {
		Vec::new()
	}

	fn is_zero(&self) -> bool {
		self.is_empty()
	}

	fn parse_text(text: &[u8]) -> Result<Self> {
		Ok(STANDARD.decode(text)?)
	}

	fn format_text(&self) -> Result<Vec<u8>> {
		Ok(STANDARD.encode(self).into_bytes())
	}

	fn from_json(value: &Value) -> Result<Option<Self>> {
		match value {
			Value::String(encoded) => Ok(Some(STANDARD.decode(encoded)?)),
			other => Err(unexpected_json::<Self>(other)),
		}
	}

	fn to_json(&self) -> Result<Value> {
		Ok(Value::String(STANDARD.encode(self)))
	}

	fn from_driver(value: &DriverValue) -> Result<Self> {
		match value {
			DriverValue::Bytes(raw) => Ok(raw.clone()),
			DriverValue::String(text) => Ok(text.as_bytes().to_vec()),
			other => Err(unsupported_scan::<Self>(other)),
		}
	}

	fn to_driver(&self) -> DriverValue {
		DriverValue::Bytes(self.clone())
	}

	fn write_payload(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(self);
	}

	fn read_payload(payload: &[u8]) -> Result<Self> {
		Ok(payload.to_vec())
	}
}
