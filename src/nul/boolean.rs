use serde_json::Value;

use crate::nul::json::unexpected_json;
use crate::nul::{DriverValue, EnvelopeKind, JsonKind, NulError, Nullable, Primitive, Result, coerce_bool};

/// Nullable boolean.
pub type Bool = Nullable<bool>;

impl Primitive for bool {
	const NAME: &'static str = "Bool";
	const JSON_KIND: JsonKind = JsonKind::Bool;
	const ENVELOPE: EnvelopeKind = EnvelopeKind::Bool;

	fn zero() -> Self {
		false
	}

	fn is_zero(&self) -> bool {
		!*self
	}

	fn parse_text(text: &[u8]) -> Result<Self> {
		match text {
			b"true" => Ok(true),
			b"false" => Ok(false),
			_ => Err(NulError::ParseBool {
				input: String::from_utf8_lossy(text).into_owned(),
			}),
		}
	}

	fn format_text(&self) -> Result<Vec<u8>> {
		Ok(if *self { b"true".to_vec() } else { b"false".to_vec() })
	}

	fn from_json(value: &Value) -> Result<Option<Self>> {
		match value {
			Value::Bool(value) => Ok(Some(*value)),
			other => Err(unexpected_json::<Self>(other)),
		}
	}

	fn to_json(&self) -> Result<Value> {
		Ok(Value::Bool(*self))
	}

	fn from_driver(value: &DriverValue) -> Result<Self> {
		coerce_bool(value)
	}

	fn to_driver(&self) -> DriverValue {
		DriverValue::Bool(*self)
	}

	fn write_payload(&self, out: &mut Vec<u8>) {
		out.push(u8::from(*self));
	}

	fn read_payload(payload: &[u8]) -> Result<Self> {
		match payload {
			[0] => Ok(false),
			[1] => Ok(true),
			[byte] => Err(NulError::ParseBool {
				input: format!("byte {byte}"),
			}),
			_ => Err(NulError::PayloadSize {
				kind: EnvelopeKind::Bool.type_name(),
				len: payload.len(),
				expected: 1,
			}),
		}
	}
}
