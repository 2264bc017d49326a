use serde_json::Value;

use crate::nul::driver::parse_driver_text;
use crate::nul::envelope::fixed_payload;
use crate::nul::json::unexpected_json;
use crate::nul::{DriverValue, EnvelopeKind, JsonKind, NulError, Nullable, Primitive, Result};

/// Nullable unsigned 64-bit integer.
///
/// Binds as decimal text in a byte string since drivers commonly stop at the signed range.
pub type Uint64 = Nullable<u64>;

impl Primitive for u64 {
	const NAME: &'static str = "Uint64";
	const JSON_KIND: JsonKind = JsonKind::Number;
	const ENVELOPE: EnvelopeKind = EnvelopeKind::Uint64;

	fn zero() -> Self {
		0
	}

	fn is_zero(&self) -> bool {
		*self == 0
	}

	fn parse_text(text: &[u8]) -> Result<Self> {
		let text = std::str::from_utf8(text)?;
		text.parse().map_err(|source| NulError::ParseInt {
			input: text.to_owned(),
			source,
		})
	}

	fn format_text(&self) -> Result<Vec<u8>> {
		Ok(self.to_string().into_bytes())
	}

	fn from_json(value: &Value) -> Result<Option<Self>> {
		match value {
			Value::Number(number) => number.as_u64().map(Some).ok_or_else(|| NulError::NumberRange {
				target: Self::NAME,
				number: number.to_string(),
			}),
			Value::String(text) if text.is_empty() => Ok(None),
			Value::String(text) => Self::parse_text(text.as_bytes()).map(Some),
			other => Err(unexpected_json::<Self>(other)),
		}
	}

	fn to_json(&self) -> Result<Value> {
		Ok(Value::from(*self))
	}

	fn from_driver(value: &DriverValue) -> Result<Self> {
		match value {
			DriverValue::Uint64(value) => Ok(*value),
			other => parse_driver_text(other),
		}
	}

	fn to_driver(&self) -> DriverValue {
		DriverValue::Bytes(self.to_string().into_bytes())
	}

	fn write_payload(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(&self.to_le_bytes());
	}

	fn read_payload(payload: &[u8]) -> Result<Self> {
		Ok(u64::from_le_bytes(fixed_payload(Self::ENVELOPE, payload)?))
	}
}
