use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Value;

use crate::nul::nullable::NULL_LITERAL;
use crate::nul::{NulError, Nullable, Primitive, Result};

/// Object key carrying the validity flag in the object shape.
const VALID_KEY: &str = "Valid";

/// Kinds of JSON values, used for shape checks and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
	/// `null`.
	Null,
	/// `true` / `false`.
	Bool,
	/// Any JSON number.
	Number,
	/// Quoted string.
	String,
	/// Array.
	Array,
	/// Object.
	Object,
}

impl JsonKind {
	/// Classify a parsed JSON value.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(_) => Self::Bool,
			Value::Number(_) => Self::Number,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

/// JSON marshal/unmarshal contract.
pub trait JsonCodec {
	/// Render as JSON; null renders as the literal `null`.
	fn marshal_json(&self) -> Result<Vec<u8>>;

	/// Parse JSON into `self`.
	///
	/// Syntax and object-shape errors leave `self` untouched; value errors leave it null.
	fn unmarshal_json(&mut self, data: &[u8]) -> Result<()>;
}

impl<T: Primitive> JsonCodec for Nullable<T> {
	fn marshal_json(&self) -> Result<Vec<u8>> {
		match self.as_option() {
			None => Ok(NULL_LITERAL.to_vec()),
			Some(value) => Ok(serde_json::to_vec(&value.to_json()?)?),
		}
	}

	fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
		let parsed: Value = serde_json::from_slice(data)?;
		apply_json(self, &parsed)
	}
}

impl<T: Primitive> Serialize for Nullable<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let Some(value) = self.as_option() else {
			return serializer.serialize_none();
		};
		match value.to_json() {
			Ok(json) => json.serialize(serializer),
			Err(err) => Err(ser::Error::custom(err)),
		}
	}
}

impl<'de, T: Primitive> Deserialize<'de> for Nullable<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let raw = Value::deserialize(deserializer)?;
		let mut out = Self::new();
		match apply_json(&mut out, &raw) {
			Ok(()) => Ok(out),
			Err(err) => Err(de::Error::custom(err)),
		}
	}
}

/// Build the "unexpected JSON type" error for `T`.
pub(crate) fn unexpected_json<T: Primitive>(value: &Value) -> NulError {
	NulError::UnexpectedJson {
		target: T::NAME,
		found: JsonKind::of(value).as_str(),
	}
}

fn apply_json<T: Primitive>(target: &mut Nullable<T>, value: &Value) -> Result<()> {
	match value {
		Value::Null => {
			target.reset();
			Ok(())
		}
		Value::Object(map) => {
			let raw = map.get(T::NAME);
			let valid = map.get(VALID_KEY);
			let (Some(raw), Some(Value::Bool(valid))) = (raw, valid) else {
				return Err(shape_error::<T>(raw, valid));
			};
			if JsonKind::of(raw) != T::JSON_KIND {
				return Err(shape_error::<T>(Some(raw), Some(&Value::Bool(*valid))));
			}

			if !*valid {
				target.reset();
				return Ok(());
			}
			settle(target, T::from_json(raw))
		}
		other => settle(target, T::from_json(other)),
	}
}

fn settle<T: Primitive>(target: &mut Nullable<T>, parsed: Result<Option<T>>) -> Result<()> {
	match parsed {
		Ok(Some(value)) => {
			target.set_valid(value);
			Ok(())
		}
		Ok(None) => {
			target.reset();
			Ok(())
		}
		Err(err) => {
			target.reset();
			Err(err)
		}
	}
}

fn shape_error<T: Primitive>(raw: Option<&Value>, valid: Option<&Value>) -> NulError {
	let label = |value: Option<&Value>| value.map_or("missing", |value| JsonKind::of(value).as_str());
	NulError::ObjectShape {
		target: T::NAME,
		key: T::NAME,
		expected: T::JSON_KIND.as_str(),
		found_value: label(raw),
		found_valid: label(valid),
	}
}
