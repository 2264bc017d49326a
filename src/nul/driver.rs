use std::borrow::Cow;
use std::fmt;

use crate::nul::{NulError, Nullable, Primitive, Result, Timestamp, format_rfc3339};

/// Value exchanged with a SQL driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
	/// SQL `NULL`.
	Null,
	/// Boolean column value.
	Bool(bool),
	/// Signed integer column value.
	Int64(i64),
	/// Unsigned integer column value.
	Uint64(u64),
	/// Floating-point column value.
	Float64(f64),
	/// Raw byte column value.
	Bytes(Vec<u8>),
	/// Text column value.
	String(String),
	/// Timestamp column value.
	Time(Timestamp),
}

impl DriverValue {
	/// Return whether this is SQL `NULL`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Stable lowercase label of the variant.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int64(_) => "int64",
			Self::Uint64(_) => "uint64",
			Self::Float64(_) => "float64",
			Self::Bytes(_) => "bytes",
			Self::String(_) => "string",
			Self::Time(_) => "time",
		}
	}

	/// Render in canonical string form.
	///
	/// Null renders empty; byte strings must be UTF-8 and times must fall in years `0..=9999`.
	pub fn to_text(&self) -> Result<Cow<'_, str>> {
		Ok(match self {
			Self::Null => Cow::Borrowed(""),
			Self::Bool(value) => Cow::Borrowed(if *value { "true" } else { "false" }),
			Self::Int64(value) => Cow::Owned(value.to_string()),
			Self::Uint64(value) => Cow::Owned(value.to_string()),
			Self::Float64(value) => Cow::Owned(value.to_string()),
			Self::Bytes(value) => Cow::Borrowed(std::str::from_utf8(value)?),
			Self::String(value) => Cow::Borrowed(value.as_str()),
			Self::Time(value) => Cow::Owned(format_rfc3339(value)?),
		})
	}
}

impl fmt::Display for DriverValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("NULL"),
			Self::Bytes(value) => f.write_str(&String::from_utf8_lossy(value)),
			Self::Time(value) => f.write_str(&value.to_rfc3339()),
			other => match other.to_text() {
				Ok(text) => f.write_str(&text),
				Err(_) => f.write_str("?"),
			},
		}
	}
}

impl From<bool> for DriverValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for DriverValue {
	fn from(value: i64) -> Self {
		Self::Int64(value)
	}
}

impl From<u64> for DriverValue {
	fn from(value: u64) -> Self {
		Self::Uint64(value)
	}
}

impl From<f64> for DriverValue {
	fn from(value: f64) -> Self {
		Self::Float64(value)
	}
}

impl From<Vec<u8>> for DriverValue {
	fn from(value: Vec<u8>) -> Self {
		Self::Bytes(value)
	}
}

impl From<&[u8]> for DriverValue {
	fn from(value: &[u8]) -> Self {
		Self::Bytes(value.to_vec())
	}
}

impl From<String> for DriverValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&str> for DriverValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<Timestamp> for DriverValue {
	fn from(value: Timestamp) -> Self {
		Self::Time(value)
	}
}

/// Accept a value handed over by the driver.
pub trait Scanner {
	/// Replace `self` with `value`; `Null` yields null, conversion failures leave `self` null.
	fn scan(&mut self, value: &DriverValue) -> Result<()>;
}

/// Produce a value the driver can bind.
pub trait Valuer {
	/// Return the driver value; null yields [`DriverValue::Null`].
	fn value(&self) -> Result<DriverValue>;
}

impl<T: Primitive> Scanner for Nullable<T> {
	fn scan(&mut self, value: &DriverValue) -> Result<()> {
		if value.is_null() {
			self.reset();
			return Ok(());
		}

		match T::from_driver(value) {
			Ok(parsed) => {
				self.set_valid(parsed);
				Ok(())
			}
			Err(err) => {
				self.reset();
				Err(err)
			}
		}
	}
}

impl<T: Primitive> Valuer for Nullable<T> {
	fn value(&self) -> Result<DriverValue> {
		Ok(self.as_option().map_or(DriverValue::Null, T::to_driver))
	}
}

/// Driver-level boolean coercion.
///
/// Accepts booleans, the integers `1`/`0`, and the text forms `1 t T TRUE true True` /
/// `0 f F FALSE false False` as strings or byte strings.
pub fn coerce_bool(value: &DriverValue) -> Result<bool> {
	let coerced = match value {
		DriverValue::Bool(value) => Some(*value),
		DriverValue::Int64(1) | DriverValue::Uint64(1) => Some(true),
		DriverValue::Int64(0) | DriverValue::Uint64(0) => Some(false),
		DriverValue::String(text) => parse_bool_literal(text),
		DriverValue::Bytes(raw) => std::str::from_utf8(raw).ok().and_then(parse_bool_literal),
		_ => None,
	};

	coerced.ok_or_else(|| NulError::BoolCoercion {
		value: value.to_string(),
		kind: value.kind_name(),
	})
}

fn parse_bool_literal(text: &str) -> Option<bool> {
	match text {
		"1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
		"0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
		_ => None,
	}
}

/// Fallback scan path: render `value` as text and parse it as `T`.
pub(crate) fn parse_driver_text<T: Primitive>(value: &DriverValue) -> Result<T> {
	value
		.to_text()
		.ok()
		.and_then(|text| T::parse_text(text.as_bytes()).ok())
		.ok_or_else(|| unsupported_scan::<T>(value))
}

/// Build the "unsupported scan source" error for `T`.
pub(crate) fn unsupported_scan<T: Primitive>(value: &DriverValue) -> NulError {
	NulError::UnsupportedScan {
		target: T::NAME,
		found: value.kind_name(),
		value: value.to_string(),
	}
}
