use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Utc};
use serde_json::Value;

use crate::nul::cursor::Cursor;
use crate::nul::driver::parse_driver_text;
use crate::nul::json::unexpected_json;
use crate::nul::{DriverValue, EnvelopeKind, JsonKind, NulError, Nullable, Primitive, Result};

/// Unix seconds of `0001-01-01T00:00:00Z`.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// Timestamp carried by [`Time`]; the UTC offset survives every codec.
pub type Timestamp = DateTime<FixedOffset>;

/// Nullable timestamp.
pub type Time = Nullable<Timestamp>;

/// Zero timestamp, `0001-01-01T00:00:00Z`.
pub fn zero_time() -> Timestamp {
	DateTime::<Utc>::from_timestamp(ZERO_TIME_SECS, 0)
		.unwrap_or_default()
		.fixed_offset()
}

/// Render RFC3339 with trailing fractional zeros trimmed and `Z` for UTC.
///
/// Years outside `0..=9999` have no RFC3339 form and fail with [`NulError::TimeYear`].
pub fn format_rfc3339(value: &Timestamp) -> Result<String> {
	let year = value.year();
	if !(0..=9999).contains(&year) {
		return Err(NulError::TimeYear { year });
	}

	let full = value.to_rfc3339_opts(SecondsFormat::Nanos, true);
	let Some(dot) = full.find('.') else {
		return Ok(full);
	};
	let digits_end = full[dot + 1..]
		.find(|c: char| !c.is_ascii_digit())
		.map_or(full.len(), |at| dot + 1 + at);
	let fraction = full[dot + 1..digits_end].trim_end_matches('0');

	let mut out = String::with_capacity(full.len());
	out.push_str(&full[..dot]);
	if !fraction.is_empty() {
		out.push('.');
		out.push_str(fraction);
	}
	out.push_str(&full[digits_end..]);
	Ok(out)
}

impl Primitive for Timestamp {
	const NAME: &'static str = "Time";
	const JSON_KIND: JsonKind = JsonKind::String;
	const ENVELOPE: EnvelopeKind = EnvelopeKind::Time;

	fn zero() -> Self {
		zero_time()
	}

	fn is_zero(&self) -> bool {
		*self == zero_time()
	}

	fn parse_text(text: &[u8]) -> Result<Self> {
		let text = std::str::from_utf8(text)?;
		DateTime::parse_from_rfc3339(text).map_err(|source| NulError::Time {
			input: text.to_owned(),
			source,
		})
	}

	// Zero time renders as empty text so it reads back as a valid zero value.
	fn format_text(&self) -> Result<Vec<u8>> {
		if self.is_zero() {
			return Ok(Vec::new());
		}
		Ok(format_rfc3339(self)?.into_bytes())
	}

	fn from_json(value: &Value) -> Result<Option<Self>> {
		match value {
			Value::String(text) => Self::parse_text(text.as_bytes()).map(Some),
			other => Err(unexpected_json::<Self>(other)),
		}
	}

	fn to_json(&self) -> Result<Value> {
		Ok(Value::String(format_rfc3339(self)?))
	}

	fn from_driver(value: &DriverValue) -> Result<Self> {
		match value {
			DriverValue::Time(value) => Ok(*value),
			other => parse_driver_text(other),
		}
	}

	fn to_driver(&self) -> DriverValue {
		DriverValue::Time(*self)
	}

	fn write_payload(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(&self.timestamp().to_le_bytes());
		out.extend_from_slice(&self.timestamp_subsec_nanos().to_le_bytes());
		out.extend_from_slice(&self.offset().local_minus_utc().to_le_bytes());
	}

	fn read_payload(payload: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(payload);
		let secs = cursor.read_i64_le()?;
		let nanos = cursor.read_u32_le()?;
		let offset = cursor.read_i32_le()?;
		cursor.finish()?;

		let utc = DateTime::<Utc>::from_timestamp(secs, nanos);
		let zone = FixedOffset::east_opt(offset);
		match (utc, zone) {
			(Some(utc), Some(zone)) => Ok(utc.with_timezone(&zone)),
			_ => Err(NulError::TimeRange { secs, nanos, offset }),
		}
	}
}
