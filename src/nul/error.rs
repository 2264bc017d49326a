use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NulError>;

/// Errors produced while converting nullable values to and from their external representations.
#[derive(Debug, Error)]
pub enum NulError {
	/// Input was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// JSON value had a type the target cannot be built from.
	#[error("can't unmarshal json {found} into value of type {target}")]
	UnexpectedJson {
		/// Target nullable type name.
		target: &'static str,
		/// JSON kind that was found.
		found: &'static str,
	},
	/// JSON object did not match the `{"<Kind>": ..., "Valid": ...}` shape.
	#[error(
		"unmarshalling object into value of type {target} requires key {key:?} to be of type {expected} and key \"Valid\" to be of type bool; found {found_value} and {found_valid}, respectively"
	)]
	ObjectShape {
		/// Target nullable type name.
		target: &'static str,
		/// Value key expected in the object.
		key: &'static str,
		/// JSON kind expected under `key`.
		expected: &'static str,
		/// JSON kind found under `key`.
		found_value: &'static str,
		/// JSON kind found under `Valid`.
		found_valid: &'static str,
	},
	/// Value has no JSON representation.
	#[error("json: unsupported value: {value}")]
	UnsupportedValue {
		/// Rendered offending value.
		value: String,
	},
	/// Decimal integer text failed to parse.
	#[error("parse integer {input:?}: {source}")]
	ParseInt {
		/// Offending input text.
		input: String,
		/// Underlying parse failure.
		source: std::num::ParseIntError,
	},
	/// Floating-point text failed to parse.
	#[error("parse float {input:?}: {source}")]
	ParseFloat {
		/// Offending input text.
		input: String,
		/// Underlying parse failure.
		source: std::num::ParseFloatError,
	},
	/// Boolean text was neither `true` nor `false`.
	#[error("invalid boolean input: {input:?}")]
	ParseBool {
		/// Offending input text.
		input: String,
	},
	/// JSON number does not fit the target integer type.
	#[error("json number {number} does not fit {target}")]
	NumberRange {
		/// Target nullable type name.
		target: &'static str,
		/// Rendered JSON number.
		number: String,
	},
	/// Standard base64 decoding failed.
	#[error("base64: {0}")]
	Base64(#[from] base64::DecodeError),
	/// RFC3339 timestamp text failed to parse.
	#[error("parse time {input:?}: {source}")]
	Time {
		/// Offending input text.
		input: String,
		/// Underlying parse failure.
		source: chrono::ParseError,
	},
	/// Text input was not valid UTF-8.
	#[error("utf-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),
	/// Driver value could not be scanned into the target type.
	#[error("can't scan {found} value {value:?} into {target}")]
	UnsupportedScan {
		/// Target nullable type name.
		target: &'static str,
		/// Driver value kind.
		found: &'static str,
		/// Rendered driver value.
		value: String,
	},
	/// Driver-level boolean coercion failed.
	#[error("sql/driver: couldn't convert {value:?} ({kind}) into type bool")]
	BoolCoercion {
		/// Rendered driver value.
		value: String,
		/// Driver value kind.
		kind: &'static str,
	},
	/// Not enough bytes remained for a requested envelope read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Envelope did not start with the expected magic.
	#[error("envelope magic mismatch: got {got:?}")]
	BadEnvelopeMagic {
		/// First four bytes of the input.
		got: [u8; 4],
	},
	/// Envelope type name is not registered.
	#[error("unknown envelope type {name:?}")]
	UnknownEnvelope {
		/// Type name read from the stream.
		name: String,
	},
	/// Envelope holds a different registered kind than requested.
	#[error("envelope type mismatch: expected {expected}, got {got}")]
	EnvelopeMismatch {
		/// Type name the decoder asked for.
		expected: &'static str,
		/// Type name read from the stream.
		got: &'static str,
	},
	/// Validity flag byte was not 0 or 1.
	#[error("invalid validity flag {flag}")]
	InvalidValidFlag {
		/// Raw flag byte.
		flag: u8,
	},
	/// Envelope payload size does not match its kind.
	#[error("envelope payload for {kind} has {len} bytes, expected {expected}")]
	PayloadSize {
		/// Envelope type name.
		kind: &'static str,
		/// Declared payload length.
		len: usize,
		/// Fixed payload length of the kind.
		expected: usize,
	},
	/// Envelope timestamp is outside the representable range.
	#[error("envelope timestamp out of range: secs={secs}, nanos={nanos}, offset={offset}")]
	TimeRange {
		/// Unix seconds.
		secs: i64,
		/// Sub-second nanoseconds.
		nanos: u32,
		/// UTC offset in seconds.
		offset: i32,
	},
	/// Timestamp year has no four-digit RFC3339 form.
	#[error("time: year {year} outside of range [0,9999]")]
	TimeYear {
		/// Year in the timestamp's own offset.
		year: i32,
	},
	/// Payload does not fit the `u32` length prefix.
	#[error("envelope payload too large: {len} bytes")]
	PayloadTooLarge {
		/// Payload length in bytes.
		len: usize,
	},
	/// Bytes remained after a complete envelope.
	#[error("{extra} trailing bytes after envelope")]
	TrailingBytes {
		/// Number of unread bytes.
		extra: usize,
	},
}
