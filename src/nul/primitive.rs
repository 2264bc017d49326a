use serde_json::Value;

use crate::nul::{DriverValue, EnvelopeKind, JsonKind, Result};

/// Per-kind behaviour behind a [`Nullable`](crate::nul::Nullable) wrapper.
///
/// Every method only deals with the in-domain value. Null handling (`null` literals, empty text,
/// driver `NULL`, the validity flag) is shared and lives in the wrapper itself.
pub trait Primitive: Clone + PartialEq + Sized {
	/// Type label used in errors and as the value key of the JSON object shape.
	const NAME: &'static str;
	/// JSON kind expected under [`Self::NAME`] in the object shape.
	const JSON_KIND: JsonKind;
	/// Envelope record registered for this kind.
	const ENVELOPE: EnvelopeKind;

	/// Zero representation.
	fn zero() -> Self;

	/// Whether the value equals [`Self::zero`].
	fn is_zero(&self) -> bool;

	/// Parse non-empty canonical text.
	fn parse_text(text: &[u8]) -> Result<Self>;

	/// Render canonical text.
	fn format_text(&self) -> Result<Vec<u8>>;

	/// Build from a non-null, non-object JSON value.
	///
	/// `Ok(None)` means the literal stands for null (empty string for numeric kinds).
	fn from_json(value: &Value) -> Result<Option<Self>>;

	/// Render the canonical JSON literal.
	fn to_json(&self) -> Result<Value>;

	/// Convert a non-null driver value.
	fn from_driver(value: &DriverValue) -> Result<Self>;

	/// Convert into the driver representation.
	fn to_driver(&self) -> DriverValue;

	/// Append the envelope payload bytes.
	fn write_payload(&self, out: &mut Vec<u8>);

	/// Read a payload whose length already matched [`EnvelopeKind::payload_size`].
	fn read_payload(payload: &[u8]) -> Result<Self>;
}
