mod boolean;
mod bytes;
mod cursor;
mod driver;
mod envelope;
mod error;
mod float64;
mod int64;
mod json;
mod nullable;
mod primitive;
mod string;
mod text;
mod time;
mod uint64;

/// Nullable boolean.
pub use boolean::Bool;
/// Nullable byte sequence.
pub use bytes::Bytes;
/// Driver-facing value set, scan/value adapter traits, and boolean coercion.
pub use driver::{DriverValue, Scanner, Valuer, coerce_bool};
/// Binary envelope records, registry, and codec trait.
pub use envelope::{BinaryCodec, Envelope, EnvelopeKind, EnvelopeRegistry, register_envelopes};
/// Error and result aliases.
pub use error::{NulError, Result};
/// Nullable 64-bit float.
pub use float64::Float64;
/// Nullable signed 64-bit integer.
pub use int64::Int64;
/// JSON codec trait and JSON kind labels.
pub use json::{JsonCodec, JsonKind};
/// Generic nullable record shared by every kind.
pub use nullable::Nullable;
/// Per-kind behaviour plugged into [`Nullable`].
pub use primitive::Primitive;
/// Nullable UTF-8 string.
pub use string::String;
/// Text codec trait.
pub use text::TextCodec;
/// Nullable timestamp and its RFC3339 helpers.
pub use time::{Time, Timestamp, format_rfc3339, zero_time};
/// Nullable unsigned 64-bit integer.
pub use uint64::Uint64;
