use std::sync::OnceLock;

use crate::nul::cursor::Cursor;
use crate::nul::{NulError, Nullable, Primitive, Result};

/// Leading bytes of every encoded envelope.
const MAGIC: [u8; 4] = *b"NUL1";

static REGISTRY: OnceLock<EnvelopeRegistry> = OnceLock::new();

/// Envelope record kinds known to the binary codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
	/// Boolean record.
	Bool,
	/// Byte sequence record.
	Bytes,
	/// 64-bit float record.
	Float64,
	/// Signed 64-bit integer record.
	Int64,
	/// UTF-8 string record.
	String,
	/// Timestamp record.
	Time,
	/// Unsigned 64-bit integer record.
	Uint64,
}

impl EnvelopeKind {
	/// Every built-in kind, in registration order.
	pub const ALL: [Self; 7] = [Self::Bool, Self::Bytes, Self::Float64, Self::Int64, Self::String, Self::Time, Self::Uint64];

	/// Type name written into the stream.
	pub fn type_name(self) -> &'static str {
		match self {
			Self::Bool => "BoolEnvelope",
			Self::Bytes => "BytesEnvelope",
			Self::Float64 => "Float64Envelope",
			Self::Int64 => "Int64Envelope",
			Self::String => "StringEnvelope",
			Self::Time => "TimeEnvelope",
			Self::Uint64 => "Uint64Envelope",
		}
	}

	/// Fixed payload width in bytes, `None` for variable-length kinds.
	pub fn payload_size(self) -> Option<usize> {
		match self {
			Self::Bool => Some(1),
			Self::Float64 | Self::Int64 | Self::Uint64 => Some(8),
			Self::Time => Some(16),
			Self::Bytes | Self::String => None,
		}
	}
}

/// Process-wide table of registered envelope kinds.
#[derive(Debug)]
pub struct EnvelopeRegistry {
	kinds: Vec<EnvelopeKind>,
}

/// Register the built-in envelope kinds and return the shared registry.
///
/// Safe to call any number of times; the first call initialises the table and later calls return it.
pub fn register_envelopes() -> &'static EnvelopeRegistry {
	REGISTRY.get_or_init(EnvelopeRegistry::builtin)
}

impl EnvelopeRegistry {
	fn builtin() -> Self {
		Self {
			kinds: EnvelopeKind::ALL.to_vec(),
		}
	}

	/// Resolve a type name read from a stream.
	pub fn lookup(&self, name: &[u8]) -> Option<EnvelopeKind> {
		self.kinds.iter().copied().find(|kind| kind.type_name().as_bytes() == name)
	}

	/// Return whether `kind` is registered.
	pub fn contains(&self, kind: EnvelopeKind) -> bool {
		self.kinds.contains(&kind)
	}

	/// Return all registered kinds.
	pub fn kinds(&self) -> &[EnvelopeKind] {
		&self.kinds
	}

	/// Return number of registered kinds.
	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	/// Return whether no kinds are registered.
	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}
}

/// Data-transfer record carried by the binary codec.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
	/// Wrapped value; the zero representation when `valid` is false.
	pub value: T,
	/// Validity flag.
	pub valid: bool,
}

impl<T: Primitive> Envelope<T> {
	/// Encode as `magic | name_len:u8 | name | valid:u8 | payload_len:u32le | payload`.
	pub fn encode(&self) -> Result<Vec<u8>> {
		let kind = T::ENVELOPE;
		let registry = register_envelopes();
		debug_assert!(registry.contains(kind));

		let mut payload = Vec::new();
		self.value.write_payload(&mut payload);
		let payload_len = u32::try_from(payload.len()).map_err(|_| NulError::PayloadTooLarge { len: payload.len() })?;

		let name = kind.type_name().as_bytes();
		let mut out = Vec::with_capacity(MAGIC.len() + 1 + name.len() + 1 + 4 + payload.len());
		out.extend_from_slice(&MAGIC);
		out.push(name.len() as u8);
		out.extend_from_slice(name);
		out.push(u8::from(self.valid));
		out.extend_from_slice(&payload_len.to_le_bytes());
		out.extend_from_slice(&payload);
		Ok(out)
	}

	/// Decode a complete envelope of kind `T`.
	pub fn decode(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);

		let magic = cursor.read_array::<4>()?;
		if magic != MAGIC {
			return Err(NulError::BadEnvelopeMagic { got: magic });
		}

		let name_len = usize::from(cursor.read_u8()?);
		let name = cursor.read_exact(name_len)?;
		let kind = register_envelopes().lookup(name).ok_or_else(|| NulError::UnknownEnvelope {
			name: String::from_utf8_lossy(name).into_owned(),
		})?;
		if kind != T::ENVELOPE {
			return Err(NulError::EnvelopeMismatch {
				expected: T::ENVELOPE.type_name(),
				got: kind.type_name(),
			});
		}

		let valid = match cursor.read_u8()? {
			0 => false,
			1 => true,
			flag => return Err(NulError::InvalidValidFlag { flag }),
		};

		let payload = cursor.read_len_prefixed()?;
		cursor.finish()?;

		if let Some(expected) = kind.payload_size() {
			if payload.len() != expected {
				return Err(NulError::PayloadSize {
					kind: kind.type_name(),
					len: payload.len(),
					expected,
				});
			}
		}

		let value = T::read_payload(payload)?;
		Ok(Self { value, valid })
	}

	/// Convert into a nullable value; an invalid record yields null.
	pub fn into_nullable(self) -> Nullable<T> {
		if self.valid { Nullable::from_value(self.value) } else { Nullable::new() }
	}
}

impl<T: Primitive> From<&Nullable<T>> for Envelope<T> {
	fn from(value: &Nullable<T>) -> Self {
		Self {
			value: value.must_value(),
			valid: value.is_valid(),
		}
	}
}

/// Copy a fixed-width payload into an array.
pub(crate) fn fixed_payload<const N: usize>(kind: EnvelopeKind, payload: &[u8]) -> Result<[u8; N]> {
	payload.try_into().map_err(|_| NulError::PayloadSize {
		kind: kind.type_name(),
		len: payload.len(),
		expected: N,
	})
}

/// Binary marshal/unmarshal contract.
pub trait BinaryCodec {
	/// Encode into a self-describing envelope.
	fn marshal_binary(&self) -> Result<Vec<u8>>;

	/// Decode an envelope into `self`; on error `self` is left unchanged.
	fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()>;
}

impl<T: Primitive> BinaryCodec for Nullable<T> {
	fn marshal_binary(&self) -> Result<Vec<u8>> {
		Envelope::from(self).encode()
	}

	fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
		let envelope = Envelope::<T>::decode(data)?;
		*self = envelope.into_nullable();
		Ok(())
	}
}
