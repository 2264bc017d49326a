use crate::nul::{NulError, Result};

/// Simple bounded cursor over an immutable envelope byte slice.
pub(crate) struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub(crate) fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return remaining unread bytes.
	pub(crate) fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub(crate) fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(NulError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a fixed-size array.
	pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one byte.
	pub(crate) fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read a little-endian `u32`.
	pub(crate) fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub(crate) fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i64`.
	pub(crate) fn read_i64_le(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.read_array()?))
	}

	/// Read a `u32` length prefix followed by that many bytes.
	pub(crate) fn read_len_prefixed(&mut self) -> Result<&'a [u8]> {
		let len = self.read_u32_le()? as usize;
		self.read_exact(len)
	}

	/// Fail when unread bytes remain.
	pub(crate) fn finish(&self) -> Result<()> {
		match self.remaining() {
			0 => Ok(()),
			extra => Err(NulError::TrailingBytes { extra }),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Cursor;
	use crate::nul::NulError;

	#[test]
	fn reads_little_endian_fields_in_order() {
		let mut bytes = vec![7_u8];
		bytes.extend_from_slice(&0xAABB_CCDD_u32.to_le_bytes());
		bytes.extend_from_slice(&(-5_i64).to_le_bytes());

		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_u8().expect("u8"), 7);
		assert_eq!(cursor.read_u32_le().expect("u32"), 0xAABB_CCDD);
		assert_eq!(cursor.read_i64_le().expect("i64"), -5);
		cursor.finish().expect("fully consumed");
	}

	#[test]
	fn reports_eof_with_offsets() {
		let mut cursor = Cursor::new(&[1, 2, 3]);
		let _ = cursor.read_u8().expect("first byte");
		let err = cursor.read_u32_le().expect_err("short read should fail");
		assert!(matches!(err, NulError::UnexpectedEof { at: 1, need: 4, rem: 2 }));
	}

	#[test]
	fn length_prefix_bounds_payload() {
		let mut bytes = 2_u32.to_le_bytes().to_vec();
		bytes.extend_from_slice(b"hiX");

		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_len_prefixed().expect("payload"), b"hi");
		let err = cursor.finish().expect_err("trailing byte should fail");
		assert!(matches!(err, NulError::TrailingBytes { extra: 1 }));
	}
}
