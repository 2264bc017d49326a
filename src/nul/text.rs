use crate::nul::nullable::NULL_LITERAL;
use crate::nul::{Nullable, Primitive, Result};

/// Plain-text marshal/unmarshal contract.
pub trait TextCodec {
	/// Render as text; null renders as `null`.
	fn marshal_text(&self) -> Result<Vec<u8>>;

	/// Parse text into `self`.
	///
	/// `null` yields null, empty input yields a valid zero value, and parse failures leave `self` null.
	fn unmarshal_text(&mut self, text: &[u8]) -> Result<()>;
}

impl<T: Primitive> TextCodec for Nullable<T> {
	fn marshal_text(&self) -> Result<Vec<u8>> {
		match self.as_option() {
			None => Ok(NULL_LITERAL.to_vec()),
			Some(value) => value.format_text(),
		}
	}

	fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
		if text == NULL_LITERAL {
			self.reset();
			return Ok(());
		}
		if text.is_empty() {
			self.set_valid(T::zero());
			return Ok(());
		}

		match T::parse_text(text) {
			Ok(value) => {
				self.set_valid(value);
				Ok(())
			}
			Err(err) => {
				self.reset();
				Err(err)
			}
		}
	}
}
