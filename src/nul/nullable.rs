use crate::nul::Primitive;

/// Literal rendered for null in JSON and text.
pub(crate) const NULL_LITERAL: &[u8] = b"null";

/// A value paired with a validity flag.
///
/// An invalid instance stands for SQL `NULL` / JSON `null`; its stored value is always the kind's
/// zero representation and is never handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct Nullable<T> {
	value: T,
	valid: bool,
}

impl<T: Primitive> Nullable<T> {
	/// Create an invalid instance.
	pub fn new() -> Self {
		Self { value: T::zero(), valid: false }
	}

	/// Create a valid instance wrapping `value`.
	pub fn from_value(value: T) -> Self {
		Self { value, valid: true }
	}

	/// Create a valid instance from a present reference, or an invalid one from `None`.
	pub fn from_option(value: Option<&T>) -> Self {
		value.map_or_else(Self::new, |value| Self::from_value(value.clone()))
	}

	/// Replace the value and mark the instance valid.
	pub fn set_valid(&mut self, value: T) {
		self.value = value;
		self.valid = true;
	}

	/// Clear the value to zero and mark the instance invalid.
	pub fn reset(&mut self) {
		self.value = T::zero();
		self.valid = false;
	}

	/// Reset to null when the value equals the zero representation, then return a copy.
	pub fn null_if_default(&mut self) -> Self {
		if self.value.is_zero() {
			self.reset();
		}
		self.clone()
	}

	/// Return whether the instance holds a meaningful value.
	pub fn is_valid(&self) -> bool {
		self.valid
	}

	/// Return whether the instance is null.
	pub fn is_null(&self) -> bool {
		!self.valid
	}

	/// Return the value, or the zero representation when null.
	pub fn must_value(&self) -> T {
		if self.valid { self.value.clone() } else { T::zero() }
	}

	/// Return an owned copy of the value, or `None` when null.
	///
	/// The copy is detached: later mutation of `self` does not change it.
	pub fn pointer(&self) -> Option<T> {
		self.as_option().cloned()
	}

	/// Borrow the value, or `None` when null.
	pub fn as_option(&self) -> Option<&T> {
		self.valid.then_some(&self.value)
	}

	/// Consume into a standard option.
	pub fn into_option(self) -> Option<T> {
		self.valid.then_some(self.value)
	}
}

impl<T: Primitive> Default for Nullable<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Primitive> From<Option<T>> for Nullable<T> {
	fn from(value: Option<T>) -> Self {
		value.map_or_else(Self::new, Self::from_value)
	}
}

impl<T: Primitive> From<Nullable<T>> for Option<T> {
	fn from(value: Nullable<T>) -> Self {
		value.into_option()
	}
}
