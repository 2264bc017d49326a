#![allow(missing_docs)]

use std::fmt::Debug;

use nulltypes::nul::{
	BinaryCodec, Bool, DriverValue, JsonCodec, NulError, Nullable, Primitive, Scanner, TextCodec, Time, Uint64, Valuer,
};
use nulltypes_testkit::{BLANK_OBJECT_JSON, BYTES_FIXTURE, INVALID_JSON, STRING_FIXTURE, TIME_TEXT, time_fixture};

fn check_laws<T: Primitive + Debug>(sample: T) {
	let kind = T::NAME;
	let valid = Nullable::from_value(sample.clone());

	let json = valid.marshal_json().expect("valid value should marshal");
	let mut from_json = Nullable::<T>::new();
	from_json.unmarshal_json(&json).expect("marshalled JSON should unmarshal");
	assert_eq!(from_json, valid, "json round trip for {kind}");

	for original in [valid.clone(), Nullable::new()] {
		let bytes = original.marshal_binary().expect("binary marshal should succeed");
		let mut decoded = Nullable::<T>::from_value(sample.clone());
		decoded.unmarshal_binary(&bytes).expect("binary unmarshal should succeed");
		assert_eq!(decoded, original, "binary round trip for {kind}");
	}

	let mut reset = valid.clone();
	reset.reset();
	assert_eq!(reset, Nullable::new(), "reset equals new for {kind}");

	for start in [valid.clone(), Nullable::from_value(T::zero()), Nullable::new()] {
		let mut once = start.clone();
		let first = once.null_if_default();
		let second = once.null_if_default();
		assert_eq!(first, second, "null_if_default idempotent for {kind}");
	}

	let mut text = valid.clone();
	text.unmarshal_text(b"null").expect("null text should parse");
	assert!(text.is_null(), "null text for {kind}");
	assert_eq!(text.must_value(), T::zero());

	text.unmarshal_text(b"").expect("empty text should parse");
	assert_eq!(text, Nullable::from_value(T::zero()), "empty text for {kind}");

	assert_eq!(Nullable::<T>::new().value().expect("null value"), DriverValue::Null);
	assert_eq!(Nullable::<T>::new().marshal_json().expect("null marshal"), b"null");

	let mut scanned = valid.clone();
	scanned.scan(&DriverValue::Null).expect("null scan should succeed");
	assert!(scanned.is_null(), "null scan for {kind}");

	let mut untouched = valid.clone();
	let err = untouched.unmarshal_json(INVALID_JSON).expect_err("syntax error should fail");
	assert!(matches!(err, NulError::Json(_)));
	assert_eq!(untouched, valid, "syntax error keeps {kind}");

	let err = untouched.unmarshal_json(BLANK_OBJECT_JSON).expect_err("blank object should fail");
	assert!(matches!(err, NulError::ObjectShape { found_value: "missing", found_valid: "missing", .. }));
	assert_eq!(untouched, valid, "shape error keeps {kind}");
}

#[test]
fn laws_hold_for_bool() {
	check_laws(true);
}

#[test]
fn laws_hold_for_bytes() {
	check_laws(BYTES_FIXTURE.to_vec());
}

#[test]
fn laws_hold_for_float64() {
	check_laws(-1234.5678_f64);
}

#[test]
fn laws_hold_for_int64() {
	check_laws(i64::MIN);
}

#[test]
fn laws_hold_for_string() {
	check_laws(STRING_FIXTURE.to_owned());
}

#[test]
fn laws_hold_for_time() {
	check_laws(time_fixture());
}

#[test]
fn laws_hold_for_uint64() {
	check_laws(u64::MAX);
}

#[test]
fn bool_json_literals() {
	assert_eq!(Bool::from_value(true).marshal_json().expect("true marshals"), b"true");
	assert_eq!(Bool::new().marshal_json().expect("null marshals"), b"null");
}

#[test]
fn uint64_max_binds_as_decimal_bytes() {
	let value = Uint64::from_value(18_446_744_073_709_551_615).value().expect("value");
	assert_eq!(value, DriverValue::Bytes(b"18446744073709551615".to_vec()));
}

#[test]
fn time_marshal_text_is_exact() {
	assert_eq!(Time::from_value(time_fixture()).marshal_text().expect("text marshals"), TIME_TEXT.as_bytes());
}
