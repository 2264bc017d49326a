use crate::nul::{BinaryCodec, DriverValue, Int64, JsonCodec, NulError, Scanner, TextCodec, Valuer};

#[test]
fn scans_native_ints_and_decimal_text() {
	let mut value = Int64::new();
	value.scan(&DriverValue::Int64(i64::MIN)).expect("int scans");
	assert_eq!(value, Int64::from_value(i64::MIN));

	value.scan(&DriverValue::from(&b"42"[..])).expect("byte text scans");
	assert_eq!(value, Int64::from_value(42));

	let err = value.scan(&DriverValue::Float64(1.5)).expect_err("fraction should fail");
	assert!(matches!(err, NulError::UnsupportedScan { target: "Int64", found: "float64", .. }));
	assert!(value.is_null());

	let err = value.scan(&DriverValue::Uint64(u64::MAX)).expect_err("out of range should fail");
	assert!(matches!(err, NulError::UnsupportedScan { .. }));
}

#[test]
fn value_returns_native_int() {
	assert_eq!(Int64::from_value(-9).value().expect("value"), DriverValue::Int64(-9));
	assert_eq!(Int64::new().value().expect("value"), DriverValue::Null);
}

#[test]
fn json_numbers_must_be_exact_integers() {
	let mut value = Int64::new();
	value.unmarshal_json(b"-17").expect("integer parses");
	assert_eq!(value, Int64::from_value(-17));

	let err = value.unmarshal_json(b"1.5").expect_err("fraction should fail");
	assert!(matches!(err, NulError::NumberRange { target: "Int64", ref number } if number == "1.5"));
	assert!(value.is_null());

	let err = value.unmarshal_json(b"9223372036854775808").expect_err("overflow should fail");
	assert!(matches!(err, NulError::NumberRange { .. }));
}

#[test]
fn json_accepts_decimal_strings() {
	let mut value = Int64::new();
	value.unmarshal_json(br#""123""#).expect("decimal string parses");
	assert_eq!(value, Int64::from_value(123));

	value.unmarshal_json(br#""""#).expect("empty string is null");
	assert!(value.is_null());

	let err = value.unmarshal_json(br#""12a""#).expect_err("bad decimal should fail");
	assert!(matches!(err, NulError::ParseInt { ref input, .. } if input == "12a"));
}

#[test]
fn json_object_shape_requires_number() {
	let mut value = Int64::from_value(5);
	let err = value
		.unmarshal_json(br#"{"Int64":"5","Valid":true}"#)
		.expect_err("string under value key should fail");
	assert!(matches!(
		err,
		NulError::ObjectShape {
			found_value: "string",
			found_valid: "bool",
			..
		}
	));
	assert_eq!(value, Int64::from_value(5));

	value.unmarshal_json(br#"{"Int64":7,"Valid":false}"#).expect("invalid object parses");
	assert!(value.is_null());
}

#[test]
fn marshals_decimal_json_and_text() {
	let value = Int64::from_value(i64::MAX);
	assert_eq!(value.marshal_json().expect("int marshals"), b"9223372036854775807");
	assert_eq!(value.marshal_text().expect("text marshals"), b"9223372036854775807");
}

#[test]
fn text_sentinels_and_errors() {
	let mut value = Int64::from_value(4);
	value.unmarshal_text(b"").expect("empty text parses");
	assert_eq!(value, Int64::from_value(0));

	value.unmarshal_text(b"-8").expect("decimal parses");
	assert_eq!(value, Int64::from_value(-8));

	let err = value.unmarshal_text(b"eight").expect_err("word should fail");
	assert!(matches!(err, NulError::ParseInt { .. }));
	assert!(value.is_null());
}

#[test]
fn binary_round_trip() {
	let value = Int64::from_value(-1);
	let bytes = value.marshal_binary().expect("int marshals");
	assert_eq!(&bytes[bytes.len() - 8..], &(-1_i64).to_le_bytes());

	let mut decoded = Int64::new();
	decoded.unmarshal_binary(&bytes).expect("int unmarshals");
	assert_eq!(decoded, value);
}
