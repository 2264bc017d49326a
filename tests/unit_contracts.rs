#![allow(missing_docs)]

use nulltypes::nul::{
	BinaryCodec, Bool, Bytes, Float64, Int64, JsonCodec, Scanner, String as NulString, TextCodec, Time, Uint64, Valuer,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

fn assert_contract<T>()
where
	T: Scanner + Valuer + JsonCodec + TextCodec + BinaryCodec + Serialize + DeserializeOwned + Default + Clone + PartialEq,
{
}

#[test]
fn every_kind_implements_full_contract() {
	assert_contract::<Bool>();
	assert_contract::<Bytes>();
	assert_contract::<Float64>();
	assert_contract::<Int64>();
	assert_contract::<NulString>();
	assert_contract::<Time>();
	assert_contract::<Uint64>();
}

#[test]
fn codecs_are_usable_as_trait_objects() {
	let values: Vec<Box<dyn JsonCodec>> = vec![
		Box::new(Bool::from_value(true)),
		Box::new(Int64::from_value(3)),
		Box::new(NulString::new()),
	];

	let rendered: Vec<Vec<u8>> = values
		.iter()
		.map(|value| value.marshal_json().expect("marshal should succeed"))
		.collect();
	assert_eq!(rendered, vec![b"true".to_vec(), b"3".to_vec(), b"null".to_vec()]);
}

#[test]
fn option_conversions_round_trip() {
	let value: Int64 = Some(9).into();
	assert_eq!(Option::<i64>::from(value.clone()), Some(9));
	assert_eq!(value.pointer(), Some(9));

	let null: Int64 = None.into();
	assert!(null.is_null());
	assert_eq!(null.into_option(), None);
}
