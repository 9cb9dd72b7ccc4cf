#![allow(missing_docs)]

use std::collections::HashMap;

use recopy::reflect::{CopyError, copy_properties};

recopy::reflect_record! {
	#[derive(Debug, Clone, Default)]
	pub struct Payload {
		pub body: String,
	}
}

#[test]
fn absent_arguments_yield_src_dst_cannot_be_nil() {
	let mut dst = Payload::default();
	assert_eq!(
		copy_properties(None, Some(&mut dst)),
		Err(CopyError::SrcDstCannotBeNil)
	);
	assert_eq!(dst.body, "");

	let src = Payload {
		body: "hello".to_owned(),
	};
	assert_eq!(copy_properties(Some(&src), None), Err(CopyError::SrcDstCannotBeNil));
}

#[test]
fn primitive_destination_yields_dst_must_be_pointer_struct() {
	let src = Payload {
		body: "hello".to_owned(),
	};
	let mut count = 5_i64;

	assert_eq!(
		copy_properties(Some(&src), Some(&mut count)),
		Err(CopyError::DstMustBePointerStruct)
	);
	assert_eq!(count, 5);
}

#[test]
fn collection_destinations_yield_dst_must_be_pointer_struct() {
	let src = Payload {
		body: "hello".to_owned(),
	};

	let mut items: Vec<i64> = vec![1, 2];
	assert_eq!(
		copy_properties(Some(&src), Some(&mut items)),
		Err(CopyError::DstMustBePointerStruct)
	);
	assert_eq!(items, [1, 2]);

	let mut lookup: HashMap<String, i64> = HashMap::new();
	assert_eq!(
		copy_properties(Some(&src), Some(&mut lookup)),
		Err(CopyError::DstMustBePointerStruct)
	);

	let mut maybe: Option<String> = None;
	assert_eq!(
		copy_properties(Some(&src), Some(&mut maybe)),
		Err(CopyError::DstMustBePointerStruct)
	);
}

#[test]
fn error_identities_are_stable_and_comparable() {
	assert_eq!(CopyError::SrcDstCannotBeNil, CopyError::SrcDstCannotBeNil);
	assert_ne!(CopyError::SrcDstCannotBeNil, CopyError::DstMustBePointerStruct);
}
