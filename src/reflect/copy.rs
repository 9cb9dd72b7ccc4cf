use tracing::trace;

use crate::reflect::{CopyError, Record, Reflect, Result};

/// Copy same-named, identically-typed field values from `src` into `dst`.
///
/// The destination is mutated in place, field by field, wherever a field of
/// the same name, the same declared type, and settable storage exists on
/// both sides. Every other pairing is skipped silently: a missing
/// destination field, a read-only destination field, and any type
/// difference, including losslessly convertible numeric widths. `None`
/// stands in for an absent argument.
///
/// ```
/// use std::collections::HashMap;
///
/// use recopy::reflect::copy_properties;
///
/// recopy::reflect_record! {
/// 	#[derive(Default)]
/// 	pub struct Source {
/// 		pub name: String,
/// 		pub tags: HashMap<String, i64>,
/// 	}
/// }
///
/// recopy::reflect_record! {
/// 	#[derive(Default)]
/// 	pub struct Target {
/// 		pub name: String,
/// 		pub tags: HashMap<String, i64>,
/// 		pub age: i64,
/// 	}
/// }
///
/// let src = Source {
/// 	name: "test".to_owned(),
/// 	tags: HashMap::from([("a".to_owned(), 1)]),
/// };
/// let mut dst = Target { age: 30, ..Target::default() };
///
/// copy_properties(Some(&src), Some(&mut dst)).expect("copy succeeds");
/// assert_eq!(dst.name, "test");
/// assert_eq!(dst.tags.get("a"), Some(&1));
/// assert_eq!(dst.age, 30);
/// ```
pub fn copy_properties(src: Option<&dyn Reflect>, dst: Option<&mut dyn Reflect>) -> Result<()> {
	let (Some(src), Some(dst)) = (src, dst) else {
		return Err(CopyError::SrcDstCannotBeNil);
	};

	let dst = dst.as_record_mut().ok_or(CopyError::DstMustBePointerStruct)?;

	// A non-record source declares no fields, so there is nothing to copy.
	let Some(src) = src.as_record() else {
		return Ok(());
	};

	copy_record_fields(src, dst);
	Ok(())
}

fn copy_record_fields(src: &dyn Record, dst: &mut dyn Record) {
	for info in src.fields() {
		if !info.visible {
			trace!(field = info.name, "skip: source field not visible");
			continue;
		}
		let Some(value) = src.field(info.name) else {
			trace!(field = info.name, "skip: source field unreadable");
			continue;
		};
		let Some(target) = dst.field_info(info.name) else {
			trace!(field = info.name, "skip: no matching destination field");
			continue;
		};
		if !target.settable {
			trace!(field = info.name, "skip: destination field not settable");
			continue;
		}
		let Some(slot) = dst.field_mut(info.name) else {
			trace!(field = info.name, "skip: destination field unavailable");
			continue;
		};
		if slot.as_any().type_id() != value.as_any().type_id() {
			trace!(
				field = info.name,
				src_type = info.type_name,
				dst_type = target.type_name,
				"skip: declared types differ"
			);
			continue;
		}

		let assigned = slot.assign_cloned(value.as_any());
		debug_assert!(assigned, "assignment follows a type identity check");
		trace!(field = info.name, "field copied");
	}
}
