use std::any::Any;
use std::collections::HashMap;

use crate::reflect::{FieldInfo, FieldSlot};

/// Runtime handle over any reflectable value.
///
/// Non-record values answer `None` from the record hooks; that is what the
/// copier's destination-shape check keys on.
pub trait Reflect: Any {
	/// Declared type name.
	fn type_name(&self) -> &'static str;
	/// Borrow the value for downcasting.
	fn as_any(&self) -> &dyn Any;
	/// Mutably borrow the value for downcasting.
	fn as_any_mut(&mut self) -> &mut dyn Any;

	/// Record view when the value is a structured record.
	fn as_record(&self) -> Option<&dyn Record> {
		None
	}

	/// Mutable record view when the value is a structured record.
	fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
		None
	}
}

/// Field-level introspection over a structured record.
///
/// Implementations come from [`crate::reflect_record!`] or are written by
/// hand when a type needs visibility or settability rules the macro does
/// not express (a read-only field, for example).
pub trait Record: Reflect {
	/// Declared fields in declaration order.
	fn fields(&self) -> &'static [FieldInfo];
	/// Read access to a visible field's storage.
	fn field(&self, name: &str) -> Option<&dyn FieldSlot>;
	/// Write access to a settable field's storage.
	fn field_mut(&mut self, name: &str) -> Option<&mut dyn FieldSlot>;

	/// Metadata for one declared field.
	fn field_info(&self, name: &str) -> Option<&'static FieldInfo> {
		self.fields().iter().find(|info| info.name == name)
	}
}

crate::impl_reflect_value! {
	bool, char,
	f32, f64,
	i8, i16, i32, i64, i128, isize,
	u8, u16, u32, u64, u128, usize,
	String,
}

impl<T: Any> Reflect for Vec<T> {
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

impl<T: Any> Reflect for Option<T> {
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

impl<K: Any, V: Any, S: Any> Reflect for HashMap<K, V, S> {
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
