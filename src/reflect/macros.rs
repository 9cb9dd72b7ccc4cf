/// Implement [`Reflect`](crate::reflect::Reflect) for plain value types.
///
/// Each listed type becomes usable as a dynamic handle without being a
/// record; as a copy destination it trips the record-shape check.
#[macro_export]
macro_rules! impl_reflect_value {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::reflect::Reflect for $ty {
				fn type_name(&self) -> &'static str {
					stringify!($ty)
				}

				fn as_any(&self) -> &dyn ::std::any::Any {
					self
				}

				fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
					self
				}
			}
		)+
	};
}

/// Define a struct and derive its [`Reflect`](crate::reflect::Reflect) and
/// [`Record`](crate::reflect::Record) implementations.
///
/// `pub` fields are visible and settable through the dynamic layer;
/// restricted (`pub(crate)` and friends) and private fields are neither
/// and can never be read or written through it. Field metadata follows
/// declaration order. Every `pub` field type must be `Clone + 'static`.
/// Supports non-generic structs with named fields.
#[macro_export]
macro_rules! reflect_record {
	(
		$(#[$smeta:meta])*
		$svis:vis struct $sname:ident {
			$($body:tt)*
		}
	) => {
		$(#[$smeta])*
		$svis struct $sname {
			$($body)*
		}

		impl $crate::reflect::Reflect for $sname {
			fn type_name(&self) -> &'static str {
				stringify!($sname)
			}

			fn as_any(&self) -> &dyn ::std::any::Any {
				self
			}

			fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
				self
			}

			fn as_record(&self) -> ::std::option::Option<&dyn $crate::reflect::Record> {
				::std::option::Option::Some(self)
			}

			fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn $crate::reflect::Record> {
				::std::option::Option::Some(self)
			}
		}

		impl $crate::reflect::Record for $sname {
			fn fields(&self) -> &'static [$crate::reflect::FieldInfo] {
				const FIELDS: &[$crate::reflect::FieldInfo] =
					$crate::reflect_record!(@infos [] $($body)*);
				FIELDS
			}

			fn field(&self, name: &str) -> ::std::option::Option<&dyn $crate::reflect::FieldSlot> {
				$crate::reflect_record!(@field self, name, $($body)*)
			}

			fn field_mut(&mut self, name: &str) -> ::std::option::Option<&mut dyn $crate::reflect::FieldSlot> {
				$crate::reflect_record!(@field_mut self, name, $($body)*)
			}
		}
	};

	(@infos [$($acc:tt)*]) => {
		&[$($acc)*]
	};
	(@infos [$($acc:tt)*] $(#[$fmeta:meta])* pub $fname:ident : $fty:ty $(, $($rest:tt)*)?) => {
		$crate::reflect_record!(@infos [
			$($acc)*
			$crate::reflect::FieldInfo {
				name: stringify!($fname),
				type_name: stringify!($fty),
				visible: true,
				settable: true,
			},
		] $($($rest)*)?)
	};
	(@infos [$($acc:tt)*] $(#[$fmeta:meta])* $fvis:vis $fname:ident : $fty:ty $(, $($rest:tt)*)?) => {
		$crate::reflect_record!(@infos [
			$($acc)*
			$crate::reflect::FieldInfo {
				name: stringify!($fname),
				type_name: stringify!($fty),
				visible: false,
				settable: false,
			},
		] $($($rest)*)?)
	};

	(@field $slf:ident, $needle:ident,) => {
		::std::option::Option::None
	};
	(@field $slf:ident, $needle:ident, $(#[$fmeta:meta])* pub $fname:ident : $fty:ty $(, $($rest:tt)*)?) => {
		if $needle == stringify!($fname) {
			::std::option::Option::Some(&$slf.$fname as &dyn $crate::reflect::FieldSlot)
		} else {
			$crate::reflect_record!(@field $slf, $needle, $($($rest)*)?)
		}
	};
	(@field $slf:ident, $needle:ident, $(#[$fmeta:meta])* $fvis:vis $fname:ident : $fty:ty $(, $($rest:tt)*)?) => {
		$crate::reflect_record!(@field $slf, $needle, $($($rest)*)?)
	};

	(@field_mut $slf:ident, $needle:ident,) => {
		::std::option::Option::None
	};
	(@field_mut $slf:ident, $needle:ident, $(#[$fmeta:meta])* pub $fname:ident : $fty:ty $(, $($rest:tt)*)?) => {
		if $needle == stringify!($fname) {
			::std::option::Option::Some(&mut $slf.$fname as &mut dyn $crate::reflect::FieldSlot)
		} else {
			$crate::reflect_record!(@field_mut $slf, $needle, $($($rest)*)?)
		}
	};
	(@field_mut $slf:ident, $needle:ident, $(#[$fmeta:meta])* $fvis:vis $fname:ident : $fty:ty $(, $($rest:tt)*)?) => {
		$crate::reflect_record!(@field_mut $slf, $needle, $($($rest)*)?)
	};
}
