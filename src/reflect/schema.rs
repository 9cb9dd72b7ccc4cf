use serde::Serialize;

use crate::reflect::Record;

/// Serializable description of a record type's declared field table.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSchema {
	/// Declared record type name.
	pub type_name: String,
	/// Field descriptions in declaration order.
	pub fields: Vec<FieldSchema>,
}

/// Serializable description of one declared field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
	/// Field name as declared.
	pub name: String,
	/// Declared type text.
	pub type_name: String,
	/// Whether the field is readable through the dynamic layer.
	pub visible: bool,
	/// Whether the field can be assigned through the dynamic layer.
	pub settable: bool,
}

/// Describe the declared fields of `record`.
pub fn describe_record(record: &dyn Record) -> RecordSchema {
	RecordSchema {
		type_name: record.type_name().to_owned(),
		fields: record
			.fields()
			.iter()
			.map(|info| FieldSchema {
				name: info.name.to_owned(),
				type_name: info.type_name.to_owned(),
				visible: info.visible,
				settable: info.settable,
			})
			.collect(),
	}
}
