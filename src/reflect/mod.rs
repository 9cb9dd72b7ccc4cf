mod copy;
mod error;
mod field;
mod macros;
mod record;
mod schema;

/// Property copy entry point.
pub use copy::copy_properties;
/// Error and result aliases.
pub use error::{CopyError, Result};
/// Field metadata and dynamic slot access.
pub use field::{FieldInfo, FieldSlot};
/// Reflection traits over values and records.
pub use record::{Record, Reflect};
/// Serializable record schema description.
pub use schema::{FieldSchema, RecordSchema, describe_record};
