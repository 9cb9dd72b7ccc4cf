use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CopyError>;

/// Errors produced while copying record properties.
///
/// Field-level mismatches are never errors; a copy only fails on the two
/// argument-shape conditions below.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CopyError {
	/// Source or destination handle was absent.
	#[error("src and dst cannot be nil")]
	SrcDstCannotBeNil,
	/// Destination handle does not refer to a mutable record.
	#[error("dst must be a mutable reference to a record")]
	DstMustBePointerStruct,
}
