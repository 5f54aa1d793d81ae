//! Error types for schema construction, field access and bit packing.

use thiserror::Error;

/// Reasons a schema description is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Field name is empty.
    #[error("field name must not be empty")]
    EmptyFieldName,
    /// Field width is 0 or greater than 64 bits.
    #[error("invalid bit width for field '{name}': {bit_width}")]
    InvalidFieldWidth { name: String, bit_width: u64 },
    /// The same field name appears twice within one schema.
    #[error("duplicate field name '{0}'")]
    DuplicateFieldName(String),
    /// The same message type name appears twice within one registry.
    #[error("duplicate message type '{0}'")]
    DuplicateMessageType(String),
    /// The description could not be read (missing or mistyped attribute).
    #[error("malformed schema description: {0}")]
    Malformed(String),
}

/// Errors surfaced by every public operation of the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] SchemaError),
    #[error("message type '{0}' not found")]
    UnknownMessageType(String),
    #[error("field '{0}' not found")]
    UnknownField(String),
    #[error("value {value} out of range for field '{field}' [{min}, {max}]")]
    ValueOutOfRange {
        field: String,
        value: i64,
        min: i128,
        max: i128,
    },
    #[error("buffer too small for message: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

/// Errors produced by the low-level routines in [crate::bits].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitError {
    /// Requested bit range is beyond the end of the data.
    #[error("bit range out of bounds")]
    OutOfBounds,
    /// More than 64 bits were requested in a single access.
    #[error("more than 64 bits requested")]
    TooManyBits,
}

pub type Result<T> = core::result::Result<T, Error>;
