//! # bitmessage
//!
//! A schema-driven codec for tightly bit-packed messages.
//!
//! Describe a message as an ordered list of named fields, each 1 to 64 bits wide
//! and signed or unsigned. Values are packed contiguously, least-significant bit
//! first, with no padding between fields. A [SchemaRegistry] holds several
//! message types under string keys and creates fresh [Message]s for each.
//!
//! ## Example
//!
//! ```
//! use bitmessage::{Field, Message, MessageSchema};
//!
//! let schema = MessageSchema::new(&[
//!     Field::unsigned("status", 2),
//!     Field::signed("value", 8),
//!     Field::unsigned("flags", 4),
//! ])
//! .unwrap();
//!
//! let mut message = Message::new(&schema);
//! message.set_field("status", 3).unwrap();
//! message.set_field("value", -128).unwrap();
//! let packed = message.pack();
//! assert_eq!(packed.len(), 2);
//!
//! let mut decoded = Message::new(&schema);
//! decoded.unpack(&packed).unwrap();
//! assert_eq!(decoded.get_field("value"), Ok(-128));
//! ```

pub mod bits;
pub mod errors;
pub mod field;
pub mod message;
pub mod registry;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serde;

pub use errors::{Error, Result, SchemaError};
pub use field::{Field, FieldSpec};
pub use message::Message;
pub use registry::SchemaRegistry;
pub use schema::MessageSchema;
