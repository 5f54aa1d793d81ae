//! Registry of named message schemas.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::{
    errors::{Error, Result, SchemaError},
    field::Field,
    message::Message,
    schema::MessageSchema,
};

/// Validated schemas keyed by message type name.
///
/// Populated once at construction and read-only afterwards. Messages created
/// with [SchemaRegistry::create] borrow their schema from the registry.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, MessageSchema>,
}

impl SchemaRegistry {
    /// Builds a registry from `(type name, fields)` pairs.
    ///
    /// Every schema is validated before it is stored. A repeated type name is
    /// rejected.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<Field>)>,
        S: Into<String>,
    {
        let mut schemas = BTreeMap::new();

        for (name, fields) in entries {
            let name = name.into();
            if schemas.contains_key(&name) {
                return Err(SchemaError::DuplicateMessageType(name).into());
            }

            let schema = MessageSchema::new(&fields)?;
            debug!(
                message_type = %name,
                fields = schema.len(),
                total_bits = schema.total_bits(),
                "registered message type"
            );
            schemas.insert(name, schema);
        }

        Ok(Self { schemas })
    }

    /// Creates a message bound to the schema of `type_name`, all fields 0.
    pub fn create(&self, type_name: &str) -> Result<Message<'_>> {
        self.schema(type_name).map(Message::new)
    }

    /// Schema registered under `type_name`.
    pub fn schema(&self, type_name: &str) -> Result<&MessageSchema> {
        self.schemas
            .get(type_name)
            .ok_or_else(|| Error::UnknownMessageType(type_name.to_string()))
    }

    /// True if `type_name` is registered.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    /// Names of all registered message types.
    pub fn message_types(&self) -> BTreeSet<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    /// Number of registered message types.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True if no message types are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
