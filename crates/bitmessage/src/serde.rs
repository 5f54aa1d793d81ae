//! Deserializable schema descriptions.
//!
//! These types describe the *shape* of message layouts. They can be read from
//! any serde format and then turned into core `bitmessage` types. With the
//! `json` feature, [MessageSchema::from_json] and [SchemaRegistry::from_json]
//! accept the JSON form directly:
//!
//! ```json
//! {
//!   "sensor_data": [
//!     { "name": "status", "bit_width": 2 },
//!     { "name": "temperature", "bit_width": 12, "signed": true }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{errors::Result, field::Field, registry::SchemaRegistry, schema::MessageSchema};

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Name of the field; must be unique within its message.
    pub name: String,
    /// Width in bits, 1 to 64.
    pub bit_width: u64,
    /// Whether the value is two's complement. Defaults to unsigned.
    #[serde(default)]
    pub signed: bool,
}

/// Ordered field list for one message type.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct SchemaDef(pub Vec<FieldDef>);

/// Field lists keyed by message type name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct SchemaSetDef(pub BTreeMap<String, SchemaDef>);

impl From<SchemaDef> for Vec<Field> {
    fn from(value: SchemaDef) -> Self {
        value.0.into_iter().map(Into::into).collect()
    }
}

impl TryFrom<SchemaDef> for MessageSchema {
    type Error = crate::errors::Error;

    fn try_from(value: SchemaDef) -> Result<Self> {
        let fields: Vec<Field> = value.into();
        MessageSchema::new(&fields)
    }
}

impl TryFrom<SchemaSetDef> for SchemaRegistry {
    type Error = crate::errors::Error;

    fn try_from(value: SchemaSetDef) -> Result<Self> {
        SchemaRegistry::new(
            value
                .0
                .into_iter()
                .map(|(name, def)| (name, Vec::<Field>::from(def))),
        )
    }
}

#[cfg(feature = "json")]
fn malformed(err: serde_json::Error) -> crate::errors::Error {
    crate::errors::SchemaError::Malformed(err.to_string()).into()
}

#[cfg(feature = "json")]
impl MessageSchema {
    /// Builds a schema from a JSON array of field objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let def: SchemaDef = serde_json::from_str(json).map_err(malformed)?;
        def.try_into()
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let def: SchemaDef = serde_json::from_value(value).map_err(malformed)?;
        def.try_into()
    }
}

#[cfg(feature = "json")]
impl SchemaRegistry {
    /// Builds a registry from a JSON object mapping type names to field arrays.
    pub fn from_json(json: &str) -> Result<Self> {
        let def: SchemaSetDef = serde_json::from_str(json).map_err(malformed)?;
        def.try_into()
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let def: SchemaSetDef = serde_json::from_value(value).map_err(malformed)?;
        def.try_into()
    }
}
