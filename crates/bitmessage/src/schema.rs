//! Schema: ordered, validated set of fields that defines a message layout.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    bits,
    errors::{Error, Result, SchemaError},
    field::{Field, FieldSpec},
};

/// An ordered list of [FieldSpec]s and their total bit length.
///
/// Field order is the packing order: changing it changes the wire format.
/// Build with [MessageSchema::new] from [Field] descriptions. Immutable after
/// construction and freely shareable across threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageSchema {
    fields: Vec<FieldSpec>,
    total_bits: usize,
}

impl MessageSchema {
    /// Validates `fields` in order. Fails on the first invalid field or repeated name.
    pub fn new(fields: &[Field]) -> Result<Self> {
        let mut specs: Vec<FieldSpec> = Vec::with_capacity(fields.len());
        let mut seen: HashSet<&str> = HashSet::with_capacity(fields.len());
        let mut total_bits = 0;

        for field in fields {
            let spec = FieldSpec::try_from(field)?;

            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName(field.name.clone()).into());
            }

            total_bits += spec.bit_width();
            specs.push(spec);
        }

        debug!(fields = specs.len(), total_bits, "built message schema");

        Ok(Self {
            fields: specs,
            total_bits,
        })
    }

    /// Fields in packing order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the schema has no fields (packs to zero bytes).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index` in packing order, if any.
    pub fn field_at(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    /// Position of the field called `name` in packing order.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    /// The field called `name`, or [Error::UnknownField].
    pub fn field(&self, name: &str) -> Result<&FieldSpec> {
        self.index_of(name).map(|i| &self.fields[i])
    }

    /// True if a field called `name` exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name() == name)
    }

    /// Sum of all field widths.
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Packed size in bytes: `ceil(total_bits / 8)`.
    pub fn byte_length(&self) -> usize {
        bits::byte_len(self.total_bits)
    }
}

impl TryFrom<&[Field]> for MessageSchema {
    type Error = Error;

    fn try_from(value: &[Field]) -> Result<Self> {
        MessageSchema::new(value)
    }
}

impl TryFrom<Vec<Field>> for MessageSchema {
    type Error = Error;

    fn try_from(value: Vec<Field>) -> Result<Self> {
        MessageSchema::new(&value)
    }
}
