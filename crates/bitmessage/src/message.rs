//! Message: field values bound to a schema, packed to and unpacked from bytes.

use tracing::trace;

use crate::{
    bits,
    errors::{Error, Result},
    schema::MessageSchema,
};

/// Field values for one message, one `i64` per field in schema order.
///
/// Borrows its [MessageSchema]; the schema must outlive every message built on it.
/// Not synchronized: share a single message across threads only behind a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<'a> {
    schema: &'a MessageSchema,
    values: Vec<i64>,
}

impl<'a> Message<'a> {
    /// Creates a message with every field set to 0.
    pub fn new(schema: &'a MessageSchema) -> Self {
        Self {
            schema,
            values: vec![0; schema.len()],
        }
    }

    /// Schema this message is bound to.
    pub fn schema(&self) -> &'a MessageSchema {
        self.schema
    }

    /// Sets `name` to `value`. The stored value is untouched on failure.
    pub fn set_field(&mut self, name: &str, value: i64) -> Result<()> {
        let index = self.schema.index_of(name)?;
        let field = &self.schema.fields()[index];

        if !field.is_valid_value(value) {
            return Err(Error::ValueOutOfRange {
                field: name.to_string(),
                value,
                min: field.min_value(),
                max: field.max_value(),
            });
        }

        self.values[index] = value;
        Ok(())
    }

    /// Stored value of `name`, exactly as last set or unpacked.
    pub fn get_field(&self, name: &str) -> Result<i64> {
        let index = self.schema.index_of(name)?;
        Ok(self.values[index])
    }

    /// `(name, value)` pairs in schema order.
    pub fn values(&self) -> impl Iterator<Item = (&'a str, i64)> + '_ {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name())
            .zip(self.values.iter().copied())
    }

    /// Resets every field to 0.
    pub fn clear(&mut self) {
        self.values.fill(0);
    }

    /// Packs all fields into `schema.byte_length()` bytes.
    ///
    /// Fields are laid out contiguously in schema order, LSB-first, each value
    /// truncated to its width (negative values become their two's complement
    /// bit pattern).
    pub fn pack(&self) -> Vec<u8> {
        let mut buffer = vec![0u8; self.schema.byte_length()];
        let mut cursor = 0;

        for (field, &value) in self.schema.fields().iter().zip(&self.values) {
            let width = field.bit_width();
            let raw = (value as u64) & bits::mask(width);

            // Buffer is sized from the same widths, so the range always fits.
            bits::set_bits(&mut buffer, cursor, width, raw);
            cursor += width;
        }

        trace!(bytes = buffer.len(), "packed message");
        buffer
    }

    /// Replaces every field value with the one decoded from `buffer`.
    ///
    /// Bytes beyond `schema.byte_length()` are ignored. Fails before touching
    /// any value if the buffer is too short.
    pub fn unpack(&mut self, buffer: &[u8]) -> Result<()> {
        let required = self.schema.byte_length();
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: buffer.len(),
            });
        }

        let mut decoded = Vec::with_capacity(self.values.len());
        let mut cursor = 0;

        for field in self.schema.fields() {
            let width = field.bit_width();
            // Length was checked against the summed widths above.
            let raw = bits::get_bits(buffer, cursor, width);

            let value = if field.is_signed() {
                bits::sign_extend(raw, width)
            } else {
                raw as i64
            };

            decoded.push(value);
            cursor += width;
        }

        self.values = decoded;
        trace!(bytes = required, "unpacked message");
        Ok(())
    }
}
