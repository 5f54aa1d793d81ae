//! Field descriptions and their validated form.

use crate::errors::{Error, SchemaError};

/// Largest supported field width in bits.
pub const MAX_BIT_WIDTH: u64 = 64;

/// Unvalidated description of a single field, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Name used to get and set the field's value.
    pub name: String,
    /// Number of bits the field occupies on the wire.
    pub bit_width: u64,
    /// If true, values are two's complement and sign-extended on unpack.
    pub signed: bool,
}

impl Field {
    /// Describes a field; validation happens when a schema is built.
    pub fn new(name: impl Into<String>, bit_width: u64, signed: bool) -> Self {
        Field {
            name: name.into(),
            bit_width,
            signed,
        }
    }

    pub fn unsigned(name: impl Into<String>, bit_width: u64) -> Self {
        Self::new(name, bit_width, false)
    }

    pub fn signed(name: impl Into<String>, bit_width: u64) -> Self {
        Self::new(name, bit_width, true)
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            name: value.name,
            bit_width: value.bit_width,
            signed: value.signed,
        }
    }
}

/// A validated field: non-empty name and a width in `1..=64`.
///
/// Immutable once built. Value bounds are returned as `i128` so that the
/// closed-form bounds of 64-bit fields are exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    bit_width: usize,
    signed: bool,
}

impl FieldSpec {
    /// Validates and builds a field. Fails on an empty name or a width of 0 or over 64.
    pub fn new(name: impl Into<String>, bit_width: u64, signed: bool) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(SchemaError::EmptyFieldName.into());
        }

        if bit_width == 0 || bit_width > MAX_BIT_WIDTH {
            return Err(SchemaError::InvalidFieldWidth { name, bit_width }.into());
        }

        Ok(FieldSpec {
            name,
            bit_width: bit_width as usize,
            signed,
        })
    }

    /// Name used to get and set the field's value.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in bits, always in `1..=64`.
    pub fn bit_width(&self) -> usize {
        self.bit_width
    }

    /// Whether values are two's complement.
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Smallest accepted value: `0` for unsigned, `-2^(w-1)` for signed.
    pub fn min_value(&self) -> i128 {
        if self.signed {
            -(1i128 << (self.bit_width - 1))
        } else {
            0
        }
    }

    /// Largest accepted value: `2^w - 1` for unsigned, `2^(w-1) - 1` for signed.
    pub fn max_value(&self) -> i128 {
        if self.signed {
            (1i128 << (self.bit_width - 1)) - 1
        } else {
            (1i128 << self.bit_width) - 1
        }
    }

    /// Returns true if `value` lies within `[min_value, max_value]`.
    pub fn is_valid_value(&self, value: i64) -> bool {
        let value = value as i128;
        self.min_value() <= value && value <= self.max_value()
    }
}

impl TryFrom<&Field> for FieldSpec {
    type Error = Error;

    fn try_from(value: &Field) -> Result<Self, Self::Error> {
        FieldSpec::new(value.name.clone(), value.bit_width, value.signed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_width() {
        assert_eq!(
            FieldSpec::new("f", 0, false).unwrap_err(),
            Error::InvalidSchema(SchemaError::InvalidFieldWidth {
                name: "f".to_string(),
                bit_width: 0
            })
        );
    }

    #[test]
    fn test_rejects_width_over_64() {
        assert!(matches!(
            FieldSpec::new("f", 65, true),
            Err(Error::InvalidSchema(SchemaError::InvalidFieldWidth { bit_width: 65, .. }))
        ));
        assert!(FieldSpec::new("f", 64, true).is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(
            FieldSpec::new("", 8, false).unwrap_err(),
            Error::InvalidSchema(SchemaError::EmptyFieldName)
        );
    }

    #[test]
    fn test_bounds_match_closed_form() {
        for width in 1..=64u64 {
            let unsigned = FieldSpec::new("u", width, false).unwrap();
            assert_eq!(unsigned.min_value(), 0);
            assert_eq!(unsigned.max_value(), 2i128.pow(width as u32) - 1);

            let signed = FieldSpec::new("s", width, true).unwrap();
            assert_eq!(signed.min_value(), -(2i128.pow(width as u32 - 1)));
            assert_eq!(signed.max_value(), 2i128.pow(width as u32 - 1) - 1);
        }
    }

    #[test]
    fn test_is_valid_value() {
        let field = FieldSpec::new("value", 8, true).unwrap();
        assert!(field.is_valid_value(127));
        assert!(field.is_valid_value(-128));
        assert!(!field.is_valid_value(128));
        assert!(!field.is_valid_value(-129));

        let status = FieldSpec::new("status", 2, false).unwrap();
        assert!(status.is_valid_value(3));
        assert!(!status.is_valid_value(4));
        assert!(!status.is_valid_value(-1));
    }

    #[test]
    fn test_64_bit_fields() {
        let signed = FieldSpec::new("s", 64, true).unwrap();
        assert!(signed.is_valid_value(i64::MIN));
        assert!(signed.is_valid_value(i64::MAX));

        let unsigned = FieldSpec::new("u", 64, false).unwrap();
        assert_eq!(unsigned.max_value(), u64::MAX as i128);
        assert!(unsigned.is_valid_value(i64::MAX));
        assert!(!unsigned.is_valid_value(-1));
    }

    #[test]
    fn test_try_from_field() {
        let spec = FieldSpec::try_from(&Field::signed("temperature", 12)).unwrap();
        assert_eq!(spec.name(), "temperature");
        assert_eq!(spec.bit_width(), 12);
        assert!(spec.is_signed());
    }
}
