//! Property tests for the pack/unpack round-trip law.

use bitmessage::{Error, Field, FieldSpec, Message, MessageSchema};
use proptest::prelude::*;

fn value_for(bit_width: u64, signed: bool) -> impl Strategy<Value = i64> {
    let spec = FieldSpec::new("v", bit_width, signed).unwrap();
    let min = spec.min_value() as i64;
    let max = spec.max_value().min(i64::MAX as i128) as i64;
    min..=max
}

fn field_with_value() -> impl Strategy<Value = (u64, bool, i64)> {
    (1u64..=64, any::<bool>()).prop_flat_map(|(bit_width, signed)| {
        value_for(bit_width, signed).prop_map(move |v| (bit_width, signed, v))
    })
}

#[test]
fn test_above_max_rejected_for_62_bit_unsigned() {
    let schema = MessageSchema::new(&[Field::unsigned("f", 62)]).unwrap();
    let mut message = Message::new(&schema);
    message.set_field("f", i64::MAX >> 1).unwrap();
    assert!(matches!(
        message.set_field("f", (i64::MAX >> 1) + 1),
        Err(Error::ValueOutOfRange { .. })
    ));
}

proptest! {
    #[test]
    fn unpack_of_pack_reproduces_values(entries in prop::collection::vec(field_with_value(), 0..24)) {
        let fields: Vec<Field> = entries
            .iter()
            .enumerate()
            .map(|(i, &(bit_width, signed, _))| Field::new(format!("f{i}"), bit_width, signed))
            .collect();
        let schema = MessageSchema::new(&fields).unwrap();

        let mut message = Message::new(&schema);
        for (i, &(_, _, value)) in entries.iter().enumerate() {
            message.set_field(&format!("f{i}"), value).unwrap();
        }

        let packed = message.pack();
        prop_assert_eq!(packed.len(), schema.byte_length());

        // Start from non-zero values so every field must be overwritten.
        let mut decoded = Message::new(&schema);
        for field in schema.fields() {
            let filler = if field.is_signed() { field.min_value() } else { field.max_value() };
            decoded
                .set_field(field.name(), filler.min(i64::MAX as i128) as i64)
                .unwrap();
        }
        decoded.unpack(&packed).unwrap();
        for (i, &(_, _, value)) in entries.iter().enumerate() {
            prop_assert_eq!(decoded.get_field(&format!("f{i}")).unwrap(), value);
        }

        // Packing the decoded message yields the identical wire bytes.
        prop_assert_eq!(decoded.pack(), packed);
    }

    #[test]
    fn trailing_bytes_are_ignored(
        (bit_width, signed, value) in field_with_value(),
        extra in prop::collection::vec(any::<u8>(), 1..8),
    ) {
        let schema = MessageSchema::new(&[Field::new("f", bit_width, signed)]).unwrap();
        let mut message = Message::new(&schema);
        message.set_field("f", value).unwrap();

        let mut buffer = message.pack();
        buffer.extend_from_slice(&extra);

        let mut decoded = Message::new(&schema);
        decoded.unpack(&buffer).unwrap();
        prop_assert_eq!(decoded.get_field("f").unwrap(), value);
    }

    #[test]
    fn out_of_range_values_are_rejected(bit_width in 1u64..=64, signed in any::<bool>()) {
        let spec = FieldSpec::new("f", bit_width, signed).unwrap();
        let schema = MessageSchema::new(&[Field::new("f", bit_width, signed)]).unwrap();
        let mut message = Message::new(&schema);

        // Bounds of the widest fields have no out-of-range i64 neighbour.
        if let Ok(above) = i64::try_from(spec.max_value() + 1) {
            prop_assert!(matches!(
                message.set_field("f", above),
                Err(Error::ValueOutOfRange { .. })
            ), "expected ValueOutOfRange for above-range value");
        }
        if let Ok(below) = i64::try_from(spec.min_value() - 1) {
            prop_assert!(matches!(
                message.set_field("f", below),
                Err(Error::ValueOutOfRange { .. })
            ), "expected ValueOutOfRange for below-range value");
        }
        prop_assert_eq!(message.get_field("f").unwrap(), 0);
    }
}
