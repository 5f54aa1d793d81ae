//! Low-level bit read and write utilities for byte slices.
//!
//! Bits are addressed in LSB-first order: bit 0 is the low bit of the first byte,
//! bit 8 is the low bit of the second byte, and so on.

use crate::errors::BitError;

/// Number of bytes needed to hold `bits` bits.
pub fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Mask covering the low `bits` bits. Widths of 64 and above yield all ones.
pub fn mask(bits: usize) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Reads a single bit at `bit_pos` (0 = LSB of first byte). Returns 0 or 1.
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> Result<u8, BitError> {
    let byte = data.get(bit_pos / 8).ok_or(BitError::OutOfBounds)?;
    Ok((byte >> (bit_pos % 8)) & 1)
}

fn check_range(data_len: usize, bit_pos: usize, n: usize) -> Result<(), BitError> {
    if n > 64 {
        return Err(BitError::TooManyBits);
    }

    if bit_pos
        .checked_add(n)
        .is_none_or(|end| end > data_len * 8)
    {
        return Err(BitError::OutOfBounds);
    }

    Ok(())
}

/// Reads `n` bits starting at `bit_pos` as an unsigned value (max 64 bits).
///
/// Bit `b` of the result comes from overall position `bit_pos + b`.
pub fn read_bits_at(data: &[u8], bit_pos: usize, n: usize) -> Result<u64, BitError> {
    check_range(data.len(), bit_pos, n)?;
    Ok(get_bits(data, bit_pos, n))
}

/// Writes the low `n` bits of `value` starting at `bit_pos` (max 64 bits).
///
/// Bit `b` of `value` lands at overall position `bit_pos + b`. Bits outside the
/// range are left untouched.
pub fn write_bits_at(data: &mut [u8], bit_pos: usize, n: usize, value: u64) -> Result<(), BitError> {
    check_range(data.len(), bit_pos, n)?;
    set_bits(data, bit_pos, n, value);
    Ok(())
}

/// Unchecked form of [read_bits_at] for callers that validated the range up front.
///
/// # Panics
///
/// Panics if the range extends past the end of `data`.
pub fn get_bits(data: &[u8], bit_pos: usize, n: usize) -> u64 {
    debug_assert!(n <= 64);

    let mut value = 0u64;
    for b in 0..n {
        let pos = bit_pos + b;
        let bit = ((data[pos / 8] >> (pos % 8)) & 1) as u64;
        value |= bit << b;
    }

    value
}

/// Unchecked form of [write_bits_at] for callers that sized `data` up front.
///
/// # Panics
///
/// Panics if the range extends past the end of `data`.
pub fn set_bits(data: &mut [u8], bit_pos: usize, n: usize, value: u64) {
    debug_assert!(n <= 64);

    for b in 0..n {
        let pos = bit_pos + b;
        let bit_mask = 1u8 << (pos % 8);
        if (value >> b) & 1 == 1 {
            data[pos / 8] |= bit_mask;
        } else {
            data[pos / 8] &= !bit_mask;
        }
    }
}

/// Sign-extends the low `bits` of `value` to a full `i64`. `bits` must be in 1..=64.
pub fn sign_extend(value: u64, bits: usize) -> i64 {
    debug_assert!((1..=64).contains(&bits));
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}
