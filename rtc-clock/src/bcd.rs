//! Packed binary-coded decimal (BCD).
//!
//! The RTC stores every date/time field as two decimal digits in one byte, e.g. the value `12`
//! is stored as `0x12` rather than `0x0c`.

/// Conversion between packed BCD bytes and binary values.
#[derive(Debug, Clone, Copy)]
pub struct Bcd;

impl Bcd {
    /// Largest byte whose tens nibble is a decimal digit.
    const MAX_BYTE: u8 = 0x9F;

    /// Decodes a packed BCD byte into its binary value (0-99).
    ///
    /// Returns `None` when the byte is above `0x9F` or its units nibble is not a decimal digit.
    pub const fn decode(byte: u8) -> Option<u8> {
        if byte > Self::MAX_BYTE {
            return None;
        }

        let units = byte & 0x0F;
        if units > 9 {
            return None;
        }

        Some(10 * ((byte >> 4) & 0x0F) + units)
    }

    /// Encodes a binary value (0-99) as a packed BCD byte.
    pub const fn encode(value: u8) -> Option<u8> {
        if value > 99 {
            return None;
        }

        Some(((value / 10) << 4) | (value % 10))
    }
}
