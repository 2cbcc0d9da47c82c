use crate::{
    constants::{A_FLAG_MASK, B_FLAG_MASK, C_FLAG_MASK, FLAGS_MASK},
    error::CodecError,
};

/// The three flag bits carried in the leading byte of a compressed coordinate.
///
/// Only the top three bits are ever set; the coordinate bits of the leading
/// byte are stripped on construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    pub const ZERO: Flags = Flags(0);

    /// Extracts the flag bits from the leading byte of an encoding
    pub const fn from_leading_byte(byte: u8) -> Self {
        Self(byte & FLAGS_MASK)
    }

    /// Builds flags from bits already in leading-byte position. Any coordinate
    /// bit set in `bits` is rejected.
    pub fn from_bits(bits: u8) -> Result<Self, CodecError> {
        if bits & !FLAGS_MASK != 0 {
            return Err(CodecError::InvalidFlagBits);
        }
        Ok(Self(bits))
    }

    pub const fn new(a_flag: bool, b_flag: bool, c_flag: bool) -> Self {
        let mut bits = 0;
        if a_flag {
            bits |= A_FLAG_MASK;
        }
        if b_flag {
            bits |= B_FLAG_MASK;
        }
        if c_flag {
            bits |= C_FLAG_MASK;
        }
        Self(bits)
    }

    /// Sign bit of the omitted y coordinate
    pub const fn a_flag(&self) -> u8 {
        (self.0 & A_FLAG_MASK != 0) as u8
    }

    /// Point-at-infinity bit
    pub const fn b_flag(&self) -> u8 {
        (self.0 & B_FLAG_MASK != 0) as u8
    }

    /// Compression bit
    pub const fn c_flag(&self) -> u8 {
        (self.0 & C_FLAG_MASK != 0) as u8
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Flag bits in their leading-byte positions
    pub const fn bits(&self) -> u8 {
        self.0
    }
}
