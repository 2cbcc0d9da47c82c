//! Bit layout of compressed BLS12-381 points.
//!
//! A compressed coordinate is 48 big-endian bytes. The three most significant
//! bits of the first byte are flags, the remaining 381 bits are the
//! coordinate. A G2 point is two such fields back to back; the flag bits of
//! the second field are reserved.
//!
//! Nothing here checks protocol rules, see [`crate::validator`] for that.

use dashu::{base::BitTest, integer::UBig};

use crate::{
    constants::{
        COORDINATE_BITS, COORDINATE_MASK, FIELD_ELEMENT_SIZE, G1_COMPRESSED_SIZE,
        G2_COMPRESSED_SIZE,
    },
    error::CodecError,
    flags::Flags,
    point::{G1PointData, G2PointData, PointData, PointKind},
};

// =============================================================================
// DECODING
// =============================================================================

/// Splits one 48 byte field into its flag bits and coordinate
fn decode_field(field: &[u8; FIELD_ELEMENT_SIZE]) -> (Flags, UBig) {
    let flags = Flags::from_leading_byte(field[0]);
    let mut masked = *field;
    masked[0] &= COORDINATE_MASK;
    (flags, UBig::from_be_bytes(&masked))
}

fn split_halves(
    bytes: &[u8; G2_COMPRESSED_SIZE],
) -> ([u8; FIELD_ELEMENT_SIZE], [u8; FIELD_ELEMENT_SIZE]) {
    let mut first = [0u8; FIELD_ELEMENT_SIZE];
    let mut second = [0u8; FIELD_ELEMENT_SIZE];
    first.copy_from_slice(&bytes[..FIELD_ELEMENT_SIZE]);
    second.copy_from_slice(&bytes[FIELD_ELEMENT_SIZE..]);
    (first, second)
}

pub fn decode_g1(bytes: &[u8; G1_COMPRESSED_SIZE]) -> G1PointData {
    let (flags, x) = decode_field(bytes);
    G1PointData { flags, x }
}

pub fn decode_g2(bytes: &[u8; G2_COMPRESSED_SIZE]) -> G2PointData {
    let (first, second) = split_halves(bytes);
    let (flags1, x1) = decode_field(&first);
    let (flags2, x2) = decode_field(&second);
    G2PointData {
        flags1,
        x1,
        flags2,
        x2,
    }
}

/// Decodes a point of the given kind from a byte slice.
///
/// A slice of the wrong length is a caller error reported as
/// [`CodecError::InvalidInputLength`]; use the validator for untrusted input.
pub fn decode(kind: PointKind, bytes: &[u8]) -> Result<PointData, CodecError> {
    let length_error = || CodecError::InvalidInputLength {
        expected: kind.encoded_size(),
        actual: bytes.len(),
    };
    match kind {
        PointKind::G1 => {
            let bytes: &[u8; G1_COMPRESSED_SIZE] =
                bytes.try_into().map_err(|_| length_error())?;
            Ok(decode_g1(bytes).into())
        }
        PointKind::G2 => {
            let bytes: &[u8; G2_COMPRESSED_SIZE] =
                bytes.try_into().map_err(|_| length_error())?;
            Ok(decode_g2(bytes).into())
        }
    }
}

// =============================================================================
// ENCODING
// =============================================================================

fn encode_field(
    flags: Flags,
    coordinate: &UBig,
) -> Result<[u8; FIELD_ELEMENT_SIZE], CodecError> {
    if coordinate.bit_len() > COORDINATE_BITS {
        return Err(CodecError::CoordinateOverflow);
    }

    let mut field = [0u8; FIELD_ELEMENT_SIZE];
    let coordinate_bytes = coordinate.to_be_bytes();
    // pad to 48 bytes
    let pad = FIELD_ELEMENT_SIZE - coordinate_bytes.len();
    field[pad..].copy_from_slice(&coordinate_bytes);
    field[0] |= flags.bits();
    Ok(field)
}

/// Lays out G1 point data as its 48 byte compressed encoding
pub fn encode_g1(data: &G1PointData) -> Result<[u8; G1_COMPRESSED_SIZE], CodecError> {
    encode_field(data.flags, &data.x)
}

/// Lays out G2 point data as its 96 byte compressed encoding
pub fn encode_g2(data: &G2PointData) -> Result<[u8; G2_COMPRESSED_SIZE], CodecError> {
    let mut bytes = [0u8; G2_COMPRESSED_SIZE];
    bytes[..FIELD_ELEMENT_SIZE].copy_from_slice(&encode_field(data.flags1, &data.x1)?);
    bytes[FIELD_ELEMENT_SIZE..].copy_from_slice(&encode_field(data.flags2, &data.x2)?);
    Ok(bytes)
}
