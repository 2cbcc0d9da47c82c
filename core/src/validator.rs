//! Protocol rules for compressed point encodings.
//!
//! An encoding is accepted only when
//! - its length is exactly 48 bytes (G1) or 96 bytes (G2),
//! - the c_flag is set,
//! - a point at infinity (b_flag set) has a zero a_flag and all-zero coordinates,
//! - every coordinate is strictly below the field modulus Q,
//! - for G2, the reserved second flag bits are zero.
//!
//! Rejections are ordinary results, never panics: malformed points are
//! expected traffic.

use dashu::integer::UBig;
use log::{debug, trace};

use crate::{
    codec::{decode_g1, decode_g2},
    constants::{G1_COMPRESSED_SIZE, G2_COMPRESSED_SIZE, MODULUS},
    error::{Coordinate, PointFormatError},
    flags::Flags,
    point::PointKind,
};

/// Outcome of validating an encoded point
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(PointFormatError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Diagnostic text, empty for a valid point
    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => String::new(),
            ValidationResult::Invalid(err) => err.to_string(),
        }
    }

    pub fn error(&self) -> Option<&PointFormatError> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<(), PointFormatError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(err) => Err(err),
        }
    }
}

impl From<Result<(), PointFormatError>> for ValidationResult {
    fn from(result: Result<(), PointFormatError>) -> Self {
        match result {
            Ok(()) => ValidationResult::Valid,
            Err(err) => ValidationResult::Invalid(err),
        }
    }
}

// =============================================================================
// RULES
// =============================================================================

fn length_error(kind: PointKind, actual: usize) -> PointFormatError {
    PointFormatError::UnexpectedLength {
        kind,
        expected: kind.encoded_size(),
        actual,
    }
}

fn check_c_flag(flags: Flags) -> Result<(), PointFormatError> {
    if flags.c_flag() != 1 {
        return Err(PointFormatError::InvalidCFlag(flags.c_flag()));
    }
    Ok(())
}

/// The point at infinity has exactly one encoding: a_flag clear, coordinates zero
fn check_infinity(
    flags: Flags,
    coordinates: &[(Coordinate, &UBig)],
) -> Result<(), PointFormatError> {
    if flags.b_flag() != 1 {
        return Ok(());
    }
    if flags.a_flag() != 0 {
        return Err(PointFormatError::InvalidAFlag(flags.a_flag()));
    }
    for (coordinate, value) in coordinates {
        if **value != UBig::ZERO {
            return Err(PointFormatError::NonZeroCoordinateAtInfinity {
                coordinate: *coordinate,
                value: (*value).clone(),
            });
        }
    }
    Ok(())
}

// Strict: x == Q is out of range
fn check_range(coordinate: Coordinate, value: &UBig) -> Result<(), PointFormatError> {
    if *value >= *MODULUS {
        return Err(PointFormatError::CoordinateOutOfRange(coordinate));
    }
    Ok(())
}

fn check_g1(encoded: &[u8]) -> Result<(), PointFormatError> {
    let bytes: &[u8; G1_COMPRESSED_SIZE] = encoded
        .try_into()
        .map_err(|_| length_error(PointKind::G1, encoded.len()))?;
    let data = decode_g1(bytes);

    check_c_flag(data.flags)?;
    check_infinity(data.flags, &[(Coordinate::X, &data.x)])?;
    check_range(Coordinate::X, &data.x)
}

fn check_g2(encoded: &[u8]) -> Result<(), PointFormatError> {
    let bytes: &[u8; G2_COMPRESSED_SIZE] = encoded
        .try_into()
        .map_err(|_| length_error(PointKind::G2, encoded.len()))?;
    let data = decode_g2(bytes);

    if !data.flags2.is_zero() {
        return Err(PointFormatError::NonZeroFlags2);
    }
    check_c_flag(data.flags1)?;
    check_infinity(
        data.flags1,
        &[(Coordinate::X1, &data.x1), (Coordinate::X2, &data.x2)],
    )?;
    check_range(Coordinate::X1, &data.x1)?;
    check_range(Coordinate::X2, &data.x2)
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

fn report(kind: PointKind, result: Result<(), PointFormatError>) -> ValidationResult {
    match &result {
        Ok(()) => trace!("accepted {} point encoding", kind),
        Err(err) => debug!("rejected {} point encoding: {}", kind, err),
    }
    result.into()
}

/// Validates a compressed G1 point (public key) encoding
pub fn validate_g1(encoded: &[u8]) -> ValidationResult {
    report(PointKind::G1, check_g1(encoded))
}

/// Validates a compressed G2 point (signature) encoding
pub fn validate_g2(encoded: &[u8]) -> ValidationResult {
    report(PointKind::G2, check_g2(encoded))
}

pub fn validate(kind: PointKind, encoded: &[u8]) -> ValidationResult {
    match kind {
        PointKind::G1 => validate_g1(encoded),
        PointKind::G2 => validate_g2(encoded),
    }
}
