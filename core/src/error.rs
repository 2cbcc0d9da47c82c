use core::fmt;

use dashu::integer::UBig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::point::PointKind;

/// Coarse classification of why an encoding was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    LengthMismatch,
    FlagViolation,
    RangeViolation,
}

/// Names the coordinate a rule was violated on, as it appears in diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coordinate {
    X,
    X1,
    X2,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::X => f.write_str("x"),
            Coordinate::X1 => f.write_str("x1"),
            Coordinate::X2 => f.write_str("x2"),
        }
    }
}

/// Reason a compressed point encoding was rejected
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PointFormatError {
    #[error("unexpected length of encoded {kind}, should be {expected} got {actual}")]
    UnexpectedLength {
        kind: PointKind,
        expected: usize,
        actual: usize,
    },
    #[error("invalid flag2 value, should always be 0")]
    NonZeroFlags2,
    #[error("invalid c_flag, should always be 1 but got {0}")]
    InvalidCFlag(u8),
    #[error("invalid a_flag, should be 0 when b_flag == 1 but got {0}")]
    InvalidAFlag(u8),
    #[error("invalid {coordinate}, should be 0 when b_flag == 1 but got {value}")]
    NonZeroCoordinateAtInfinity { coordinate: Coordinate, value: UBig },
    #[error("invalid {0}, should be < Q")]
    CoordinateOutOfRange(Coordinate),
}

impl PointFormatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PointFormatError::UnexpectedLength { .. } => ErrorKind::LengthMismatch,
            PointFormatError::NonZeroFlags2
            | PointFormatError::InvalidCFlag(_)
            | PointFormatError::InvalidAFlag(_)
            | PointFormatError::NonZeroCoordinateAtInfinity { .. } => ErrorKind::FlagViolation,
            PointFormatError::CoordinateOutOfRange(_) => ErrorKind::RangeViolation,
        }
    }
}

/// Contract violations of the raw codec. These are caller bugs, not validation outcomes.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid input length: expected {expected} bytes, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },
    #[error("coordinate does not fit in 381 bits")]
    CoordinateOverflow,
    #[error("flag value carries bits outside of the flag positions")]
    InvalidFlagBits,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BlsCodecError {
    #[error("invalid point encoding: {0}")]
    InvalidPoint(#[from] PointFormatError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("invalid hex encoding")]
    InvalidHex,
}
