//! Typed BLS fields carried by beacon chain objects.
//!
//! Deposit inputs carry a [`BlsPublicKey`]; block proposer signatures and
//! aggregated attestation and slashing signatures carry a [`BlsSignature`].
//! Every constructor runs the point validator, so holding one of these values
//! means its encoding passed the format rules. Curve membership and signature
//! checks remain with the curve arithmetic library.

use core::{fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{
    codec::{decode_g1, decode_g2},
    constants::{B_FLAG_MASK, C_FLAG_MASK, G1_COMPRESSED_SIZE, G2_COMPRESSED_SIZE},
    error::{BlsCodecError, CodecError},
    point::{G1PointData, G2PointData, PointKind},
    validator::validate,
};

const fn infinity_encoding<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    bytes[0] = B_FLAG_MASK | C_FLAG_MASK;
    bytes
}

macro_rules! impl_bls_field {
    (
        TYPE = $type:ident,
        KIND = $kind:expr,
        SIZE = $size:ident,
        DATA = $data:ty,
        DECODE = $decode:path
    ) => {
        impl $type {
            /// Canonical encoding of the point at infinity
            pub const INFINITY: $type = $type(infinity_encoding::<$size>());

            pub fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            pub fn to_bytes(self) -> [u8; $size] {
                self.0
            }

            /// Flag bits and coordinates of the encoding
            pub fn decode(&self) -> $data {
                $decode(&self.0)
            }

            pub fn is_infinity(&self) -> bool {
                self.0[0] & B_FLAG_MASK != 0
            }
        }

        impl TryFrom<[u8; $size]> for $type {
            type Error = BlsCodecError;

            fn try_from(bytes: [u8; $size]) -> Result<Self, Self::Error> {
                validate($kind, &bytes).into_result()?;
                Ok($type(bytes))
            }
        }

        impl TryFrom<&[u8]> for $type {
            type Error = BlsCodecError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                validate($kind, bytes).into_result()?;
                let mut array = [0u8; $size];
                array.copy_from_slice(bytes);
                Ok($type(array))
            }
        }

        impl TryFrom<Vec<u8>> for $type {
            type Error = BlsCodecError;

            fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
                $type::try_from(bytes.as_slice())
            }
        }

        impl From<$type> for [u8; $size] {
            fn from(value: $type) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $type {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl FromStr for $type {
            type Err = BlsCodecError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix("0x").unwrap_or(s);
                if digits.len() != 2 * $size {
                    return Err(CodecError::InvalidInputLength {
                        expected: $size,
                        actual: digits.len() / 2,
                    }
                    .into());
                }
                let mut bytes = [0u8; $size];
                hex::decode_to_slice(digits, &mut bytes).map_err(|_| BlsCodecError::InvalidHex)?;
                $type::try_from(bytes)
            }
        }
    };
}

/// A validated compressed G1 point: a validator public key
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
#[repr(transparent)]
pub struct BlsPublicKey([u8; G1_COMPRESSED_SIZE]);

/// A validated compressed G2 point: a (possibly aggregated) signature
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
#[repr(transparent)]
pub struct BlsSignature([u8; G2_COMPRESSED_SIZE]);

impl_bls_field!(
    TYPE = BlsPublicKey,
    KIND = PointKind::G1,
    SIZE = G1_COMPRESSED_SIZE,
    DATA = G1PointData,
    DECODE = decode_g1
);

impl_bls_field!(
    TYPE = BlsSignature,
    KIND = PointKind::G2,
    SIZE = G2_COMPRESSED_SIZE,
    DATA = G2PointData,
    DECODE = decode_g2
);
