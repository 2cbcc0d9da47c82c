pub mod bls;
pub mod codec;
pub mod constants;
pub mod error;
pub mod flags;
pub mod point;
pub mod validator;

pub use crate::{
    bls::{BlsPublicKey, BlsSignature},
    codec::{decode, decode_g1, decode_g2, encode_g1, encode_g2},
    error::{BlsCodecError, CodecError, ErrorKind, PointFormatError},
    point::{G1PointData, G2PointData, PointData, PointKind},
    validator::{validate, validate_g1, validate_g2, ValidationResult},
};
