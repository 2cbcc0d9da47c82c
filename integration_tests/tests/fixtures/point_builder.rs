use std::fmt::{Debug, Formatter};

use beacon_bls_core::{
    constants::{A_FLAG_MASK, B_FLAG_MASK, C_FLAG_MASK, MODULUS},
    encode_g1, encode_g2,
    flags::Flags,
    G1PointData, G2PointData, PointKind,
};
use dashu::integer::UBig;
use log::trace;

use crate::fixtures::TestResult;

/// Composes compressed point encodings flag by flag.
///
/// Starts from an all-zero encoding (no flags, zero coordinates) so each test
/// states exactly which bits it sets.
#[derive(Clone)]
pub struct PointBuilder {
    kind: PointKind,
    flags1: u8,
    x1: UBig,
    flags2: u8,
    x2: UBig,
}

impl Debug for PointBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PointBuilder({}, flags1={:#04x}, flags2={:#04x})",
            self.kind, self.flags1, self.flags2
        )
    }
}

impl PointBuilder {
    pub fn new(kind: PointKind) -> Self {
        Self {
            kind,
            flags1: 0,
            x1: UBig::ZERO,
            flags2: 0,
            x2: UBig::ZERO,
        }
    }

    pub fn g1() -> Self {
        Self::new(PointKind::G1)
    }

    pub fn g2() -> Self {
        Self::new(PointKind::G2)
    }

    /// The canonical point at infinity for this kind
    pub fn infinity(kind: PointKind) -> Self {
        Self::new(kind).compressed().at_infinity()
    }

    pub fn compressed(mut self) -> Self {
        self.flags1 |= C_FLAG_MASK;
        self
    }

    pub fn at_infinity(mut self) -> Self {
        self.flags1 |= B_FLAG_MASK;
        self
    }

    pub fn with_sign(mut self) -> Self {
        self.flags1 |= A_FLAG_MASK;
        self
    }

    /// Raw flag bits of the second G2 field
    pub fn flags2(mut self, bits: u8) -> Self {
        self.flags2 = bits;
        self
    }

    /// Sets `x` for G1 or `x1` for G2
    pub fn x(mut self, x: UBig) -> Self {
        self.x1 = x;
        self
    }

    pub fn x2(mut self, x2: UBig) -> Self {
        self.x2 = x2;
        self
    }

    /// Sets the coordinate to `Q + offset`
    pub fn x_modulus_plus(self, offset: i64) -> Self {
        let x = if offset >= 0 {
            MODULUS.clone() + UBig::from(offset.unsigned_abs())
        } else {
            MODULUS.clone() - UBig::from(offset.unsigned_abs())
        };
        self.x(x)
    }

    pub fn build(&self) -> TestResult<Vec<u8>> {
        let flags1 = Flags::from_bits(self.flags1)?;
        let bytes = match self.kind {
            PointKind::G1 => encode_g1(&G1PointData {
                flags: flags1,
                x: self.x1.clone(),
            })?
            .to_vec(),
            PointKind::G2 => encode_g2(&G2PointData {
                flags1,
                x1: self.x1.clone(),
                flags2: Flags::from_bits(self.flags2)?,
                x2: self.x2.clone(),
            })?
            .to_vec(),
        };
        trace!("built {:?}: {}", self, hex::encode(&bytes));
        Ok(bytes)
    }
}
