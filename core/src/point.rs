use core::fmt;

use dashu::integer::UBig;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{G1_COMPRESSED_SIZE, G2_COMPRESSED_SIZE},
    flags::Flags,
};

/// The group a compressed point belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointKind {
    /// Public keys
    G1,
    /// Signatures
    G2,
}

impl PointKind {
    pub const fn encoded_size(&self) -> usize {
        match self {
            PointKind::G1 => G1_COMPRESSED_SIZE,
            PointKind::G2 => G2_COMPRESSED_SIZE,
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointKind::G1 => f.write_str("G1"),
            PointKind::G2 => f.write_str("G2"),
        }
    }
}

/// Decoded layout of a compressed G1 point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct G1PointData {
    pub flags: Flags,
    pub x: UBig,
}

impl G1PointData {
    pub fn is_infinity(&self) -> bool {
        self.flags.b_flag() == 1
    }
}

/// Decoded layout of a compressed G2 point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct G2PointData {
    pub flags1: Flags,
    pub x1: UBig,
    /// Reserved, a well formed encoding leaves it zero
    pub flags2: Flags,
    pub x2: UBig,
}

impl G2PointData {
    pub fn is_infinity(&self) -> bool {
        self.flags1.b_flag() == 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointData {
    G1(G1PointData),
    G2(G2PointData),
}

impl PointData {
    pub fn kind(&self) -> PointKind {
        match self {
            PointData::G1(_) => PointKind::G1,
            PointData::G2(_) => PointKind::G2,
        }
    }

    pub fn is_infinity(&self) -> bool {
        match self {
            PointData::G1(data) => data.is_infinity(),
            PointData::G2(data) => data.is_infinity(),
        }
    }
}

impl From<G1PointData> for PointData {
    fn from(data: G1PointData) -> Self {
        PointData::G1(data)
    }
}

impl From<G2PointData> for PointData {
    fn from(data: G2PointData) -> Self {
        PointData::G2(data)
    }
}
