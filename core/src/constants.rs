use std::sync::LazyLock;

use dashu::integer::UBig;

/// Size of a base field element in bytes
pub const FIELD_ELEMENT_SIZE: usize = 48;

/// Size of a compressed G1 point (public key)
pub const G1_COMPRESSED_SIZE: usize = FIELD_ELEMENT_SIZE;

/// Size of a compressed G2 point (signature)
pub const G2_COMPRESSED_SIZE: usize = 2 * FIELD_ELEMENT_SIZE;

/// Number of significant bits of a coordinate once the flag bits are masked
pub const COORDINATE_BITS: usize = 381;

// Leading byte layout: A | B | C | top five bits of the coordinate
pub const A_FLAG_MASK: u8 = 0b1000_0000;
pub const B_FLAG_MASK: u8 = 0b0100_0000;
pub const C_FLAG_MASK: u8 = 0b0010_0000;
pub const FLAGS_MASK: u8 = A_FLAG_MASK | B_FLAG_MASK | C_FLAG_MASK;
pub const COORDINATE_MASK: u8 = !FLAGS_MASK;

/// BLS12-381 base field modulus Q, big-endian
pub const MODULUS_BYTES: [u8; FIELD_ELEMENT_SIZE] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// BLS12-381 base field modulus Q
pub static MODULUS: LazyLock<UBig> = LazyLock::new(|| UBig::from_be_bytes(&MODULUS_BYTES));

/// Returns `Q - 1` as big-endian bytes, the largest coordinate a point may carry
pub fn modulus_minus_one_bytes() -> [u8; FIELD_ELEMENT_SIZE] {
    let mut bytes = MODULUS_BYTES;
    // Q is odd, so the last byte never borrows
    bytes[FIELD_ELEMENT_SIZE - 1] -= 1;
    bytes
}
