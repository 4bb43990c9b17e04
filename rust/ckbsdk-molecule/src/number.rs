//! The `Number` primitive: the 4-byte little-endian unsigned integer used for every
//! size, offset and item-count word of the format.

use byteorder::{ByteOrder, LE};

/// Width of every size/offset word (the header unit).
pub const NUMBER_SIZE: usize = std::mem::size_of::<u32>();

/// Encodes `n` as a little-endian `Number`.
#[inline]
pub fn pack_number(n: u32) -> [u8; NUMBER_SIZE] {
    let mut buf = [0u8; NUMBER_SIZE];
    LE::write_u32(&mut buf, n);
    buf
}

/// Decodes the `Number` at the start of `bytes`.
///
/// The caller must have checked that at least [`NUMBER_SIZE`] bytes are available.
#[inline]
pub fn unpack_number(bytes: &[u8]) -> u32 {
    LE::read_u32(&bytes[..NUMBER_SIZE])
}

/// Same as [`unpack_number`], widened to `usize` for slicing arithmetic.
#[inline]
pub(crate) fn unpack_len(bytes: &[u8]) -> usize {
    unpack_number(bytes) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_layout() {
        assert_eq!(pack_number(167), [167, 0, 0, 0]);
        assert_eq!(pack_number(0x0403_0201), [1, 2, 3, 4]);
        assert_eq!(unpack_number(&[20, 0, 0, 0, 0xff]), 20);
        assert_eq!(unpack_number(&pack_number(u32::MAX)), u32::MAX);
    }
}
