//! Fixed-size kinds: byte arrays and structs of fixed-size members.
//!
//! Their encoding is the raw concatenation of their bytes; there is no header and no
//! forward-compatibility concept, so the only check is the exact length.

use ckbsdk_common::{Result, error::Error};

/// Verifies that `slice` has exactly `size` bytes.
#[inline]
pub fn verify_fixed(name: &str, slice: &[u8], size: usize) -> Result<()> {
    if slice.len() == size {
        Ok(())
    } else {
        log::debug!("{name}: expected {size} bytes, found {}", slice.len());
        Err(Error::size_mismatch(name, size, slice.len()))
    }
}

/// Offset of member `index` within a struct whose members have the given sizes.
pub const fn member_offset(sizes: &[usize], index: usize) -> usize {
    let mut offset = 0;
    let mut i = 0;
    while i < index {
        offset += sizes[i];
        i += 1;
    }
    offset
}

/// Total size of a struct whose members have the given sizes.
pub const fn struct_size(sizes: &[usize]) -> usize {
    member_offset(sizes, sizes.len())
}
