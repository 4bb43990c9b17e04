//! Vectors.
//!
//! * A fixed vector holds items of one fixed-size type: `[item_count][item_0]...[item_n-1]`.
//! * A dynamic vector holds items of a variable-size type behind the same size word and
//!   offset table as a table; the empty vector is the bare size word `[4, 0, 0, 0]`.

use std::io::{self, Write};

use byteorder::{LE, WriteBytesExt};
use ckbsdk_common::{Result, error::Error};

use crate::number::{NUMBER_SIZE, unpack_len};
use crate::table::{self, VerifyFn, read_header, verify_offsets};

/// Verifies a fixed vector of `item_size`-byte items.
///
/// Fixed-size items carry no structure of their own, so the length check covers them.
pub fn verify_fixvec(name: &str, slice: &[u8], item_size: usize) -> Result<()> {
    let len = slice.len();
    if len < NUMBER_SIZE {
        log::debug!("{name}: {len} bytes cannot hold the item count");
        return Err(Error::header_too_short(name, len, NUMBER_SIZE));
    }
    let item_count = unpack_len(slice);
    let expected = item_count
        .checked_mul(item_size)
        .and_then(|n| n.checked_add(NUMBER_SIZE));
    match expected {
        Some(expected) if expected == len => Ok(()),
        _ => {
            log::debug!("{name}: {item_count} items of {item_size} bytes do not fill {len} bytes");
            Err(Error::total_size_mismatch(
                name,
                expected.unwrap_or(usize::MAX),
                len,
            ))
        }
    }
}

/// Length of a fixed vector encoding.
#[inline]
pub const fn fixvec_len(item_count: usize, item_size: usize) -> usize {
    NUMBER_SIZE + item_count * item_size
}

/// Writes a fixed vector of `item_count` items whose encodings are concatenated in `data`.
pub fn write_fixvec<W: Write>(writer: &mut W, item_count: usize, data: &[u8]) -> io::Result<()> {
    let count = u32::try_from(item_count)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many items"))?;
    writer.write_u32::<LE>(count)?;
    writer.write_all(data)
}

/// Verifies a dynamic vector, recursively verifying every item with `verify_item`.
pub fn verify_dynvec(
    name: &str,
    slice: &[u8],
    compatible: bool,
    item_name: &str,
    verify_item: VerifyFn,
) -> Result<()> {
    let item_count = read_header(name, slice, true)?;
    verify_offsets(name, slice, item_count)?;
    for index in 0..item_count {
        let (start, end) = table::field_range(slice, index, item_count);
        verify_item(&slice[start..end], compatible).map_err(|e| {
            log::debug!("{name}: item #{index} rejected: {e}");
            Error::field_decode_failure(name, index, format!("[{index}]"), item_name, e)
        })?;
    }
    Ok(())
}

/// Length of a dynamic vector encoding of items with the given lengths.
#[inline]
pub fn dynvec_len(item_lens: &[usize]) -> usize {
    table::table_len(item_lens)
}

/// Writes a dynamic vector; the layout is the table layout over the items.
#[inline]
pub fn write_dynvec<W: Write>(writer: &mut W, items: &[&[u8]]) -> io::Result<()> {
    table::write_table(writer, items)
}

/// Zero-copy view over a verified fixed vector.
#[derive(Debug, Clone, Copy)]
pub struct FixVecView<'r> {
    slice: &'r [u8],
    item_size: usize,
}

impl<'r> FixVecView<'r> {
    pub fn new_unchecked(slice: &'r [u8], item_size: usize) -> FixVecView<'r> {
        FixVecView { slice, item_size }
    }

    pub fn len(&self) -> usize {
        unpack_len(self.slice)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&'r [u8]> {
        if index < self.len() {
            let start = NUMBER_SIZE + index * self.item_size;
            Some(&self.slice[start..start + self.item_size])
        } else {
            None
        }
    }

    /// The items' bytes without the count header.
    pub fn raw_data(&self) -> &'r [u8] {
        &self.slice[NUMBER_SIZE..]
    }
}

/// Zero-copy view over a verified dynamic vector.
#[derive(Debug, Clone, Copy)]
pub struct DynVecView<'r> {
    slice: &'r [u8],
}

impl<'r> DynVecView<'r> {
    pub fn new_unchecked(slice: &'r [u8]) -> DynVecView<'r> {
        DynVecView { slice }
    }

    pub fn len(&self) -> usize {
        if unpack_len(self.slice) == NUMBER_SIZE {
            0
        } else {
            unpack_len(&self.slice[NUMBER_SIZE..]) / NUMBER_SIZE - 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&'r [u8]> {
        let len = self.len();
        if index < len {
            let (start, end) = table::field_range(self.slice, index, len);
            Some(&self.slice[start..end])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ckbsdk_common::error::ErrorKind;

    fn four_bytes(slice: &[u8], _: bool) -> Result<()> {
        crate::fixed::verify_fixed("Uint32", slice, 4)
    }

    #[test]
    fn test_fixvec() {
        let mut buf = Vec::new();
        write_fixvec(&mut buf, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buf, [3, 0, 0, 0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(buf.len(), fixvec_len(3, 2));
        verify_fixvec("Pairs", &buf, 2).unwrap();

        let view = FixVecView::new_unchecked(&buf, 2);
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(1), Some([3u8, 4].as_slice()));
        assert_eq!(view.get(3), None);
        assert_eq!(view.raw_data(), &[1, 2, 3, 4, 5, 6]);

        assert!(matches!(
            verify_fixvec("Pairs", &buf[..9], 2).unwrap_err().kind(),
            ErrorKind::TotalSizeMismatch {
                header: 10,
                actual: 9,
                ..
            }
        ));
        assert!(matches!(
            verify_fixvec("Pairs", &buf[..3], 2).unwrap_err().kind(),
            ErrorKind::HeaderTooShort { .. }
        ));
    }

    #[test]
    fn test_fixvec_count_overflow() {
        let e = write_fixvec(&mut Vec::<u8>::new(), u32::MAX as usize + 1, &[]).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_fixvec_huge_count() {
        let buf = [0xff, 0xff, 0xff, 0xff, 0];
        assert!(verify_fixvec("Byte32Vec", &buf, 32).is_err());
    }

    #[test]
    fn test_empty_dynvec() {
        let mut buf = Vec::new();
        write_dynvec(&mut buf, &[]).unwrap();
        assert_eq!(buf, [4, 0, 0, 0]);
        verify_dynvec("Uint32Vec", &buf, false, "Uint32", four_bytes).unwrap();
        assert!(DynVecView::new_unchecked(&buf).is_empty());
    }

    #[test]
    fn test_dynvec_items() {
        let mut buf = Vec::new();
        write_dynvec(&mut buf, &[&[1, 0, 0, 0], &[2, 0, 0, 0]]).unwrap();
        assert_eq!(buf.len(), dynvec_len(&[4, 4]));
        verify_dynvec("Uint32Vec", &buf, false, "Uint32", four_bytes).unwrap();
        let view = DynVecView::new_unchecked(&buf);
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(1), Some([2u8, 0, 0, 0].as_slice()));
        assert_eq!(view.get(2), None);
    }

    #[test]
    fn test_dynvec_bad_item() {
        let mut buf = Vec::new();
        write_dynvec(&mut buf, &[&[1, 0, 0, 0], &[2, 0, 0]]).unwrap();
        let e = verify_dynvec("Uint32Vec", &buf, false, "Uint32", four_bytes).unwrap_err();
        match e.kind() {
            ErrorKind::FieldDecodeFailure {
                field_index,
                field,
                field_type,
                ..
            } => {
                assert_eq!(*field_index, 1);
                assert_eq!(field, "[1]");
                assert_eq!(field_type, "Uint32");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
