//! The table codec: an ordered list of field encodings behind a size word and an
//! offset table.
//!
//! ```text
//! [ total_size: Number ][ offset_0 ] ... [ offset_k-1 ][ field_0 ] ... [ field_k-1 ]
//! ```
//!
//! * `offset_0 == NUMBER_SIZE * (k + 1)`
//! * `offset_i == offset_i-1 + len(field_i-1)`
//! * `total_size == len(buffer)`
//!
//! Dynamic vectors share the same header, so the header checks here are used by
//! [`crate::vector`] as well.

use std::fmt;
use std::io::{self, Write};

use byteorder::{LE, WriteBytesExt};
use ckbsdk_common::{Result, error::Error, verify_arg};

use crate::number::{NUMBER_SIZE, unpack_len};

/// Verification function of a field type.
pub type VerifyFn = fn(&[u8], bool) -> Result<()>;

/// Describes one schema-declared field of a table.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub type_name: &'static str,
    pub verify: VerifyFn,
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)
    }
}

/// The ordered field list of a table type.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl TableLayout {
    /// Number of fields declared by the schema (the schema minimum).
    pub const fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_name(&self, index: usize) -> Option<&'static str> {
        self.fields.get(index).map(|f| f.name)
    }
}

/// Size of a header with `field_count` offset words.
#[inline]
pub const fn header_size(field_count: usize) -> usize {
    NUMBER_SIZE * (field_count + 1)
}

/// Length of the table encoding of fields with the given lengths.
pub fn table_len(field_lens: &[usize]) -> usize {
    header_size(field_lens.len()) + field_lens.iter().sum::<usize>()
}

/// Writes the canonical table encoding of `fields` into `writer`.
pub fn write_table<W: Write>(writer: &mut W, fields: &[&[u8]]) -> io::Result<()> {
    let mut offset = header_size(fields.len());
    let total_size = offset + fields.iter().map(|f| f.len()).sum::<usize>();
    writer.write_u32::<LE>(to_number(total_size)?)?;
    for field in fields {
        writer.write_u32::<LE>(to_number(offset)?)?;
        offset += field.len();
    }
    for field in fields {
        writer.write_all(field)?;
    }
    Ok(())
}

/// Returns the canonical table encoding of `fields`.
///
/// # Panics
///
/// Panics if the encoding is longer than `u32::MAX` bytes.
pub fn encode_table(fields: &[&[u8]]) -> Vec<u8> {
    let lens = fields.iter().map(|f| f.len()).collect::<Vec<_>>();
    let mut buf = Vec::with_capacity(table_len(&lens));
    write_table(&mut buf, fields).expect("write_table");
    buf
}

fn to_number(value: usize) -> io::Result<u32> {
    u32::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("encoding of {value} bytes exceeds the 4-byte size word"),
        )
    })
}

/// Verifies that `slice` is a table matching `layout`, recursively verifying every
/// schema-declared field with that field's own verifier.
///
/// In strict mode the number of physically present fields must equal the schema's; in
/// compatible mode trailing extra fields are accepted without being inspected beyond
/// their offsets. The first violated check aborts the whole verification.
pub fn verify_table(slice: &[u8], layout: &TableLayout, compatible: bool) -> Result<()> {
    let name = layout.name;
    let declared = layout.field_count();
    let field_count = read_header(name, slice, declared == 0)?;
    if field_count < declared || (!compatible && field_count > declared) {
        log::debug!("{name}: {field_count} fields present, {declared} declared");
        return Err(Error::field_count_mismatch(
            name,
            declared,
            field_count,
            compatible,
        ));
    }
    verify_offsets(name, slice, field_count)?;
    for (index, field) in layout.fields.iter().enumerate() {
        let (start, end) = field_range(slice, index, field_count);
        (field.verify)(&slice[start..end], compatible).map_err(|e| {
            log::debug!("{name}: field #{index} '{}' rejected: {e}", field.name);
            Error::field_decode_failure(name, index, field.name, field.type_name, e)
        })?;
    }
    Ok(())
}

/// Checks the size word and the first offset of a table or dynamic vector header and
/// returns the number of offset words (physically present fields or items).
///
/// With `allow_empty`, a buffer consisting of a bare size word of `4` is accepted as
/// having no fields at all.
pub(crate) fn read_header(name: &str, slice: &[u8], allow_empty: bool) -> Result<usize> {
    let len = slice.len();
    if len < NUMBER_SIZE {
        log::debug!("{name}: {len} bytes cannot hold the size word");
        return Err(Error::header_too_short(name, len, NUMBER_SIZE));
    }
    let total_size = unpack_len(slice);
    if total_size != len {
        log::debug!("{name}: size word {total_size} != buffer length {len}");
        return Err(Error::total_size_mismatch(name, total_size, len));
    }
    if allow_empty && len == NUMBER_SIZE {
        return Ok(0);
    }
    if len < NUMBER_SIZE * 2 {
        log::debug!("{name}: {len} bytes cannot hold the first offset");
        return Err(Error::header_too_short(name, len, NUMBER_SIZE * 2));
    }
    let first = unpack_len(&slice[NUMBER_SIZE..]);
    if first % NUMBER_SIZE != 0 || first < NUMBER_SIZE * 2 {
        log::debug!("{name}: bad first offset {first}");
        return Err(Error::offset_misaligned(name, first));
    }
    if len < first {
        log::debug!("{name}: offset table ends at {first}, past {len}");
        return Err(Error::header_too_short(name, len, first));
    }
    Ok(first / NUMBER_SIZE - 1)
}

/// Checks that every consecutive pair of boundaries, with the buffer end as the final
/// boundary, is non-decreasing.
pub(crate) fn verify_offsets(name: &str, slice: &[u8], count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    let mut prev = boundary(slice, 0, count);
    for index in 1..=count {
        let next = boundary(slice, index, count);
        if prev > next {
            log::debug!("{name}: boundary {} ({prev}) > boundary {index} ({next})", index - 1);
            return Err(Error::offsets_not_match(name, index - 1, prev, next));
        }
        prev = next;
    }
    Ok(())
}

/// Start of field `index`, or the end of the buffer when `index == count`.
#[inline]
pub(crate) fn boundary(slice: &[u8], index: usize, count: usize) -> usize {
    if index < count {
        unpack_len(&slice[NUMBER_SIZE * (index + 1)..])
    } else {
        slice.len()
    }
}

#[inline]
pub(crate) fn field_range(slice: &[u8], index: usize, count: usize) -> (usize, usize) {
    (boundary(slice, index, count), boundary(slice, index + 1, count))
}

/// Zero-copy view over a verified table.
///
/// All accessors are computed from the embedded header on every call.
#[derive(Clone, Copy)]
pub struct TableView<'r> {
    slice: &'r [u8],
    declared: usize,
}

impl<'r> TableView<'r> {
    /// Wraps a table encoding of a type declaring `declared` fields.
    pub fn new_unchecked(slice: &'r [u8], declared: usize) -> TableView<'r> {
        TableView { slice, declared }
    }

    pub fn as_slice(&self) -> &'r [u8] {
        self.slice
    }

    pub fn total_size(&self) -> usize {
        unpack_len(self.slice)
    }

    /// Number of physically present fields, including extra ones.
    pub fn field_count(&self) -> usize {
        if self.total_size() == NUMBER_SIZE {
            0
        } else {
            unpack_len(&self.slice[NUMBER_SIZE..]) / NUMBER_SIZE - 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    pub fn has_extra_fields(&self) -> bool {
        self.field_count() > self.declared
    }

    pub fn count_extra_fields(&self) -> usize {
        self.field_count().saturating_sub(self.declared)
    }

    /// Bytes of field `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a physically present field.
    pub fn field(&self, index: usize) -> &'r [u8] {
        let (start, end) = field_range(self.slice, index, self.field_count());
        &self.slice[start..end]
    }

    /// Bytes of field `index`, which may be an extra field.
    pub fn field_at(&self, index: usize) -> Result<&'r [u8]> {
        let field_count = self.field_count();
        verify_arg!(index, index < field_count);
        Ok(self.field(index))
    }

    /// Start offset of field `index` within the table.
    pub fn field_offset(&self, index: usize) -> usize {
        boundary(self.slice, index, self.field_count())
    }

    /// Bytes of the fields beyond the schema-declared ones.
    pub fn extra_fields(&self) -> impl Iterator<Item = &'r [u8]> + use<'r> {
        let view = *self;
        (self.declared..self.field_count()).map(move |i| view.field(i))
    }
}

impl fmt::Debug for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("total_size", &self.total_size())
            .field("field_count", &self.field_count())
            .field("declared", &self.declared)
            .finish()
    }
}
