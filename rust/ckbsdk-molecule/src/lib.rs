//! Molecule: the compact, self-describing binary schema codec every structured CKB type
//! (scripts, cell outputs, transactions, off-chain records) is encoded with.
//!
//! # Layout
//!
//! Every multi-byte integer is little-endian and every size/offset word is a 4-byte
//! [`number`]. Schema types come in a few kinds:
//!
//! - fixed byte arrays and structs ([`fixed`]): raw bytes, exact length;
//! - fixed and dynamic vectors ([`vector`]);
//! - options ([`option`]): empty or the inner encoding;
//! - tables ([`table`]): size word, offset table, then the field encodings, with room for
//!   trailing fields appended by newer schema versions.
//!
//! # Decoding
//!
//! Decoding never trusts its input: [`Reader::decode`] runs the type's verifier over the
//! whole buffer (recursively through every field) and only then hands out a zero-copy
//! view. The `compatible` flag (see [`Compatibility`]) decides whether a table may carry
//! more fields than the local schema declares.
//!
//! # Encoding
//!
//! A [`Builder`] holds typed field values and writes the canonical encoding; it cannot
//! fail because every value it holds is already valid.
//!
//! Concrete schema types are declared with the [`table!`], [`fixed_struct!`],
//! [`fixed_bytes!`], [`fixvec!`], [`dynvec!`] and [`option!`] macros.

pub mod compat;
pub mod entity;
pub mod fixed;
pub mod macros;
pub mod number;
pub mod option;
pub mod table;
pub mod vector;

use std::fmt;

pub use ckbsdk_common::{
    Result,
    error::{Error, ErrorKind},
};
pub use compat::Compatibility;
pub use entity::{Builder, Entity, Reader, Table};
pub use number::{NUMBER_SIZE, pack_number, unpack_number};

pub mod prelude {
    //! Traits needed to call the codec operations of generated types.
    pub use crate::entity::{Builder, Entity, Reader, Table};
}

/// Formats `bytes` as `name(0x..)`.
#[doc(hidden)]
pub fn fmt_hex(f: &mut fmt::Formatter<'_>, name: &str, bytes: &[u8]) -> fmt::Result {
    write!(f, "{name}(0x{})", hex::encode(bytes))
}
