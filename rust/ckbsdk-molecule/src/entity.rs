//! The capability every schema type shares: an owned canonical encoding ([`Entity`]),
//! a zero-copy verified view ([`Reader`]) and a mutable staging object ([`Builder`]).
//!
//! Composite codecs are written once against these traits, so that a table, vector or
//! option can hold fields of any schema type.

use std::fmt;
use std::io;

use ckbsdk_common::{Result, error::Error};

use crate::table::TableLayout;

/// An owned, canonically encoded value of a schema type.
///
/// An entity is either produced by [`Builder::build`] (valid by construction) or by one of the
/// checked constructors below, which run the type's verifier first.
pub trait Entity: Clone + Default + fmt::Debug + PartialEq + Eq + Send + Sync {
    type Builder: Builder<Entity = Self>;

    /// Schema name of the type.
    const NAME: &'static str;

    /// Wraps `data` without verifying it.
    fn new_unchecked(data: Vec<u8>) -> Self;

    fn as_slice(&self) -> &[u8];

    fn into_vec(self) -> Vec<u8>;

    /// Verifies that `slice` is a well-formed encoding of this type.
    fn verify(slice: &[u8], compatible: bool) -> Result<()>;

    /// Decodes `slice`, rejecting trailing fields unknown to this schema version.
    fn from_slice(slice: &[u8]) -> Result<Self> {
        Self::decode(slice, false)
    }

    /// Decodes `slice`, tolerating trailing fields added by newer schema versions.
    fn from_compatible_slice(slice: &[u8]) -> Result<Self> {
        Self::decode(slice, true)
    }

    fn decode(slice: &[u8], compatible: bool) -> Result<Self> {
        Self::verify(slice, compatible)?;
        Ok(Self::new_unchecked(slice.to_vec()))
    }

    fn new_builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// Decomposes the value into a builder pre-populated with its schema-declared fields.
    fn as_builder(&self) -> Self::Builder;
}

/// A non-owning, zero-copy view over an encoding of a schema type.
///
/// A reader never outlives the buffer it was created from. Accessors slice lazily into
/// that buffer; nothing is copied until [`Reader::to_entity`] is called.
pub trait Reader<'r>: Copy + fmt::Debug {
    type Entity: Entity;

    /// Schema name of the type.
    const NAME: &'static str;

    /// Verifies that `slice` is a well-formed encoding of this type.
    fn verify(slice: &[u8], compatible: bool) -> Result<()>;

    /// Wraps `slice` without verifying it.
    fn new_unchecked(slice: &'r [u8]) -> Self;

    fn as_slice(&self) -> &'r [u8];

    fn from_slice(slice: &'r [u8]) -> Result<Self> {
        Self::decode(slice, false)
    }

    fn from_compatible_slice(slice: &'r [u8]) -> Result<Self> {
        Self::decode(slice, true)
    }

    /// Runs the verifier over `slice` and, on success, returns a view over it.
    /// No partially decoded view is ever produced.
    fn decode(slice: &'r [u8], compatible: bool) -> Result<Self> {
        Self::verify(slice, compatible)?;
        log::trace!("decoded {} ({} bytes)", Self::NAME, slice.len());
        Ok(Self::new_unchecked(slice))
    }

    /// Copies the viewed bytes into an owned entity.
    fn to_entity(&self) -> Self::Entity {
        Self::Entity::new_unchecked(self.as_slice().to_vec())
    }
}

/// Mutable staging object producing the canonical encoding of a schema type.
///
/// Every field a builder holds is already a valid instance of its type, so building
/// cannot fail.
pub trait Builder: Default {
    type Entity: Entity;

    const NAME: &'static str;

    /// Exact length of the encoding [`Builder::write`] produces.
    fn expected_length(&self) -> usize;

    fn write<W: io::Write>(&self, writer: &mut W) -> io::Result<()>;

    /// Writes the encoding into a caller-supplied sink.
    fn write_to<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        self.write(writer).map_err(|e| Error::io(Self::NAME, e))
    }

    /// Encodes the held values.
    ///
    /// # Panics
    ///
    /// Panics if the encoding, or any item count in it, exceeds `u32::MAX`, the largest
    /// value a size word can hold. Use [`Builder::write_to`] to get an error instead.
    fn build(&self) -> Self::Entity {
        let mut data = Vec::with_capacity(self.expected_length());
        self.write(&mut data).expect("write to Vec");
        Self::Entity::new_unchecked(data)
    }
}

/// A schema type encoded as a table.
pub trait Table: Entity {
    /// Field layout of the table, as declared by the current schema version.
    const LAYOUT: &'static TableLayout;
}
