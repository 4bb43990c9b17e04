//! Lock and type scripts.

use ckbsdk_common::{Result, error::Error};
use ckbsdk_molecule::{option, table};

use crate::primitives::{Byte, ByteReader, Byte32, Byte32Reader, Bytes, BytesReader};

table!(
    /// A script: the hash identifying the code to run, how to interpret that hash,
    /// and the arguments passed to the code.
    Script,
    ScriptReader,
    ScriptBuilder {
        0 => code_hash: Byte32 / Byte32Reader,
        1 => hash_type: Byte / ByteReader,
        2 => args: Bytes / BytesReader,
    }
);
option!(ScriptOpt, ScriptOptReader, ScriptOptBuilder, Script / ScriptReader);

/// How a script's `code_hash` is matched against cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ScriptHashType {
    /// Matches the data hash of a cell, run with the first VM version.
    #[default]
    Data = 0,
    /// Matches the type script hash of a cell.
    Type = 1,
    /// Matches the data hash of a cell, run with the second VM version.
    Data1 = 2,
}

impl TryFrom<u8> for ScriptHashType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ScriptHashType::Data),
            1 => Ok(ScriptHashType::Type),
            2 => Ok(ScriptHashType::Data1),
            _ => Err(Error::invalid_arg(
                "hash_type",
                format!("unknown script hash type {value}"),
            )),
        }
    }
}

impl From<ScriptHashType> for Byte {
    fn from(value: ScriptHashType) -> Self {
        Byte::from(value as u8)
    }
}

impl Script {
    /// Decodes the `hash_type` byte.
    pub fn hash_type_kind(&self) -> Result<ScriptHashType> {
        self.as_reader().hash_type_kind()
    }
}

impl ScriptReader<'_> {
    pub fn hash_type_kind(&self) -> Result<ScriptHashType> {
        ScriptHashType::try_from(self.hash_type().raw_data()[0])
    }
}
