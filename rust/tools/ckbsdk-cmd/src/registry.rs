//! The schema types the command line knows how to decode.

use ckbsdk_molecule::table::{TableLayout, VerifyFn};
use ckbsdk_molecule::{Entity, Table};
use ckbsdk_types::{
    Byte, Byte32, Byte32Vec, Bytes, BytesOpt, BytesVec, CellDep, CellDepVec, CellInput,
    CellInputVec, CellOutput, CellOutputVec, OffChainParticipant, OutPoint, RawTransaction,
    SEC1EncodedPubKey, Script, ScriptOpt, Transaction, Uint32, Uint64, WitnessArgs,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Fixed,
    Struct,
    FixVec,
    DynVec,
    Option,
    Table,
}

pub struct TypeEntry {
    pub name: &'static str,
    pub kind: Kind,
    pub verify: VerifyFn,
    /// Field layout, for tables.
    pub layout: Option<&'static TableLayout>,
    pub default: fn() -> Vec<u8>,
}

fn default_bytes<E: Entity>() -> Vec<u8> {
    E::default().into_vec()
}

macro_rules! entry {
    (Table, $ty:ident) => {
        TypeEntry {
            name: <$ty as Entity>::NAME,
            kind: Kind::Table,
            verify: <$ty as Entity>::verify,
            layout: Some(<$ty as Table>::LAYOUT),
            default: default_bytes::<$ty>,
        }
    };
    ($kind:ident, $ty:ident) => {
        TypeEntry {
            name: <$ty as Entity>::NAME,
            kind: Kind::$kind,
            verify: <$ty as Entity>::verify,
            layout: None,
            default: default_bytes::<$ty>,
        }
    };
}

pub static TYPES: &[TypeEntry] = &[
    entry!(Fixed, Byte),
    entry!(Fixed, Byte32),
    entry!(Fixed, Uint32),
    entry!(Fixed, Uint64),
    entry!(Fixed, SEC1EncodedPubKey),
    entry!(FixVec, Bytes),
    entry!(Option, BytesOpt),
    entry!(DynVec, BytesVec),
    entry!(FixVec, Byte32Vec),
    entry!(Table, Script),
    entry!(Option, ScriptOpt),
    entry!(Struct, OutPoint),
    entry!(Struct, CellInput),
    entry!(Struct, CellDep),
    entry!(Table, CellOutput),
    entry!(FixVec, CellDepVec),
    entry!(FixVec, CellInputVec),
    entry!(DynVec, CellOutputVec),
    entry!(Table, WitnessArgs),
    entry!(Table, RawTransaction),
    entry!(Table, Transaction),
    entry!(Table, OffChainParticipant),
];

/// Looks up a type by name, ignoring ASCII case.
pub fn find(name: &str) -> anyhow::Result<&'static TypeEntry> {
    TYPES
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("Unknown type '{}'; run `types` to list them", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_verify() {
        for entry in TYPES {
            let bytes = (entry.default)();
            (entry.verify)(&bytes, false).unwrap();
            if let Some(layout) = entry.layout {
                assert_eq!(layout.name, entry.name);
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("offchainparticipant").unwrap().kind, Kind::Table);
        assert_eq!(find("Uint64").unwrap().name, "Uint64");
        assert!(find("Header").is_err());
    }
}
