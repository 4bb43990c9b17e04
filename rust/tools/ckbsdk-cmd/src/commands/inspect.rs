//! Inspect command implementation

use anyhow::Result;
use ckbsdk_common::error::Error;
use ckbsdk_molecule::table::{TableLayout, TableView};
use ckbsdk_molecule::vector::DynVecView;
use ckbsdk_molecule::{Compatibility, unpack_number};
use serde::Serialize;

use crate::registry::{self, Kind, TypeEntry};
use crate::utils::read_input;

#[derive(Debug, Serialize)]
struct InspectSummary {
    #[serde(rename = "type")]
    type_name: &'static str,
    kind: Kind,
    mode: String,
    total_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_some: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<TableInfo>,
}

#[derive(Debug, Serialize)]
struct TableInfo {
    field_count: usize,
    extra_field_count: usize,
    fields: Vec<FieldInfo>,
}

#[derive(Debug, Serialize)]
struct FieldInfo {
    name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_name: Option<&'static str>,
    offset: usize,
    length: usize,
    hex: String,
}

/// Run the inspect command
pub fn run(type_name: String, mode: Compatibility, input: String) -> Result<()> {
    let entry = registry::find(&type_name)?;
    let bytes = read_input(&input)?;
    let summary = inspect(entry, &bytes, mode)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn inspect(entry: &TypeEntry, bytes: &[u8], mode: Compatibility) -> Result<InspectSummary> {
    (entry.verify)(bytes, mode.is_compatible()).map_err(|e| decode_error(entry, mode, e))?;

    let item_count = match entry.kind {
        Kind::FixVec => Some(unpack_number(bytes) as usize),
        Kind::DynVec => Some(DynVecView::new_unchecked(bytes).len()),
        _ => None,
    };
    let is_some = (entry.kind == Kind::Option).then(|| !bytes.is_empty());

    Ok(InspectSummary {
        type_name: entry.name,
        kind: entry.kind,
        mode: mode.to_string(),
        total_size: bytes.len(),
        item_count,
        is_some,
        table: entry.layout.map(|layout| {
            create_table_info(TableView::new_unchecked(bytes, layout.field_count()), layout)
        }),
    })
}

fn create_table_info(view: TableView<'_>, layout: &TableLayout) -> TableInfo {
    let declared = layout.field_count();
    let fields = (0..view.field_count())
        .map(|i| {
            let data = view.field(i);
            FieldInfo {
                name: layout
                    .field_name(i)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("extra#{}", i - declared)),
                type_name: layout.fields.get(i).map(|f| f.type_name),
                offset: view.field_offset(i),
                length: data.len(),
                hex: hex::encode(data),
            }
        })
        .collect();
    TableInfo {
        field_count: view.field_count(),
        extra_field_count: view.count_extra_fields(),
        fields,
    }
}

fn decode_error(entry: &TypeEntry, mode: Compatibility, e: Error) -> anyhow::Error {
    let path = e.field_path();
    let context = if path.is_empty() {
        format!("Not a valid {} ({} mode)", entry.name, mode)
    } else {
        format!("Not a valid {} ({} mode), rejected at {}", entry.name, mode, path)
    };
    anyhow::Error::new(e).context(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ckbsdk_molecule::{Entity, Reader};
    use ckbsdk_molecule::table::encode_table;
    use ckbsdk_types::{Script, WitnessArgs};

    #[test]
    fn test_inspect_table() {
        let entry = registry::find("WitnessArgs").unwrap();
        let witness = WitnessArgs::secp256k1_placeholder();
        let summary = inspect(entry, witness.as_slice(), Compatibility::Strict).unwrap();
        let table = summary.table.unwrap();
        assert_eq!(table.field_count, 3);
        assert_eq!(table.extra_field_count, 0);
        assert_eq!(table.fields[0].name, "lock");
        assert_eq!(table.fields[0].offset, 16);
        assert_eq!(table.fields[0].length, 69);
        assert_eq!(table.fields[1].length, 0);
    }

    #[test]
    fn test_inspect_extra_fields() {
        let entry = registry::find("Script").unwrap();
        let script = Script::default();
        let reader = script.as_reader();
        let extended = encode_table(&[
            reader.code_hash().as_slice(),
            reader.hash_type().as_slice(),
            reader.args().as_slice(),
            b"\xca\xfe".as_slice(),
        ]);

        let e = inspect(entry, &extended, Compatibility::Strict).unwrap_err();
        assert!(format!("{e:#}").contains("Not a valid Script (strict mode)"));

        let summary = inspect(entry, &extended, Compatibility::Compatible).unwrap();
        let table = summary.table.unwrap();
        assert_eq!(table.extra_field_count, 1);
        assert_eq!(table.fields[3].name, "extra#0");
        assert_eq!(table.fields[3].hex, "cafe");
        assert!(table.fields[3].type_name.is_none());
    }

    #[test]
    fn test_inspect_vector_and_error_path() {
        let entry = registry::find("BytesVec").unwrap();
        let summary = inspect(entry, &[4, 0, 0, 0], Compatibility::Strict).unwrap();
        assert_eq!(summary.item_count, Some(0));
        assert!(summary.table.is_none());

        let entry = registry::find("OffChainParticipant").unwrap();
        let mut bytes = (entry.default)();
        bytes[102] = 1;
        let e = inspect(entry, &bytes, Compatibility::Strict).unwrap_err();
        assert!(e.to_string().ends_with("rejected at payment_script.args"));
    }
}
