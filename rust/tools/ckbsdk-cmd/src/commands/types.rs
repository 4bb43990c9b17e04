//! Types command implementation

use anyhow::Result;
use serde::Serialize;

use crate::registry::{self, Kind};

#[derive(Debug, Serialize)]
struct TypeInfo {
    name: &'static str,
    kind: Kind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<String>,
}

pub fn run() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&describe())?);
    Ok(())
}

fn describe() -> Vec<TypeInfo> {
    registry::TYPES
        .iter()
        .map(|entry| TypeInfo {
            name: entry.name,
            kind: entry.kind,
            fields: entry
                .layout
                .map(|layout| {
                    layout
                        .fields
                        .iter()
                        .map(|f| format!("{}: {}", f.name, f.type_name))
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}
