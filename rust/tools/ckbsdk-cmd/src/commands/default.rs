//! Default command implementation

use anyhow::Result;

use crate::registry;

pub fn run(type_name: String) -> Result<()> {
    println!("{}", default_hex(&type_name)?);
    Ok(())
}

fn default_hex(type_name: &str) -> Result<String> {
    let entry = registry::find(type_name)?;
    Ok(format!("0x{}", hex::encode((entry.default)())))
}
