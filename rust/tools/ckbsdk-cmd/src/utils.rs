//! Common utilities for ckbsdk-cmd

use anyhow::{Context, Result};
use std::path::Path;

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

/// Reads the buffer to decode: `@path` reads the file's raw bytes, anything else is
/// parsed as hex with an optional `0x` prefix.
pub fn read_input(input: &str) -> Result<Vec<u8>> {
    if let Some(path) = input.strip_prefix('@') {
        validate_file_exists(path)?;
        return std::fs::read(path).with_context(|| format!("Failed to read {}", path));
    }
    let digits = input
        .trim()
        .strip_prefix("0x")
        .unwrap_or_else(|| input.trim());
    hex::decode(digits).with_context(|| format!("Invalid hex input: {}", input))
}
