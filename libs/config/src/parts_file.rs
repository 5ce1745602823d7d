//! User Parts Files
//!
//! Extra identifier rows for boards or engineering samples the built-in
//! table does not know about:
//!
//! ```toml
//! [[part]]
//! id = "0x0362D093"
//! mask = "nover"
//! name = "XC7A35T"
//! ```
//!
//! `mask` accepts `"nover"`, `"full"` or a number and defaults to `"full"`.
//! Numbers may be TOML integers or strings in hex (`0x`) or decimal.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use fpga_id::{FpgaIdEntry, TableError, FPGA_ID_MASK_FULL, FPGA_ID_MASK_NOVER};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Integer or string form of a 32-bit value
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Word {
    Int(i64),
    Text(String),
}

/// One `[[part]]` row as written in the file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PartSpec {
    pub id: Word,
    #[serde(default)]
    pub mask: Option<Word>,
    pub name: String,
}

/// Parsed parts file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PartsFile {
    #[serde(default, rename = "part")]
    pub parts: Vec<PartSpec>,
}

/// Parse a hex (`0x`) or decimal string as a `u32`
pub fn parse_u32(text: &str) -> Result<u32> {
    let text = text.trim().replace('_', "");
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse::<u32>(),
    };
    parsed.with_context(|| format!("'{}' is not a 32-bit hex or decimal number", text))
}

impl Word {
    fn to_u32(&self) -> Result<u32> {
        match self {
            Word::Int(value) => u32::try_from(*value)
                .map_err(|_| anyhow!("{} does not fit in 32 bits", value)),
            Word::Text(text) => parse_u32(text),
        }
    }

    fn to_mask(&self) -> Result<u32> {
        match self {
            Word::Text(text) if text.eq_ignore_ascii_case("nover") => Ok(FPGA_ID_MASK_NOVER),
            Word::Text(text) if text.eq_ignore_ascii_case("full") => Ok(FPGA_ID_MASK_FULL),
            other => other.to_u32(),
        }
    }
}

impl PartSpec {
    /// Validate into a table entry; `index` is only used in error messages
    pub fn to_entry(&self, index: usize) -> Result<FpgaIdEntry> {
        let id = self
            .id
            .to_u32()
            .with_context(|| format!("part {} ('{}'): invalid id", index, self.name))?;
        let mask = match &self.mask {
            Some(mask) => mask
                .to_mask()
                .with_context(|| format!("part {} ('{}'): invalid mask", index, self.name))?,
            None => FPGA_ID_MASK_FULL,
        };

        if id == 0 {
            return Err(TableError::ZeroId {
                index,
                name: self.name.clone(),
            }
            .into());
        }
        if self.name.is_empty() {
            return Err(TableError::EmptyName { index, id }.into());
        }
        if mask == 0 {
            bail!("part {} ('{}'): mask 0 would match every identifier", index, self.name);
        }

        let entry = FpgaIdEntry::with_name(id, mask, &self.name)?;
        debug!("User part {}: {:#010x}/{:#010x} {}", index, id, mask, entry.name());
        Ok(entry)
    }
}

impl PartsFile {
    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse parts file")
    }

    /// Convert every row into a table entry, in file order
    pub fn entries(&self) -> Result<Vec<FpgaIdEntry>> {
        self.parts
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.to_entry(index))
            .collect()
    }

    /// Read and validate a parts file
    pub fn load(path: &Path) -> Result<Vec<FpgaIdEntry>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read parts file: {:?}", path))?;
        let entries = Self::parse(&content)
            .and_then(|file| file.entries())
            .with_context(|| format!("Invalid parts file: {:?}", path))?;
        info!("Loaded {} user parts from {:?}", entries.len(), path);
        Ok(entries)
    }
}
