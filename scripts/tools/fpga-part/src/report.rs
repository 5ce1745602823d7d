//! Output rows shared by text and JSON rendering

use fpga_id::{Family, FpgaIdEntry, IdCode, FPGA_ID_MASK_FULL, FPGA_ID_MASK_NOVER};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LookupRow {
    pub id: String,
    pub part: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntryRow {
    pub id: String,
    pub mask: String,
    pub part: String,
    pub family: Option<String>,
    pub source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub id: String,
    pub version: u8,
    pub part_number: String,
    pub manufacturer: String,
    pub well_formed: bool,
    pub vendor: Option<String>,
    pub family: Option<String>,
    pub part: Option<String>,
    pub mask: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub entries: usize,
    pub user_entries: usize,
    pub overrides: Vec<String>,
    pub ok: bool,
    pub error: Option<String>,
}

/// `nover`, `full` or the raw mask in hex
pub fn mask_label(mask: u32) -> String {
    match mask {
        FPGA_ID_MASK_NOVER => "nover".to_string(),
        FPGA_ID_MASK_FULL => "full".to_string(),
        other => format!("{:#010x}", other),
    }
}

impl EntryRow {
    pub fn new(entry: &FpgaIdEntry, user: bool) -> Self {
        Self {
            id: IdCode(entry.id).to_string(),
            mask: mask_label(entry.mask),
            part: entry.name().to_string(),
            family: entry.family().map(|f| f.to_string()),
            source: if user { "user" } else { "builtin" },
        }
    }
}

impl DecodeReport {
    pub fn new(id: u32, entry: Option<&FpgaIdEntry>) -> Self {
        let code = IdCode(id);
        let family = entry
            .and_then(FpgaIdEntry::family)
            .map(|f: Family| f.to_string());
        Self {
            id: code.to_string(),
            version: code.version(),
            part_number: format!("{:#06x}", code.part_number()),
            manufacturer: format!("{:#05x}", code.manufacturer()),
            well_formed: code.is_well_formed(),
            vendor: code.vendor().map(|v| v.to_string()),
            family,
            part: entry.map(|e| e.name().to_string()),
            mask: entry.map(|e| mask_label(e.mask)),
        }
    }
}
