//! Subcommand implementations

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use fpga_config::{MergedTable, OutputFormat};
use fpga_id::{encode_entries, Family, IdCode, Vendor};
use serde::Serialize;
use tracing::info;

use crate::report::{CheckReport, DecodeReport, EntryRow, LookupRow};

/// Command result that still maps to a non-zero exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// An identifier did not resolve, or the table failed validation
    Failed,
}

impl Status {
    fn from_ok(ok: bool) -> Self {
        if ok {
            Status::Success
        } else {
            Status::Failed
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failed => ExitCode::from(1),
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

/// Resolve each id; exit code 1 if any is unknown
pub fn lookup(merged: &MergedTable, ids: &[u32], format: OutputFormat) -> Result<Status> {
    let table = merged.table()?;
    let rows: Vec<LookupRow> = ids
        .iter()
        .map(|&id| {
            let name = table.lookup(id);
            LookupRow {
                id: IdCode(id).to_string(),
                part: (!name.is_empty()).then(|| name.to_string()),
            }
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Text => {
            for row in &rows {
                match &row.part {
                    Some(part) => println!("{}  {}", row.id.cyan(), part.green()),
                    None => println!("{}  {}", row.id.cyan(), "unknown".red()),
                }
            }
        }
    }

    Ok(Status::from_ok(rows.iter().all(|row| row.part.is_some())))
}

pub fn decode(merged: &MergedTable, id: u32, format: OutputFormat) -> Result<Status> {
    let table = merged.table()?;
    let report = DecodeReport::new(id, table.find(id));

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            let dash = || "-".dimmed().to_string();
            println!("{:<13}{}", "idcode", report.id.cyan());
            println!("{:<13}{}", "version", report.version);
            println!("{:<13}{}", "part number", report.part_number);
            println!("{:<13}{}", "manufacturer", report.manufacturer);
            if !report.well_formed {
                println!("{:<13}{}", "", "bit 0 is clear: not a valid IDCODE".yellow());
            }
            println!("{:<13}{}", "vendor", report.vendor.clone().unwrap_or_else(dash));
            println!("{:<13}{}", "family", report.family.clone().unwrap_or_else(dash));
            match (&report.part, &report.mask) {
                (Some(part), Some(mask)) => {
                    println!("{:<13}{} ({} match)", "part", part.green(), mask)
                }
                _ => println!("{:<13}{}", "part", "unknown".red()),
            }
        }
    }

    Ok(Status::from_ok(report.part.is_some()))
}

/// Table rows in order, narrowed by vendor and family
pub fn list_rows(
    merged: &MergedTable,
    vendor: Option<Vendor>,
    family: Option<Family>,
) -> Result<Vec<EntryRow>> {
    let table = merged.table()?;
    Ok(table
        .iter()
        .enumerate()
        .filter(|(_, entry)| vendor.map_or(true, |v| IdCode(entry.id).vendor() == Some(v)))
        .filter(|(_, entry)| family.map_or(true, |f| entry.family() == Some(f)))
        .map(|(index, entry)| EntryRow::new(entry, index < merged.user_count()))
        .collect())
}

pub fn list(
    merged: &MergedTable,
    vendor: Option<Vendor>,
    family: Option<Family>,
    format: OutputFormat,
) -> Result<Status> {
    let rows = list_rows(merged, vendor, family)?;

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Text => {
            for row in &rows {
                let family = row.family.as_deref().unwrap_or("-");
                let part = if row.source == "user" {
                    row.part.yellow()
                } else {
                    row.part.green()
                };
                println!(
                    "{}  {:<10}  {:<16}{}",
                    row.id.cyan(),
                    row.mask,
                    part,
                    family.dimmed()
                );
            }
            println!("{} entries", rows.len());
        }
    }
    Ok(Status::Success)
}

pub fn check(merged: &MergedTable, format: OutputFormat) -> Result<Status> {
    let table = merged.table()?;
    let result = merged.validate();

    let report = CheckReport {
        entries: table.len(),
        user_entries: merged.user_count(),
        overrides: merged
            .overrides()
            .iter()
            .map(|o| format!("{} -> {} ({:#010x})", o.builtin, o.user, o.id))
            .collect(),
        ok: result.is_ok(),
        error: result.as_ref().err().map(|e| e.to_string()),
    };

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            println!(
                "{} entries ({} from user parts)",
                report.entries, report.user_entries
            );
            for line in &report.overrides {
                println!("  override {}", line.yellow());
            }
            match &report.error {
                None => println!("✅ table is consistent"),
                Some(error) => println!("❌ {}", error.red()),
            }
        }
    }

    Ok(Status::from_ok(report.ok))
}

pub fn export(merged: &MergedTable, path: &Path) -> Result<Status> {
    let bytes = encode_entries(merged.raw_entries());
    fs::write(path, &bytes).with_context(|| format!("Failed to write {:?}", path))?;
    info!(
        "Wrote {} records ({} bytes) to {:?}",
        merged.raw_entries().len(),
        bytes.len(),
        path
    );
    println!("✅ Exported {} entries to {}", merged.raw_entries().len() - 1, path.display());
    Ok(Status::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpga_config::{assemble_tables, merge_tables};
    use fpga_id::{
        decode_entries, FpgaIdEntry, IdentifierTable, FPGA_ID_MASK_FULL, FPGA_ID_MASK_NOVER,
        FPGA_ID_XC7A200T,
    };
    use tempfile::tempdir;

    fn builtin() -> MergedTable {
        merge_tables(&[], IdentifierTable::builtin()).unwrap()
    }

    #[test]
    fn test_lookup_exit_codes() {
        let merged = builtin();
        assert_eq!(
            lookup(&merged, &[FPGA_ID_XC7A200T], OutputFormat::Json).unwrap(),
            Status::Success
        );
        assert_eq!(
            lookup(&merged, &[FPGA_ID_XC7A200T, 0xFFFF_FFFF], OutputFormat::Text).unwrap(),
            Status::Failed
        );
    }

    #[test]
    fn test_check_builtin() {
        assert_eq!(check(&builtin(), OutputFormat::Text).unwrap(), Status::Success);
    }

    #[test]
    fn test_check_reports_conflicting_user_part() {
        // One stepping of XC7A35T, which the built-in row matches on every stepping
        let user = [FpgaIdEntry::new(0x1362_D093, FPGA_ID_MASK_FULL, "A35-REV1")];
        let merged = assemble_tables(&user, IdentifierTable::builtin()).unwrap();

        assert_eq!(check(&merged, OutputFormat::Text).unwrap(), Status::Failed);
        assert_eq!(check(&merged, OutputFormat::Json).unwrap(), Status::Failed);
    }

    #[test]
    fn test_decode_exit_codes() {
        let merged = builtin();
        assert_eq!(
            decode(&merged, FPGA_ID_XC7A200T | 0x1000_0000, OutputFormat::Text).unwrap(),
            Status::Success
        );
        assert_eq!(
            decode(&merged, 0x4111_3043, OutputFormat::Json).unwrap(),
            Status::Failed
        );
    }

    #[test]
    fn test_list_filters() {
        let merged = builtin();
        assert_eq!(list_rows(&merged, None, None).unwrap().len(), 265);
        assert_eq!(list_rows(&merged, Some(Vendor::Xilinx), None).unwrap().len(), 145);
        assert_eq!(list_rows(&merged, Some(Vendor::Intel), None).unwrap().len(), 120);
        assert_eq!(list_rows(&merged, None, Some(Family::Kintex7)).unwrap().len(), 7);
        assert_eq!(
            list_rows(&merged, None, Some(Family::KintexUltraScalePlus)).unwrap().len(),
            6
        );
        // Vendor and family that never coincide
        assert!(list_rows(&merged, Some(Vendor::Intel), Some(Family::Artix7))
            .unwrap()
            .is_empty());

        let kintex = list_rows(&merged, Some(Vendor::Xilinx), Some(Family::Kintex7)).unwrap();
        assert_eq!(kintex.len(), 7);
        assert!(kintex.iter().all(|row| row.mask == "nover" && row.source == "builtin"));
    }

    #[test]
    fn test_list_marks_user_rows() {
        let user = [FpgaIdEntry::new(0x0ABC_D093, FPGA_ID_MASK_NOVER, "XCPROTO")];
        let merged = merge_tables(&user, IdentifierTable::builtin()).unwrap();

        let rows = list_rows(&merged, Some(Vendor::Xilinx), None).unwrap();
        assert_eq!(rows.len(), 146);
        assert_eq!(rows[0].part, "XCPROTO");
        assert_eq!(rows[0].source, "user");
        assert_eq!(rows[0].family, None);
        assert!(rows[1..].iter().all(|row| row.source == "builtin"));

        assert_eq!(
            list(&merged, None, None, OutputFormat::Json).unwrap(),
            Status::Success
        );
    }

    #[test]
    fn test_export_writes_decodable_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.bin");
        let merged = builtin();

        export(&merged, &path).unwrap();

        let decoded = decode_entries(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(decoded.as_slice(), merged.raw_entries());
        let table = IdentifierTable::new(&decoded).unwrap();
        assert_eq!(table.lookup(FPGA_ID_XC7A200T), "XC7A200T");
    }
}
