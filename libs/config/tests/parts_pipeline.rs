//! Config file → parts file → merged table, end to end

use std::fs;

use fpga_config::{merge_tables, OutputFormat, PartsFile, ToolConfig};
use fpga_id::{get_fpga_part, IdentifierTable, FPGA_ID_XC7A35T};
use tempfile::tempdir;

#[test]
fn user_parts_from_config_resolve_through_merged_table() {
    let dir = tempdir().unwrap();
    let parts_path = dir.path().join("parts.toml");
    fs::write(
        &parts_path,
        r#"
[[part]]
id = "0x0ABCD093"
mask = "nover"
name = "XCPROTO"

[[part]]
id = "0x0362D093"
mask = "nover"
name = "BOARD-A35"
"#,
    )
    .unwrap();

    let config_path = dir.path().join("fpga-part.toml");
    fs::write(
        &config_path,
        format!(
            "output = \"json\"\nparts_file = {:?}\n",
            parts_path.to_string_lossy()
        ),
    )
    .unwrap();

    let config = ToolConfig::load(Some(&config_path)).unwrap();
    assert_eq!(config.output, OutputFormat::Json);

    let path = config.parts_path().unwrap().unwrap();
    let user = PartsFile::load(&path).unwrap();
    let merged = merge_tables(&user, IdentifierTable::builtin()).unwrap();
    let table = merged.table().unwrap();

    assert_eq!(table.lookup(0x3ABC_D093), "XCPROTO");
    assert_eq!(table.lookup(FPGA_ID_XC7A35T), "BOARD-A35");
    assert_eq!(merged.overrides().len(), 1);
    assert_eq!(table.len(), IdentifierTable::builtin().len() + 1);

    // Every other built-in part still resolves the same way
    for entry in IdentifierTable::builtin().iter() {
        if entry.id != FPGA_ID_XC7A35T {
            assert_eq!(table.lookup(entry.id), get_fpga_part(entry.id));
        }
    }
    assert_eq!(table.lookup(0xFFFF_FFFF), "");
}

#[test]
fn conflicting_parts_file_fails_merge() {
    let dir = tempdir().unwrap();
    let parts_path = dir.path().join("parts.toml");
    // Full-mask row for one stepping of a part the built-in table matches on all steppings
    fs::write(
        &parts_path,
        "[[part]]\nid = \"0x1362D093\"\nmask = \"full\"\nname = \"A35-REV1\"\n",
    )
    .unwrap();

    let user = PartsFile::load(&parts_path).unwrap();
    assert!(merge_tables(&user, IdentifierTable::builtin()).is_err());
}
