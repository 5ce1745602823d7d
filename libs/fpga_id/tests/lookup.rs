//! Lookup behaviour over the built-in table
//!
//! Covers the lookup contract: exact ids resolve to their own name, Xilinx
//! steppings collapse onto one name, Intel revisions need an exact match and
//! unknown identifiers come back as the empty string.

use fpga_id::*;

#[test]
fn test_every_entry_matches_its_own_id() {
    for entry in IdentifierTable::builtin().iter() {
        assert_eq!(
            get_fpga_part(entry.id),
            entry.name(),
            "id {:#010x} resolved to the wrong part",
            entry.id
        );
    }
}

#[test]
fn test_concrete_parts() {
    assert_eq!(get_fpga_part(FPGA_ID_XC7A200T), "XC7A200T");
    assert_eq!(get_fpga_part(FPGA_ID_XCVU9P), "XCVU9P");
    assert_eq!(get_fpga_part(FPGA_ID_XCK26), "XCK26");
    assert_eq!(get_fpga_part(FPGA_ID_1SG280L_ES1), "1SG280L(ES1)");
    assert_eq!(get_fpga_part(FPGA_ID_1SG040H_NL), "1SG040H(NL)");
    assert_eq!(get_fpga_part(FPGA_ID_AGIB027R29AR3), "AGIB027R29AR3");
}

#[test]
fn test_xilinx_steppings_share_a_name() {
    for version in 0..16u32 {
        let id = FPGA_ID_XC7A200T | (version << 28);
        assert_eq!(get_fpga_part(id), "XC7A200T", "version {}", version);
    }
}

#[test]
fn test_intel_single_bit_perturbation() {
    let table = IdentifierTable::builtin();
    for bit in 0..32 {
        let perturbed = FPGA_ID_1SG280L_ES1 ^ (1 << bit);
        let exact = table.iter().find(|e| e.id == perturbed);
        let expected = exact.map(|e| e.name()).unwrap_or("");
        assert_eq!(
            get_fpga_part(perturbed),
            expected,
            "bit {} of 1SG280L(ES1)",
            bit
        );
    }
    // Flipping the top version bit lands on no other part
    assert_eq!(get_fpga_part(FPGA_ID_1SG280L_ES1 ^ 0x8000_0000), "");
}

#[test]
fn test_engineering_samples_are_distinct_parts() {
    assert_eq!(get_fpga_part(FPGA_ID_1SG280L), "1SG280L");
    assert_eq!(get_fpga_part(FPGA_ID_1SG280L_ES2), "1SG280L(ES2)");
    assert_eq!(get_fpga_part(FPGA_ID_1SG280L_ES3), "1SG280L(ES3)");
    assert_ne!(FPGA_ID_1SG280L, FPGA_ID_1SG280L_ES1);
}

#[test]
fn test_unknown_identifiers() {
    assert_eq!(get_fpga_part(0xFFFF_FFFF), "");
    assert_eq!(get_fpga_part(0), "");
    // Lattice ECP5 IDCODE
    assert_eq!(get_fpga_part(0x4111_3043), "");
    assert!(IdentifierTable::builtin().find(0xFFFF_FFFF).is_none());
}

#[test]
fn test_find_returns_matching_entry() {
    let table = IdentifierTable::builtin();
    let entry = table.find(FPGA_ID_XC7K325T | 0x2000_0000).unwrap();
    assert_eq!(entry.id, FPGA_ID_XC7K325T);
    assert_eq!(entry.mask, FPGA_ID_MASK_NOVER);
    assert_eq!(entry.part, "XC7K325T");
    assert_eq!(entry.family(), Some(Family::Kintex7));
}

#[test]
fn test_first_match_wins() {
    let entries = [
        FpgaIdEntry::new(0x0363_6093, FPGA_ID_MASK_FULL, "FIRST"),
        FpgaIdEntry::new(0x0363_6093, FPGA_ID_MASK_NOVER, "SECOND"),
        FpgaIdEntry::SENTINEL,
    ];
    let table = IdentifierTable::new(&entries).unwrap();
    assert_eq!(table.lookup(0x0363_6093), "FIRST");
    // Only the wider mask admits other steppings
    assert_eq!(table.lookup(0x1363_6093), "SECOND");
    assert!(table.check_disjoint().is_err());

    let reversed = [entries[1], entries[0], FpgaIdEntry::SENTINEL];
    let table = IdentifierTable::new(&reversed).unwrap();
    assert_eq!(table.lookup(0x0363_6093), "SECOND");
}

#[test]
fn test_repeated_lookups_are_stable() {
    let first = get_fpga_part(FPGA_ID_XCZU9);
    for _ in 0..1000 {
        assert_eq!(get_fpga_part(FPGA_ID_XCZU9), first);
    }
}

#[test]
fn test_concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                let table = IdentifierTable::builtin();
                for entry in table.iter().skip(t).step_by(8) {
                    assert_eq!(table.lookup(entry.id), entry.name());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_vendor_matches_family() {
    for entry in IdentifierTable::builtin().iter() {
        let family = entry.family().unwrap_or_else(|| panic!("{} has no family", entry.part));
        assert_eq!(
            IdCode(entry.id).vendor(),
            Some(family.vendor()),
            "{} vendor field disagrees with its family",
            entry.part
        );
    }
}
