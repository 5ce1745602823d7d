//! # Identifier Table - Masked First-Match Part Lookup
//!
//! ## Purpose
//!
//! Maps a raw device identifier read from hardware to the part number of the
//! FPGA that produced it. The table is an ordered run of
//! `{id, mask, name}` entries closed by a sentinel `{0, 0, ""}`; lookup walks
//! it from the front and stops at the first entry whose masked comparison
//! succeeds:
//!
//! ```text
//! (entry.id ^ id) & entry.mask == 0   →  entry.name
//! entry.id == 0 (sentinel)            →  ""
//! ```
//!
//! ## Invariants
//!
//! - The sentinel is the last entry and the only entry with id 0, so every
//!   scan terminates with a defined result.
//! - No two real entries of the built-in table can match the same
//!   identifier. This is asserted at compile time over [`FPGA_ID_LIST`];
//!   caller-supplied tables can be checked with
//!   [`IdentifierTable::check_disjoint`].
//! - Order is significant: when entries do overlap, the earlier one wins.
//!
//! ## Performance Profile
//!
//! - Lookup is a bounded linear scan over a few hundred 24-byte records.
//! - No allocation, no locking, no logging on the lookup path.
//!
//! ## Examples
//!
//! ```rust
//! use fpga_id::{get_fpga_part, IdentifierTable, FPGA_ID_XC7A200T};
//!
//! assert_eq!(get_fpga_part(FPGA_ID_XC7A200T), "XC7A200T");
//! // Stepping bits are ignored for Xilinx parts
//! assert_eq!(get_fpga_part(FPGA_ID_XC7A200T | 0x3000_0000), "XC7A200T");
//! // Unknown devices resolve to the empty string
//! assert_eq!(get_fpga_part(0xFFFF_FFFF), "");
//!
//! let table = IdentifierTable::builtin();
//! assert!(table.find(0xFFFF_FFFF).is_none());
//! ```

use zerocopy::{AsBytes, FromZeroes};

use crate::constants::*;
use crate::errors::TableError;
use crate::family::Family;
use crate::part_name::PartName;

/// One table row
///
/// Layout matches a C `{int id; int mask; char part[16];}` record: 24 bytes,
/// no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsBytes, FromZeroes)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpgaIdEntry {
    pub id: u32,
    pub mask: u32,
    pub part: PartName,
}

impl FpgaIdEntry {
    /// End-of-table marker and "not found" result
    pub const SENTINEL: FpgaIdEntry = FpgaIdEntry {
        id: 0,
        mask: 0,
        part: PartName::EMPTY,
    };

    /// Build an entry at compile time; see [`PartName::from_static`]
    pub const fn new(id: u32, mask: u32, part: &str) -> Self {
        Self {
            id,
            mask,
            part: PartName::from_static(part),
        }
    }

    /// Build an entry at runtime with name validation
    pub fn with_name(id: u32, mask: u32, part: &str) -> Result<Self, TableError> {
        Ok(Self {
            id,
            mask,
            part: PartName::new(part)?,
        })
    }

    /// True for the `{0, 0, ""}` terminator (any zero-id entry ends a scan)
    pub const fn is_sentinel(&self) -> bool {
        self.id == 0
    }

    /// Masked comparison against a raw identifier
    #[inline]
    pub const fn matches(&self, id: u32) -> bool {
        (self.id ^ id) & self.mask == 0
    }

    /// True if some identifier matches both entries
    pub const fn overlaps(&self, other: &FpgaIdEntry) -> bool {
        (self.id ^ other.id) & (self.mask & other.mask) == 0
    }

    /// Part name
    pub fn name(&self) -> &str {
        self.part.as_str()
    }

    /// Family derived from the part name
    pub fn family(&self) -> Option<Family> {
        Family::from_part_name(self.part.as_str())
    }
}

const BUILTIN_ENTRIES: [FpgaIdEntry; 266] = [
    // Xilinx
    // Spartan 7
    FpgaIdEntry::new(FPGA_ID_XC7S6, FPGA_ID_MASK_NOVER, "XC7S6"),
    FpgaIdEntry::new(FPGA_ID_XC7S15, FPGA_ID_MASK_NOVER, "XC7S15"),
    FpgaIdEntry::new(FPGA_ID_XC7S25, FPGA_ID_MASK_NOVER, "XC7S25"),
    FpgaIdEntry::new(FPGA_ID_XC7S50, FPGA_ID_MASK_NOVER, "XC7S50"),
    FpgaIdEntry::new(FPGA_ID_XC7S75, FPGA_ID_MASK_NOVER, "XC7S75"),
    FpgaIdEntry::new(FPGA_ID_XC7S100, FPGA_ID_MASK_NOVER, "XC7S100"),
    // Artix 7
    FpgaIdEntry::new(FPGA_ID_XC7A15T, FPGA_ID_MASK_NOVER, "XC7A15T"),
    FpgaIdEntry::new(FPGA_ID_XC7A35T, FPGA_ID_MASK_NOVER, "XC7A35T"),
    FpgaIdEntry::new(FPGA_ID_XC7A50T, FPGA_ID_MASK_NOVER, "XC7A50T"),
    FpgaIdEntry::new(FPGA_ID_XC7A75T, FPGA_ID_MASK_NOVER, "XC7A75T"),
    FpgaIdEntry::new(FPGA_ID_XC7A100T, FPGA_ID_MASK_NOVER, "XC7A100T"),
    FpgaIdEntry::new(FPGA_ID_XC7A200T, FPGA_ID_MASK_NOVER, "XC7A200T"),
    // Kintex 7
    FpgaIdEntry::new(FPGA_ID_XC7K70T, FPGA_ID_MASK_NOVER, "XC7K70T"),
    FpgaIdEntry::new(FPGA_ID_XC7K160T, FPGA_ID_MASK_NOVER, "XC7K160T"),
    FpgaIdEntry::new(FPGA_ID_XC7K325T, FPGA_ID_MASK_NOVER, "XC7K325T"),
    FpgaIdEntry::new(FPGA_ID_XC7K355T, FPGA_ID_MASK_NOVER, "XC7K355T"),
    FpgaIdEntry::new(FPGA_ID_XC7K410T, FPGA_ID_MASK_NOVER, "XC7K410T"),
    FpgaIdEntry::new(FPGA_ID_XC7K420T, FPGA_ID_MASK_NOVER, "XC7K420T"),
    FpgaIdEntry::new(FPGA_ID_XC7K480T, FPGA_ID_MASK_NOVER, "XC7K480T"),
    // Virtex 7
    FpgaIdEntry::new(FPGA_ID_XC7V585T, FPGA_ID_MASK_NOVER, "XC7V585T"),
    FpgaIdEntry::new(FPGA_ID_XC7V2000T, FPGA_ID_MASK_NOVER, "XC7V2000T"),
    FpgaIdEntry::new(FPGA_ID_XC7VX330T, FPGA_ID_MASK_NOVER, "XC7VX330T"),
    FpgaIdEntry::new(FPGA_ID_XC7VX415T, FPGA_ID_MASK_NOVER, "XC7VX415T"),
    FpgaIdEntry::new(FPGA_ID_XC7VX485T, FPGA_ID_MASK_NOVER, "XC7VX485T"),
    FpgaIdEntry::new(FPGA_ID_XC7VX550T, FPGA_ID_MASK_NOVER, "XC7VX550T"),
    FpgaIdEntry::new(FPGA_ID_XC7VX690T, FPGA_ID_MASK_NOVER, "XC7VX690T"),
    FpgaIdEntry::new(FPGA_ID_XC7VX980T, FPGA_ID_MASK_NOVER, "XC7VX980T"),
    FpgaIdEntry::new(FPGA_ID_XC7VX1140T, FPGA_ID_MASK_NOVER, "XC7VX1140T"),
    FpgaIdEntry::new(FPGA_ID_XC7VH580T, FPGA_ID_MASK_NOVER, "XC7VH580T"),
    FpgaIdEntry::new(FPGA_ID_XC7VH870T, FPGA_ID_MASK_NOVER, "XC7VH870T"),
    // Zynq 7000
    FpgaIdEntry::new(FPGA_ID_XC7Z007, FPGA_ID_MASK_NOVER, "XC7Z007"),
    FpgaIdEntry::new(FPGA_ID_XC7Z010, FPGA_ID_MASK_NOVER, "XC7Z010"),
    FpgaIdEntry::new(FPGA_ID_XC7Z012, FPGA_ID_MASK_NOVER, "XC7Z012"),
    FpgaIdEntry::new(FPGA_ID_XC7Z014, FPGA_ID_MASK_NOVER, "XC7Z014"),
    FpgaIdEntry::new(FPGA_ID_XC7Z015, FPGA_ID_MASK_NOVER, "XC7Z015"),
    FpgaIdEntry::new(FPGA_ID_XC7Z020, FPGA_ID_MASK_NOVER, "XC7Z020"),
    FpgaIdEntry::new(FPGA_ID_XC7Z030, FPGA_ID_MASK_NOVER, "XC7Z030"),
    FpgaIdEntry::new(FPGA_ID_XC7Z035, FPGA_ID_MASK_NOVER, "XC7Z035"),
    FpgaIdEntry::new(FPGA_ID_XC7Z045, FPGA_ID_MASK_NOVER, "XC7Z045"),
    FpgaIdEntry::new(FPGA_ID_XC7Z100, FPGA_ID_MASK_NOVER, "XC7Z100"),
    // Kintex UltraScale
    FpgaIdEntry::new(FPGA_ID_XCKU025, FPGA_ID_MASK_NOVER, "XCKU025"),
    FpgaIdEntry::new(FPGA_ID_XCKU035, FPGA_ID_MASK_NOVER, "XCKU035"),
    FpgaIdEntry::new(FPGA_ID_XCKU040, FPGA_ID_MASK_NOVER, "XCKU040"),
    FpgaIdEntry::new(FPGA_ID_XCKU060, FPGA_ID_MASK_NOVER, "XCKU060"),
    FpgaIdEntry::new(FPGA_ID_XCKU085, FPGA_ID_MASK_NOVER, "XCKU085"),
    FpgaIdEntry::new(FPGA_ID_XCKU095, FPGA_ID_MASK_NOVER, "XCKU095"),
    FpgaIdEntry::new(FPGA_ID_XCKU115, FPGA_ID_MASK_NOVER, "XCKU115"),
    // Virtex UltraScale
    FpgaIdEntry::new(FPGA_ID_XCVU065, FPGA_ID_MASK_NOVER, "XCVU065"),
    FpgaIdEntry::new(FPGA_ID_XCVU080, FPGA_ID_MASK_NOVER, "XCVU080"),
    FpgaIdEntry::new(FPGA_ID_XCVU095, FPGA_ID_MASK_NOVER, "XCVU095"),
    FpgaIdEntry::new(FPGA_ID_XCVU125, FPGA_ID_MASK_NOVER, "XCVU125"),
    FpgaIdEntry::new(FPGA_ID_XCVU160, FPGA_ID_MASK_NOVER, "XCVU160"),
    FpgaIdEntry::new(FPGA_ID_XCVU190, FPGA_ID_MASK_NOVER, "XCVU190"),
    FpgaIdEntry::new(FPGA_ID_XCVU440, FPGA_ID_MASK_NOVER, "XCVU440"),
    // Artix UltraScale+
    FpgaIdEntry::new(FPGA_ID_XCAU10P, FPGA_ID_MASK_NOVER, "XCAU10P"),
    FpgaIdEntry::new(FPGA_ID_XCAU15P, FPGA_ID_MASK_NOVER, "XCAU15P"),
    FpgaIdEntry::new(FPGA_ID_XCAU20P, FPGA_ID_MASK_NOVER, "XCAU20P"),
    FpgaIdEntry::new(FPGA_ID_XCAU25P, FPGA_ID_MASK_NOVER, "XCAU25P"),
    // Kintex UltraScale+
    FpgaIdEntry::new(FPGA_ID_XCKU3P, FPGA_ID_MASK_NOVER, "XCKU3P"),
    FpgaIdEntry::new(FPGA_ID_XCKU5P, FPGA_ID_MASK_NOVER, "XCKU5P"),
    FpgaIdEntry::new(FPGA_ID_XCKU9P, FPGA_ID_MASK_NOVER, "XCKU9P"),
    FpgaIdEntry::new(FPGA_ID_XCKU11P, FPGA_ID_MASK_NOVER, "XCKU11P"),
    FpgaIdEntry::new(FPGA_ID_XCKU13P, FPGA_ID_MASK_NOVER, "XCKU13P"),
    FpgaIdEntry::new(FPGA_ID_XCKU15P, FPGA_ID_MASK_NOVER, "XCKU15P"),
    // Virtex UltraScale+
    FpgaIdEntry::new(FPGA_ID_XCVU3P, FPGA_ID_MASK_NOVER, "XCVU3P"),
    FpgaIdEntry::new(FPGA_ID_XCVU5P, FPGA_ID_MASK_NOVER, "XCVU5P"),
    FpgaIdEntry::new(FPGA_ID_XCVU7P, FPGA_ID_MASK_NOVER, "XCVU7P"),
    FpgaIdEntry::new(FPGA_ID_XCVU9P, FPGA_ID_MASK_NOVER, "XCVU9P"),
    FpgaIdEntry::new(FPGA_ID_XCVU11P, FPGA_ID_MASK_NOVER, "XCVU11P"),
    FpgaIdEntry::new(FPGA_ID_XCVU13P, FPGA_ID_MASK_NOVER, "XCVU13P"),
    FpgaIdEntry::new(FPGA_ID_XCVU19P, FPGA_ID_MASK_NOVER, "XCVU19P"),
    FpgaIdEntry::new(FPGA_ID_XCVU23P, FPGA_ID_MASK_NOVER, "XCVU23P"),
    FpgaIdEntry::new(FPGA_ID_XCVU27P, FPGA_ID_MASK_NOVER, "XCVU27P"),
    FpgaIdEntry::new(FPGA_ID_XCVU29P, FPGA_ID_MASK_NOVER, "XCVU29P"),
    FpgaIdEntry::new(FPGA_ID_XCVU31P, FPGA_ID_MASK_NOVER, "XCVU31P"),
    FpgaIdEntry::new(FPGA_ID_XCVU33P, FPGA_ID_MASK_NOVER, "XCVU33P"),
    FpgaIdEntry::new(FPGA_ID_XCVU35P, FPGA_ID_MASK_NOVER, "XCVU35P"),
    FpgaIdEntry::new(FPGA_ID_XCVU37P, FPGA_ID_MASK_NOVER, "XCVU37P"),
    FpgaIdEntry::new(FPGA_ID_XCVU45P, FPGA_ID_MASK_NOVER, "XCVU45P"),
    FpgaIdEntry::new(FPGA_ID_XCVU47P, FPGA_ID_MASK_NOVER, "XCVU47P"),
    FpgaIdEntry::new(FPGA_ID_XCVU57P, FPGA_ID_MASK_NOVER, "XCVU57P"),
    // Zynq UltraScale+
    FpgaIdEntry::new(FPGA_ID_XCZU1, FPGA_ID_MASK_NOVER, "XCZU1"),
    FpgaIdEntry::new(FPGA_ID_XCZU2, FPGA_ID_MASK_NOVER, "XCZU2"),
    FpgaIdEntry::new(FPGA_ID_XCZU3, FPGA_ID_MASK_NOVER, "XCZU3"),
    FpgaIdEntry::new(FPGA_ID_XCZU4, FPGA_ID_MASK_NOVER, "XCZU4"),
    FpgaIdEntry::new(FPGA_ID_XCZU5, FPGA_ID_MASK_NOVER, "XCZU5"),
    FpgaIdEntry::new(FPGA_ID_XCZU6, FPGA_ID_MASK_NOVER, "XCZU6"),
    FpgaIdEntry::new(FPGA_ID_XCZU7, FPGA_ID_MASK_NOVER, "XCZU7"),
    FpgaIdEntry::new(FPGA_ID_XCZU9, FPGA_ID_MASK_NOVER, "XCZU9"),
    FpgaIdEntry::new(FPGA_ID_XCZU11, FPGA_ID_MASK_NOVER, "XCZU11"),
    FpgaIdEntry::new(FPGA_ID_XCZU15, FPGA_ID_MASK_NOVER, "XCZU15"),
    FpgaIdEntry::new(FPGA_ID_XCZU17, FPGA_ID_MASK_NOVER, "XCZU17"),
    FpgaIdEntry::new(FPGA_ID_XCZU19, FPGA_ID_MASK_NOVER, "XCZU19"),
    FpgaIdEntry::new(FPGA_ID_XCZU21, FPGA_ID_MASK_NOVER, "XCZU21"),
    FpgaIdEntry::new(FPGA_ID_XCZU25, FPGA_ID_MASK_NOVER, "XCZU25"),
    FpgaIdEntry::new(FPGA_ID_XCZU27, FPGA_ID_MASK_NOVER, "XCZU27"),
    FpgaIdEntry::new(FPGA_ID_XCZU28, FPGA_ID_MASK_NOVER, "XCZU28"),
    FpgaIdEntry::new(FPGA_ID_XCZU29, FPGA_ID_MASK_NOVER, "XCZU29"),
    FpgaIdEntry::new(FPGA_ID_XCZU39, FPGA_ID_MASK_NOVER, "XCZU39"),
    FpgaIdEntry::new(FPGA_ID_XCZU43, FPGA_ID_MASK_NOVER, "XCZU43"),
    FpgaIdEntry::new(FPGA_ID_XCZU46, FPGA_ID_MASK_NOVER, "XCZU46"),
    FpgaIdEntry::new(FPGA_ID_XCZU47, FPGA_ID_MASK_NOVER, "XCZU47"),
    FpgaIdEntry::new(FPGA_ID_XCZU48, FPGA_ID_MASK_NOVER, "XCZU48"),
    FpgaIdEntry::new(FPGA_ID_XCZU49, FPGA_ID_MASK_NOVER, "XCZU49"),
    FpgaIdEntry::new(FPGA_ID_XCZU65, FPGA_ID_MASK_NOVER, "XCZU65"),
    FpgaIdEntry::new(FPGA_ID_XCZU67, FPGA_ID_MASK_NOVER, "XCZU67"),
    // Kria SoM (Zynq UltraScale+)
    FpgaIdEntry::new(FPGA_ID_XCK26, FPGA_ID_MASK_NOVER, "XCK26"),
    // Alveo (Virtex UltraScale+)
    FpgaIdEntry::new(FPGA_ID_XCU50, FPGA_ID_MASK_NOVER, "XCU50"),
    FpgaIdEntry::new(FPGA_ID_XCU200, FPGA_ID_MASK_NOVER, "XCU200"),
    FpgaIdEntry::new(FPGA_ID_XCU250, FPGA_ID_MASK_NOVER, "XCU250"),
    FpgaIdEntry::new(FPGA_ID_XCU280, FPGA_ID_MASK_NOVER, "XCU280"),
    // Versal AI Edge
    FpgaIdEntry::new(FPGA_ID_XCVE1752, FPGA_ID_MASK_NOVER, "XCVE1752"),
    FpgaIdEntry::new(FPGA_ID_XCVE2002, FPGA_ID_MASK_NOVER, "XCVE2002"),
    FpgaIdEntry::new(FPGA_ID_XCVE2102, FPGA_ID_MASK_NOVER, "XCVE2102"),
    FpgaIdEntry::new(FPGA_ID_XCVE2202, FPGA_ID_MASK_NOVER, "XCVE2202"),
    FpgaIdEntry::new(FPGA_ID_XCVE2302, FPGA_ID_MASK_NOVER, "XCVE2302"),
    FpgaIdEntry::new(FPGA_ID_XCVE2602, FPGA_ID_MASK_NOVER, "XCVE2602"),
    FpgaIdEntry::new(FPGA_ID_XCVE2802, FPGA_ID_MASK_NOVER, "XCVE2802"),
    // Versal AI Core
    FpgaIdEntry::new(FPGA_ID_XCVC1352, FPGA_ID_MASK_NOVER, "XCVC1352"),
    FpgaIdEntry::new(FPGA_ID_XCVC1502, FPGA_ID_MASK_NOVER, "XCVC1502"),
    FpgaIdEntry::new(FPGA_ID_XCVC1702, FPGA_ID_MASK_NOVER, "XCVC1702"),
    FpgaIdEntry::new(FPGA_ID_XCVC1802, FPGA_ID_MASK_NOVER, "XCVC1802"),
    FpgaIdEntry::new(FPGA_ID_XCVC1902, FPGA_ID_MASK_NOVER, "XCVC1902"),
    FpgaIdEntry::new(FPGA_ID_XCVC2602, FPGA_ID_MASK_NOVER, "XCVC2602"),
    FpgaIdEntry::new(FPGA_ID_XCVC2802, FPGA_ID_MASK_NOVER, "XCVC2802"),
    // Versal Prime
    FpgaIdEntry::new(FPGA_ID_XCVM1102, FPGA_ID_MASK_NOVER, "XCVM1102"),
    FpgaIdEntry::new(FPGA_ID_XCVM1302, FPGA_ID_MASK_NOVER, "XCVM1302"),
    FpgaIdEntry::new(FPGA_ID_XCVM1402, FPGA_ID_MASK_NOVER, "XCVM1402"),
    FpgaIdEntry::new(FPGA_ID_XCVM1502, FPGA_ID_MASK_NOVER, "XCVM1502"),
    FpgaIdEntry::new(FPGA_ID_XCVM1802, FPGA_ID_MASK_NOVER, "XCVM1802"),
    FpgaIdEntry::new(FPGA_ID_XCVM2202, FPGA_ID_MASK_NOVER, "XCVM2202"),
    FpgaIdEntry::new(FPGA_ID_XCVM2302, FPGA_ID_MASK_NOVER, "XCVM2302"),
    FpgaIdEntry::new(FPGA_ID_XCVM2502, FPGA_ID_MASK_NOVER, "XCVM2502"),
    FpgaIdEntry::new(FPGA_ID_XCVM2902, FPGA_ID_MASK_NOVER, "XCVM2902"),
    // Versal Premium
    FpgaIdEntry::new(FPGA_ID_XCVP1002, FPGA_ID_MASK_NOVER, "XCVP1002"),
    FpgaIdEntry::new(FPGA_ID_XCVP1052, FPGA_ID_MASK_NOVER, "XCVP1052"),
    FpgaIdEntry::new(FPGA_ID_XCVP1102, FPGA_ID_MASK_NOVER, "XCVP1102"),
    FpgaIdEntry::new(FPGA_ID_XCVP1202, FPGA_ID_MASK_NOVER, "XCVP1202"),
    FpgaIdEntry::new(FPGA_ID_XCVP1402, FPGA_ID_MASK_NOVER, "XCVP1402"),
    FpgaIdEntry::new(FPGA_ID_XCVP1502, FPGA_ID_MASK_NOVER, "XCVP1502"),
    FpgaIdEntry::new(FPGA_ID_XCVP1552, FPGA_ID_MASK_NOVER, "XCVP1552"),
    FpgaIdEntry::new(FPGA_ID_XCVP1702, FPGA_ID_MASK_NOVER, "XCVP1702"),
    FpgaIdEntry::new(FPGA_ID_XCVP1802, FPGA_ID_MASK_NOVER, "XCVP1802"),
    FpgaIdEntry::new(FPGA_ID_XCVP2502, FPGA_ID_MASK_NOVER, "XCVP2502"),
    FpgaIdEntry::new(FPGA_ID_XCVP2802, FPGA_ID_MASK_NOVER, "XCVP2802"),

    // Intel
    // Stratix 10
    FpgaIdEntry::new(FPGA_ID_1SG10MH_U1, FPGA_ID_MASK_FULL, "1SG10MH_U1"),
    FpgaIdEntry::new(FPGA_ID_1SG10MH_U2, FPGA_ID_MASK_FULL, "1SG10MH_U2"),
    FpgaIdEntry::new(FPGA_ID_1SG040H, FPGA_ID_MASK_FULL, "1SG040H"),
    FpgaIdEntry::new(FPGA_ID_1SG040H_NL, FPGA_ID_MASK_FULL, "1SG040H(NL)"),
    FpgaIdEntry::new(FPGA_ID_1SG065H, FPGA_ID_MASK_FULL, "1SG065H"),
    FpgaIdEntry::new(FPGA_ID_1SG065H_NL, FPGA_ID_MASK_FULL, "1SG065H(NL)"),
    FpgaIdEntry::new(FPGA_ID_1SG085H, FPGA_ID_MASK_FULL, "1SG085H"),
    FpgaIdEntry::new(FPGA_ID_1SG110H, FPGA_ID_MASK_FULL, "1SG110H"),
    FpgaIdEntry::new(FPGA_ID_1SG110H_NL, FPGA_ID_MASK_FULL, "1SG110H(NL)"),
    FpgaIdEntry::new(FPGA_ID_1SG165H, FPGA_ID_MASK_FULL, "1SG165H"),
    FpgaIdEntry::new(FPGA_ID_1SG166H, FPGA_ID_MASK_FULL, "1SG166H"),
    FpgaIdEntry::new(FPGA_ID_1SG166H_NL, FPGA_ID_MASK_FULL, "1SG166H(NL)"),
    FpgaIdEntry::new(FPGA_ID_1SG210H, FPGA_ID_MASK_FULL, "1SG210H"),
    FpgaIdEntry::new(FPGA_ID_1SG210H_ES1, FPGA_ID_MASK_FULL, "1SG210H(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SG211H, FPGA_ID_MASK_FULL, "1SG211H"),
    FpgaIdEntry::new(FPGA_ID_1SG250L, FPGA_ID_MASK_FULL, "1SG250L"),
    FpgaIdEntry::new(FPGA_ID_1SG250H, FPGA_ID_MASK_FULL, "1SG250H"),
    FpgaIdEntry::new(FPGA_ID_1SG280L, FPGA_ID_MASK_FULL, "1SG280L"),
    FpgaIdEntry::new(FPGA_ID_1SG280L_NL, FPGA_ID_MASK_FULL, "1SG280L(NL)"),
    FpgaIdEntry::new(FPGA_ID_1SG280L_ES1, FPGA_ID_MASK_FULL, "1SG280L(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SG280L_ES2, FPGA_ID_MASK_FULL, "1SG280L(ES2)"),
    FpgaIdEntry::new(FPGA_ID_1SG280L_ES3, FPGA_ID_MASK_FULL, "1SG280L(ES3)"),
    FpgaIdEntry::new(FPGA_ID_1SG280H, FPGA_ID_MASK_FULL, "1SG280H"),
    FpgaIdEntry::new(FPGA_ID_1SG280H_NL, FPGA_ID_MASK_FULL, "1SG280H(NL)"),
    FpgaIdEntry::new(FPGA_ID_1SG280H_ES1, FPGA_ID_MASK_FULL, "1SG280H(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SG280H_ES2, FPGA_ID_MASK_FULL, "1SG280H(ES2)"),
    FpgaIdEntry::new(FPGA_ID_1SG280H_ES3, FPGA_ID_MASK_FULL, "1SG280H(ES3)"),
    FpgaIdEntry::new(FPGA_ID_1SX040H, FPGA_ID_MASK_FULL, "1SX040H"),
    FpgaIdEntry::new(FPGA_ID_1SX065H, FPGA_ID_MASK_FULL, "1SX065H"),
    FpgaIdEntry::new(FPGA_ID_1SX085H, FPGA_ID_MASK_FULL, "1SX085H"),
    FpgaIdEntry::new(FPGA_ID_1SX110H, FPGA_ID_MASK_FULL, "1SX110H"),
    FpgaIdEntry::new(FPGA_ID_1SX165H, FPGA_ID_MASK_FULL, "1SX165H"),
    FpgaIdEntry::new(FPGA_ID_1SX210H, FPGA_ID_MASK_FULL, "1SX210H"),
    FpgaIdEntry::new(FPGA_ID_1SX250L, FPGA_ID_MASK_FULL, "1SX250L"),
    FpgaIdEntry::new(FPGA_ID_1SX250H, FPGA_ID_MASK_FULL, "1SX250H"),
    FpgaIdEntry::new(FPGA_ID_1SX280L, FPGA_ID_MASK_FULL, "1SX280L"),
    FpgaIdEntry::new(FPGA_ID_1SX280L_ES1, FPGA_ID_MASK_FULL, "1SX280L(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SX280L_ES2, FPGA_ID_MASK_FULL, "1SX280L(ES2)"),
    FpgaIdEntry::new(FPGA_ID_1SX280H, FPGA_ID_MASK_FULL, "1SX280H"),
    FpgaIdEntry::new(FPGA_ID_1SX280H_ES1, FPGA_ID_MASK_FULL, "1SX280H(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SX280H_ES2, FPGA_ID_MASK_FULL, "1SX280H(ES2)"),
    FpgaIdEntry::new(FPGA_ID_1ST040E, FPGA_ID_MASK_FULL, "1ST040E"),
    FpgaIdEntry::new(FPGA_ID_1ST040E_NL, FPGA_ID_MASK_FULL, "1ST040E(NL)"),
    FpgaIdEntry::new(FPGA_ID_1ST085E, FPGA_ID_MASK_FULL, "1ST085E"),
    FpgaIdEntry::new(FPGA_ID_1ST110E, FPGA_ID_MASK_FULL, "1ST110E"),
    FpgaIdEntry::new(FPGA_ID_1ST110E_NL, FPGA_ID_MASK_FULL, "1ST110E(NL)"),
    FpgaIdEntry::new(FPGA_ID_1ST165E, FPGA_ID_MASK_FULL, "1ST165E"),
    FpgaIdEntry::new(FPGA_ID_1ST210E, FPGA_ID_MASK_FULL, "1ST210E"),
    FpgaIdEntry::new(FPGA_ID_1ST210E_ES1, FPGA_ID_MASK_FULL, "1ST210E(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1ST250E, FPGA_ID_MASK_FULL, "1ST250E"),
    FpgaIdEntry::new(FPGA_ID_1ST280E, FPGA_ID_MASK_FULL, "1ST280E"),
    FpgaIdEntry::new(FPGA_ID_1ST280E_ES1, FPGA_ID_MASK_FULL, "1ST280E(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SM16BE, FPGA_ID_MASK_FULL, "1SM16BE"),
    FpgaIdEntry::new(FPGA_ID_1SM16BE_ES1, FPGA_ID_MASK_FULL, "1SM16BE(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SM16BH, FPGA_ID_MASK_FULL, "1SM16BH"),
    FpgaIdEntry::new(FPGA_ID_1SM16BH_ES1, FPGA_ID_MASK_FULL, "1SM16BH(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SM16CH, FPGA_ID_MASK_FULL, "1SM16CH"),
    FpgaIdEntry::new(FPGA_ID_1SM16CH_ES1, FPGA_ID_MASK_FULL, "1SM16CH(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SM21BE, FPGA_ID_MASK_FULL, "1SM21BE"),
    FpgaIdEntry::new(FPGA_ID_1SM21BE_ES1, FPGA_ID_MASK_FULL, "1SM21BE(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SM21BH, FPGA_ID_MASK_FULL, "1SM21BH"),
    FpgaIdEntry::new(FPGA_ID_1SM21BH_ES1, FPGA_ID_MASK_FULL, "1SM21BH(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SM21CH, FPGA_ID_MASK_FULL, "1SM21CH"),
    FpgaIdEntry::new(FPGA_ID_1SM21CH_ES1, FPGA_ID_MASK_FULL, "1SM21CH(ES1)"),
    FpgaIdEntry::new(FPGA_ID_1SD110P, FPGA_ID_MASK_FULL, "1SD110P"),
    FpgaIdEntry::new(FPGA_ID_1SD110P_NL, FPGA_ID_MASK_FULL, "1SD110P(NL)"),
    FpgaIdEntry::new(FPGA_ID_1SD21BP, FPGA_ID_MASK_FULL, "1SD21BP"),
    FpgaIdEntry::new(FPGA_ID_1SD280P, FPGA_ID_MASK_FULL, "1SD280P"),
    // Agilex
    FpgaIdEntry::new(FPGA_ID_AGFA006R16A, FPGA_ID_MASK_FULL, "AGFA006R16A"),
    FpgaIdEntry::new(FPGA_ID_AGFA008R16A, FPGA_ID_MASK_FULL, "AGFA008R16A"),
    FpgaIdEntry::new(FPGA_ID_AGFA012R24A, FPGA_ID_MASK_FULL, "AGFA012R24A"),
    FpgaIdEntry::new(FPGA_ID_AGFA012R24B, FPGA_ID_MASK_FULL, "AGFA012R24B"),
    FpgaIdEntry::new(FPGA_ID_AGFA014R24AR0, FPGA_ID_MASK_FULL, "AGFA014R24AR0"),
    FpgaIdEntry::new(FPGA_ID_AGFA014R24A, FPGA_ID_MASK_FULL, "AGFA014R24A"),
    FpgaIdEntry::new(FPGA_ID_AGFA014R24B, FPGA_ID_MASK_FULL, "AGFA014R24B"),
    FpgaIdEntry::new(FPGA_ID_AGFA019R25A, FPGA_ID_MASK_FULL, "AGFA019R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFA022R24C, FPGA_ID_MASK_FULL, "AGFA022R24C"),
    FpgaIdEntry::new(FPGA_ID_AGFA022R25A, FPGA_ID_MASK_FULL, "AGFA022R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFA022R31C, FPGA_ID_MASK_FULL, "AGFA022R31C"),
    FpgaIdEntry::new(FPGA_ID_AGFA023R25AR0, FPGA_ID_MASK_FULL, "AGFA023R25AR0"),
    FpgaIdEntry::new(FPGA_ID_AGFA023R25A, FPGA_ID_MASK_FULL, "AGFA023R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFA027R24CR0, FPGA_ID_MASK_FULL, "AGFA027R24CR0"),
    FpgaIdEntry::new(FPGA_ID_AGFA027R24CR2, FPGA_ID_MASK_FULL, "AGFA027R24CR2"),
    FpgaIdEntry::new(FPGA_ID_AGFA027R24C, FPGA_ID_MASK_FULL, "AGFA027R24C"),
    FpgaIdEntry::new(FPGA_ID_AGFA027R25AR0, FPGA_ID_MASK_FULL, "AGFA027R25AR0"),
    FpgaIdEntry::new(FPGA_ID_AGFA027R25A, FPGA_ID_MASK_FULL, "AGFA027R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFA027R31C, FPGA_ID_MASK_FULL, "AGFA027R31C"),
    FpgaIdEntry::new(FPGA_ID_AGFB006R16A, FPGA_ID_MASK_FULL, "AGFB006R16A"),
    FpgaIdEntry::new(FPGA_ID_AGFB008R16A, FPGA_ID_MASK_FULL, "AGFB008R16A"),
    FpgaIdEntry::new(FPGA_ID_AGFB012R24A, FPGA_ID_MASK_FULL, "AGFB012R24A"),
    FpgaIdEntry::new(FPGA_ID_AGFB012R24B, FPGA_ID_MASK_FULL, "AGFB012R24B"),
    FpgaIdEntry::new(FPGA_ID_AGFB014R24AR0, FPGA_ID_MASK_FULL, "AGFB014R24AR0"),
    FpgaIdEntry::new(FPGA_ID_AGFB014R24A, FPGA_ID_MASK_FULL, "AGFB014R24A"),
    FpgaIdEntry::new(FPGA_ID_AGFB014R24B, FPGA_ID_MASK_FULL, "AGFB014R24B"),
    FpgaIdEntry::new(FPGA_ID_AGFB019R25A, FPGA_ID_MASK_FULL, "AGFB019R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFB022R24C, FPGA_ID_MASK_FULL, "AGFB022R24C"),
    FpgaIdEntry::new(FPGA_ID_AGFB022R25A, FPGA_ID_MASK_FULL, "AGFB022R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFB022R31C, FPGA_ID_MASK_FULL, "AGFB022R31C"),
    FpgaIdEntry::new(FPGA_ID_AGFB023R25AR0, FPGA_ID_MASK_FULL, "AGFB023R25AR0"),
    FpgaIdEntry::new(FPGA_ID_AGFB023R25A, FPGA_ID_MASK_FULL, "AGFB023R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFB027R24CR0, FPGA_ID_MASK_FULL, "AGFB027R24CR0"),
    FpgaIdEntry::new(FPGA_ID_AGFB027R24CR2, FPGA_ID_MASK_FULL, "AGFB027R24CR2"),
    FpgaIdEntry::new(FPGA_ID_AGFB027R24C, FPGA_ID_MASK_FULL, "AGFB027R24C"),
    FpgaIdEntry::new(FPGA_ID_AGFB027R25AR0, FPGA_ID_MASK_FULL, "AGFB027R25AR0"),
    FpgaIdEntry::new(FPGA_ID_AGFB027R25A, FPGA_ID_MASK_FULL, "AGFB027R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFB027R31C, FPGA_ID_MASK_FULL, "AGFB027R31C"),
    FpgaIdEntry::new(FPGA_ID_AGFC019R25A, FPGA_ID_MASK_FULL, "AGFC019R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFC023R25AR0, FPGA_ID_MASK_FULL, "AGFC023R25AR0"),
    FpgaIdEntry::new(FPGA_ID_AGFC023R25A, FPGA_ID_MASK_FULL, "AGFC023R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFD019R25A, FPGA_ID_MASK_FULL, "AGFD019R25A"),
    FpgaIdEntry::new(FPGA_ID_AGFD023R25AR0, FPGA_ID_MASK_FULL, "AGFD023R25AR0"),
    FpgaIdEntry::new(FPGA_ID_AGFD023R25A, FPGA_ID_MASK_FULL, "AGFD023R25A"),
    FpgaIdEntry::new(FPGA_ID_AGIB022R29A, FPGA_ID_MASK_FULL, "AGIB022R29A"),
    FpgaIdEntry::new(FPGA_ID_AGIB022R31B, FPGA_ID_MASK_FULL, "AGIB022R31B"),
    FpgaIdEntry::new(FPGA_ID_AGIB027R29AR0, FPGA_ID_MASK_FULL, "AGIB027R29AR0"),
    FpgaIdEntry::new(FPGA_ID_AGIB027R29AR1, FPGA_ID_MASK_FULL, "AGIB027R29AR1"),
    FpgaIdEntry::new(FPGA_ID_AGIB027R29AR3, FPGA_ID_MASK_FULL, "AGIB027R29AR3"),
    FpgaIdEntry::new(FPGA_ID_AGIB027R29A, FPGA_ID_MASK_FULL, "AGIB027R29A"),
    FpgaIdEntry::new(FPGA_ID_AGIB027R31BR0, FPGA_ID_MASK_FULL, "AGIB027R31BR0"),
    FpgaIdEntry::new(FPGA_ID_AGIB027R31B, FPGA_ID_MASK_FULL, "AGIB027R31B"),

    // end of list
    FpgaIdEntry::SENTINEL,
];

/// Built-in identifier list, sentinel-terminated
pub static FPGA_ID_LIST: [FpgaIdEntry; 266] = BUILTIN_ENTRIES;

/// First pair of real entries that can match the same identifier
const fn first_overlap(entries: &[FpgaIdEntry]) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < entries.len() && !entries[i].is_sentinel() {
        let mut j = 0;
        while j < i {
            if entries[j].overlaps(&entries[i]) {
                return Some((j, i));
            }
            j += 1;
        }
        i += 1;
    }
    None
}

const fn first_sentinel(entries: &[FpgaIdEntry]) -> Option<usize> {
    let mut i = 0;
    while i < entries.len() {
        if entries[i].is_sentinel() {
            return Some(i);
        }
        i += 1;
    }
    None
}

const _: () = {
    let len = BUILTIN_ENTRIES.len();
    assert!(
        matches!(first_sentinel(&BUILTIN_ENTRIES), Some(i) if i == len - 1),
        "built-in table must end with exactly one sentinel"
    );
    assert!(
        BUILTIN_ENTRIES[len - 1].mask == 0 && BUILTIN_ENTRIES[len - 1].part.is_empty(),
        "sentinel must have id 0, mask 0 and an empty name"
    );
    assert!(
        first_overlap(&BUILTIN_ENTRIES).is_none(),
        "built-in table has overlapping entries"
    );
};

/// Read-only view over a sentinel-terminated entry slice
#[derive(Debug, Clone, Copy)]
pub struct IdentifierTable<'a> {
    entries: &'a [FpgaIdEntry],
}

impl IdentifierTable<'static> {
    /// The compiled-in table
    pub fn builtin() -> Self {
        Self {
            entries: &FPGA_ID_LIST,
        }
    }
}

impl Default for IdentifierTable<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IdentifierTable<'a> {
    /// Wrap a caller-supplied table
    ///
    /// The slice must end with the sentinel and contain no other zero-id
    /// entry. Overlap between entries is allowed here (first match wins);
    /// use [`check_disjoint`](Self::check_disjoint) to reject it.
    pub fn new(entries: &'a [FpgaIdEntry]) -> Result<Self, TableError> {
        let len = entries.len();
        match first_sentinel(entries) {
            None => Err(TableError::MissingSentinel { len }),
            Some(index) if index != len - 1 => Err(TableError::MisplacedSentinel { index, len }),
            Some(_) => Ok(Self { entries }),
        }
    }

    /// Part name for `id`, or `""` if no entry matches
    ///
    /// Never fails and never allocates. Callers treat the empty string as
    /// "unknown device".
    pub fn lookup(&self, id: u32) -> &'a str {
        match self.scan(id) {
            Some(entry) => entry.part.as_str(),
            None => "",
        }
    }

    /// Matching entry for `id`, or `None` instead of the sentinel
    pub fn find(&self, id: u32) -> Option<&'a FpgaIdEntry> {
        self.scan(id)
    }

    #[inline]
    fn scan(&self, id: u32) -> Option<&'a FpgaIdEntry> {
        for entry in self.entries {
            if entry.is_sentinel() {
                return None;
            }
            if entry.matches(id) {
                return Some(entry);
            }
        }
        None
    }

    /// Real entries in table order, sentinel excluded
    pub fn entries(&self) -> &'a [FpgaIdEntry] {
        let end = first_sentinel(self.entries).unwrap_or(self.entries.len());
        &self.entries[..end]
    }

    /// Full backing slice, sentinel included
    pub fn raw_entries(&self) -> &'a [FpgaIdEntry] {
        self.entries
    }

    /// Iterate real entries in table order
    pub fn iter(&self) -> std::slice::Iter<'a, FpgaIdEntry> {
        self.entries().iter()
    }

    /// Number of real entries
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True if the table holds only the sentinel
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject tables where some identifier could match two entries
    pub fn check_disjoint(&self) -> Result<(), TableError> {
        match first_overlap(self.entries) {
            None => Ok(()),
            Some((first, second)) => Err(TableError::Overlap {
                first,
                second,
                first_name: self.entries[first].name().to_string(),
                second_name: self.entries[second].name().to_string(),
            }),
        }
    }

    /// Reject real entries that would be confused with the sentinel or with
    /// "unknown"
    pub fn check_names(&self) -> Result<(), TableError> {
        for (index, entry) in self.entries().iter().enumerate() {
            if entry.part.is_empty() {
                return Err(TableError::EmptyName {
                    index,
                    id: entry.id,
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &IdentifierTable<'a> {
    type Item = &'a FpgaIdEntry;
    type IntoIter = std::slice::Iter<'a, FpgaIdEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Part name for `id` from the built-in table, or `""` if unknown
pub fn get_fpga_part(id: u32) -> &'static str {
    IdentifierTable::builtin().lookup(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_layout() {
        assert_eq!(std::mem::size_of::<FpgaIdEntry>(), 24);
        let entry = FpgaIdEntry::new(0x0362_D093, FPGA_ID_MASK_NOVER, "XC7A35T");
        let bytes = entry.as_bytes();
        assert_eq!(&bytes[0..4], &0x0362_D093u32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &FPGA_ID_MASK_NOVER.to_ne_bytes());
        assert_eq!(&bytes[8..15], b"XC7A35T");
        assert_eq!(bytes[15], 0);
    }

    #[test]
    fn test_builtin_shape() {
        let table = IdentifierTable::builtin();
        assert_eq!(table.len(), FPGA_ID_LIST.len() - 1);
        assert_eq!(table.raw_entries().last(), Some(&FpgaIdEntry::SENTINEL));
        assert!(table.check_disjoint().is_ok());
        assert!(table.check_names().is_ok());
    }

    #[test]
    fn test_sentinel_ends_scan_before_mask_check() {
        // A zero-id entry ends the scan even if its mask would reject the id
        let entries = [
            FpgaIdEntry::new(0x0000_1093, FPGA_ID_MASK_FULL, "A"),
            FpgaIdEntry::SENTINEL,
        ];
        let table = IdentifierTable::new(&entries).unwrap();
        assert_eq!(table.lookup(0x0000_1093), "A");
        assert_eq!(table.lookup(0), "");
        assert_eq!(table.lookup(0x0000_2093), "");
    }

    #[test]
    fn test_new_requires_trailing_sentinel() {
        let missing = [FpgaIdEntry::new(0x1093, FPGA_ID_MASK_FULL, "A")];
        assert_eq!(
            IdentifierTable::new(&missing).unwrap_err(),
            TableError::MissingSentinel { len: 1 }
        );

        let misplaced = [
            FpgaIdEntry::SENTINEL,
            FpgaIdEntry::new(0x1093, FPGA_ID_MASK_FULL, "A"),
            FpgaIdEntry::SENTINEL,
        ];
        assert_eq!(
            IdentifierTable::new(&misplaced).unwrap_err(),
            TableError::MisplacedSentinel { index: 0, len: 3 }
        );

        assert!(matches!(
            IdentifierTable::new(&[]),
            Err(TableError::MissingSentinel { len: 0 })
        ));
    }

    #[test]
    fn test_sentinel_only_table() {
        let entries = [FpgaIdEntry::SENTINEL];
        let table = IdentifierTable::new(&entries).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.lookup(0x0363_6093), "");
        assert!(table.check_disjoint().is_ok());
    }

    #[test]
    fn test_overlap_detection_reports_first_pair() {
        let entries = [
            FpgaIdEntry::new(0x0363_6093, FPGA_ID_MASK_NOVER, "WIDE"),
            FpgaIdEntry::new(0x1363_6093, FPGA_ID_MASK_FULL, "NARROW"),
            FpgaIdEntry::SENTINEL,
        ];
        let table = IdentifierTable::new(&entries).unwrap();
        assert_eq!(
            table.check_disjoint(),
            Err(TableError::Overlap {
                first: 0,
                second: 1,
                first_name: "WIDE".to_string(),
                second_name: "NARROW".to_string(),
            })
        );
    }

    #[test]
    fn test_check_names_rejects_empty_real_entry() {
        let entries = [
            FpgaIdEntry::new(0x0363_6093, FPGA_ID_MASK_NOVER, ""),
            FpgaIdEntry::SENTINEL,
        ];
        let table = IdentifierTable::new(&entries).unwrap();
        assert_eq!(
            table.check_names(),
            Err(TableError::EmptyName {
                index: 0,
                id: 0x0363_6093
            })
        );
    }

    #[test]
    fn test_entry_family() {
        let entry = FpgaIdEntry::new(FPGA_ID_XCVU9P, FPGA_ID_MASK_NOVER, "XCVU9P");
        assert_eq!(entry.family(), Some(Family::VirtexUltraScalePlus));
        assert_eq!(FpgaIdEntry::SENTINEL.family(), None);
    }
}
