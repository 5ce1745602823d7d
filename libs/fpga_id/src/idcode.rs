//! JTAG IDCODE field decoding
//!
//! FPGA device identifiers follow the IEEE 1149.1 IDCODE layout:
//!
//! ```text
//!  31     28 27                      12 11                    1   0
//! ┌─────────┬──────────────────────────┬───────────────────────┬───┐
//! │ version │       part number        │ manufacturer (JEP106) │ 1 │
//! └─────────┴──────────────────────────┴───────────────────────┴───┘
//! ```
//!
//! The version nibble carries the silicon stepping. Tables that should treat
//! all steppings of a part alike match with [`FPGA_ID_MASK_NOVER`], which
//! clears exactly that nibble.
//!
//! [`FPGA_ID_MASK_NOVER`]: crate::constants::FPGA_ID_MASK_NOVER

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::FPGA_ID_MASK_NOVER;

/// FPGA vendors by JEP106 manufacturer code (IDCODE bits 11..1)
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vendor {
    Xilinx = 0x049,
    Intel = 0x06E, // Altera bank code
}

impl Vendor {
    /// Short lowercase name, as accepted on command lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Xilinx => "xilinx",
            Vendor::Intel => "intel",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vendor::Xilinx => f.pad("Xilinx"),
            Vendor::Intel => f.pad("Intel"),
        }
    }
}

impl std::str::FromStr for Vendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xilinx" | "amd" => Ok(Vendor::Xilinx),
            "intel" | "altera" => Ok(Vendor::Intel),
            other => Err(format!("unknown vendor '{}': expected xilinx or intel", other)),
        }
    }
}

/// A raw 32-bit JTAG IDCODE with field accessors
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdCode(pub u32);

impl IdCode {
    /// Silicon version / stepping (bits 31..28)
    pub const fn version(self) -> u8 {
        (self.0 >> 28) as u8
    }

    /// Vendor-specific part number (bits 27..12)
    pub const fn part_number(self) -> u16 {
        ((self.0 >> 12) & 0xFFFF) as u16
    }

    /// JEP106 manufacturer code (bits 11..1)
    pub const fn manufacturer(self) -> u16 {
        ((self.0 >> 1) & 0x7FF) as u16
    }

    /// Bit 0 is fixed to 1 in every valid IDCODE
    pub const fn is_well_formed(self) -> bool {
        self.0 & 1 == 1
    }

    /// Identifier with the version nibble cleared
    pub const fn without_version(self) -> IdCode {
        IdCode(self.0 & FPGA_ID_MASK_NOVER)
    }

    /// Vendor from the manufacturer field, if it is one we catalog
    pub fn vendor(self) -> Option<Vendor> {
        if !self.is_well_formed() {
            return None;
        }
        Vendor::try_from(self.manufacturer()).ok()
    }

    /// Raw identifier value
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for IdCode {
    fn from(raw: u32) -> Self {
        IdCode(raw)
    }
}

impl From<IdCode> for u32 {
    fn from(id: IdCode) -> Self {
        id.0
    }
}

impl fmt::Display for IdCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
