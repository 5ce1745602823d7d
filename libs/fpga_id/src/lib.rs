//! # FPGA Part Identification
//!
//! Maps FPGA device identifiers (JTAG IDCODEs read from a device register)
//! to part-number strings.
//!
//! ## Design Philosophy
//!
//! - **Data, not engine**: the built-in table is a compiled-in `static`; the
//!   lookup is a masked first-match scan over it
//! - **Never fails**: unknown identifiers resolve to `""`, with
//!   [`IdentifierTable::find`] as the `Option` alternative
//! - **Zero allocation**: part names live in fixed 16-byte buffers
//! - **Checked at build time**: over-long names and overlapping entries in
//!   the built-in table are compile errors
//!
//! ## Quick Start
//!
//! ```rust
//! use fpga_id::{get_fpga_part, IdCode, Vendor, FPGA_ID_1SG280L_ES1, FPGA_ID_XC7A200T};
//!
//! assert_eq!(get_fpga_part(FPGA_ID_XC7A200T), "XC7A200T");
//! assert_eq!(get_fpga_part(FPGA_ID_1SG280L_ES1), "1SG280L(ES1)");
//! assert_eq!(get_fpga_part(0xFFFF_FFFF), "");
//!
//! assert_eq!(IdCode(FPGA_ID_XC7A200T).vendor(), Some(Vendor::Xilinx));
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constants`] | `FPGA_ID_*` identifiers and the two match masks |
//! | [`table`] | Entries, the built-in list, [`IdentifierTable`] |
//! | [`part_name`] | Fixed-capacity [`PartName`] |
//! | [`idcode`] | IDCODE field accessors and [`Vendor`] |
//! | [`family`] | [`Family`] classification from part names |
//! | [`codec`] | 24-byte binary record encoding |

pub mod codec;
pub mod constants;
pub mod errors;
pub mod family;
pub mod idcode;
pub mod part_name;
pub mod table;

pub use codec::{decode_entries, encode_entries, RECORD_SIZE};
pub use constants::*;
pub use errors::TableError;
pub use family::Family;
pub use idcode::{IdCode, Vendor};
pub use part_name::{PartName, PART_NAME_CAPACITY, PART_NAME_MAX_LEN};
pub use table::{get_fpga_part, FpgaIdEntry, IdentifierTable, FPGA_ID_LIST};

/// Result type for fallible table operations
pub type Result<T> = std::result::Result<T, TableError>;
