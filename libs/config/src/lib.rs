//! # FPGA Tool Configuration
//!
//! Configuration for tools built on `fpga-id`, kept out of the library so
//! that the lookup itself stays free of I/O.
//!
//! ## Features
//!
//! - **Tool settings**: log level, output format and an optional user parts
//!   file, layered from defaults, a TOML file and `FPGA_PART_*` environment
//!   variables
//! - **User parts files**: extra `{id, mask, name}` rows in TOML
//! - **Table merging**: user rows placed ahead of the built-in table, with
//!   exact shadows reported as overrides and partial overlaps rejected
//!   (or left in place by [`assemble_tables`] for a caller to report)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fpga_config::{load_config, merge_tables, PartsFile};
//! use fpga_id::IdentifierTable;
//!
//! let config = load_config(None)?;
//! let user = match config.parts_path()? {
//!     Some(path) => PartsFile::load(&path)?,
//!     None => Vec::new(),
//! };
//! let merged = merge_tables(&user, IdentifierTable::builtin())?;
//! println!("{}", merged.table()?.lookup(0x0363_6093));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod merge;
pub mod parts_file;
pub mod tool_config;

// Re-export commonly used types
pub use merge::{assemble_tables, merge_tables, MergedTable, Override};
pub use parts_file::{parse_u32, PartSpec, PartsFile};
pub use tool_config::{load_config, OutputFormat, ToolConfig, DEFAULT_CONFIG_NAME, ENV_PREFIX};
