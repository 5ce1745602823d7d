//! Table Merging
//!
//! Combines user parts with the built-in table into one sentinel-terminated
//! list. User rows go first so that first-match-wins lets them take
//! precedence. A user row with exactly the same id and mask as a built-in
//! row replaces it and is reported as an override; any other overlap is an
//! error, so the merged table stays disjoint.

use fpga_id::{FpgaIdEntry, IdentifierTable, PartName, TableError};
use tracing::{debug, warn};

/// A built-in row replaced by a user row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    pub id: u32,
    pub mask: u32,
    pub builtin: PartName,
    pub user: PartName,
}

/// Owned merged table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTable {
    entries: Vec<FpgaIdEntry>,
    user_count: usize,
    overrides: Vec<Override>,
}

impl MergedTable {
    /// Lookup view over the merged entries
    pub fn table(&self) -> Result<IdentifierTable<'_>, TableError> {
        IdentifierTable::new(&self.entries)
    }

    /// All entries, sentinel included
    pub fn raw_entries(&self) -> &[FpgaIdEntry] {
        &self.entries
    }

    /// Number of leading entries that came from the user
    pub fn user_count(&self) -> usize {
        self.user_count
    }

    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    /// Names are non-empty and no identifier matches two entries
    pub fn validate(&self) -> Result<(), TableError> {
        let table = self.table()?;
        table.check_names()?;
        table.check_disjoint()
    }
}

/// Merge user entries ahead of `builtin` and validate the result
pub fn merge_tables(
    user: &[FpgaIdEntry],
    builtin: IdentifierTable<'_>,
) -> Result<MergedTable, TableError> {
    let merged = assemble_tables(user, builtin)?;
    merged.validate()?;

    debug!(
        "Merged {} user parts with {} built-in parts ({} overridden)",
        merged.user_count,
        builtin.len(),
        merged.overrides.len()
    );
    Ok(merged)
}

/// Lay out user entries ahead of `builtin` without the disjointness and
/// name checks, so a caller can report them itself
///
/// Fails only when a user entry has id 0, which would cut the table short.
pub fn assemble_tables(
    user: &[FpgaIdEntry],
    builtin: IdentifierTable<'_>,
) -> Result<MergedTable, TableError> {
    if let Some(index) = user.iter().position(FpgaIdEntry::is_sentinel) {
        return Err(TableError::ZeroId {
            index,
            name: user[index].name().to_string(),
        });
    }

    let mut entries = Vec::with_capacity(user.len() + builtin.len() + 1);
    entries.extend_from_slice(user);

    let mut overrides = Vec::new();
    for entry in builtin.iter() {
        let shadow = user
            .iter()
            .find(|u| u.id == entry.id && u.mask == entry.mask);
        match shadow {
            Some(user_entry) => {
                warn!(
                    "User part {} overrides built-in {} ({:#010x})",
                    user_entry.name(),
                    entry.name(),
                    entry.id
                );
                overrides.push(Override {
                    id: entry.id,
                    mask: entry.mask,
                    builtin: entry.part,
                    user: user_entry.part,
                });
            }
            None => entries.push(*entry),
        }
    }
    entries.push(FpgaIdEntry::SENTINEL);

    Ok(MergedTable {
        entries,
        user_count: user.len(),
        overrides,
    })
}
