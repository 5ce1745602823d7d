//! Binary record encoding for identifier tables
//!
//! A table serializes as back-to-back 24-byte records in native byte order,
//! the same bytes a C array of `struct fpga_id` occupies:
//!
//! ```text
//! ┌──────────┬──────────┬──────────────────────────┐
//! │ id (u32) │ mask(u32)│ part name, NUL padded    │
//! │ 4 bytes  │ 4 bytes  │ 16 bytes                 │
//! └──────────┴──────────┴──────────────────────────┘
//! ```
//!
//! Decoding validates every record; the result still has to go through
//! [`IdentifierTable::new`](crate::IdentifierTable::new) to be used for lookups.

use zerocopy::AsBytes;

use crate::errors::TableError;
use crate::part_name::{PartName, PART_NAME_CAPACITY};
use crate::table::FpgaIdEntry;

/// Size of one encoded entry
pub const RECORD_SIZE: usize = std::mem::size_of::<FpgaIdEntry>();

/// Serialize entries as raw records
pub fn encode_entries(entries: &[FpgaIdEntry]) -> Vec<u8> {
    entries.as_bytes().to_vec()
}

/// Parse raw records back into entries
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<FpgaIdEntry>, TableError> {
    let remainder = bytes.len() % RECORD_SIZE;
    if remainder != 0 {
        let offset = bytes.len() - remainder;
        return Err(TableError::TruncatedRecord {
            offset,
            need: RECORD_SIZE,
            got: remainder,
        });
    }

    bytes
        .chunks_exact(RECORD_SIZE)
        .enumerate()
        .map(|(index, record)| decode_record(record, index * RECORD_SIZE))
        .collect()
}

fn decode_record(record: &[u8], offset: usize) -> Result<FpgaIdEntry, TableError> {
    let word = |at: usize| {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&record[at..at + 4]);
        u32::from_ne_bytes(raw)
    };
    let id = word(0);
    let mask = word(4);

    let name_field = &record[8..8 + PART_NAME_CAPACITY];
    let len = name_field
        .iter()
        .position(|&b| b == 0)
        .ok_or(TableError::UnterminatedName { offset })?;

    let name = std::str::from_utf8(&name_field[..len]).map_err(|_| TableError::NonAsciiName {
        name: String::from_utf8_lossy(&name_field[..len]).into_owned(),
    })?;

    Ok(FpgaIdEntry {
        id,
        mask,
        part: PartName::new(name)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::table::{IdentifierTable, FPGA_ID_LIST};

    #[test]
    fn test_record_size() {
        assert_eq!(RECORD_SIZE, 24);
        assert_eq!(encode_entries(&FPGA_ID_LIST).len(), FPGA_ID_LIST.len() * 24);
    }

    #[test]
    fn test_builtin_table_survives_encoding() {
        let bytes = encode_entries(&FPGA_ID_LIST);
        let decoded = decode_entries(&bytes).unwrap();
        assert_eq!(decoded.as_slice(), &FPGA_ID_LIST[..]);

        let table = IdentifierTable::new(&decoded).unwrap();
        assert_eq!(table.lookup(FPGA_ID_1SG280L_ES1), "1SG280L(ES1)");
    }

    #[test]
    fn test_truncated_buffer() {
        let bytes = encode_entries(&FPGA_ID_LIST[..2]);
        let result = decode_entries(&bytes[..40]);
        assert_eq!(
            result,
            Err(TableError::TruncatedRecord {
                offset: 24,
                need: 24,
                got: 16
            })
        );
    }

    #[test]
    fn test_unterminated_name() {
        let mut bytes = encode_entries(&[FpgaIdEntry::SENTINEL, FpgaIdEntry::SENTINEL]);
        for b in &mut bytes[24 + 8..48] {
            *b = b'A';
        }
        assert_eq!(
            decode_entries(&bytes),
            Err(TableError::UnterminatedName { offset: 24 })
        );
    }

    #[test]
    fn test_non_ascii_name() {
        let mut bytes = encode_entries(&[FpgaIdEntry::SENTINEL]);
        bytes[8] = 0xC3;
        bytes[9] = 0xA9;
        assert!(matches!(
            decode_entries(&bytes),
            Err(TableError::NonAsciiName { .. })
        ));
    }

    #[test]
    fn test_bytes_after_terminator_are_ignored() {
        let mut bytes = encode_entries(&[FpgaIdEntry::new(0x1093, FPGA_ID_MASK_FULL, "AB")]);
        bytes[8 + 5] = b'Z';
        let decoded = decode_entries(&bytes).unwrap();
        assert_eq!(decoded[0].part, "AB");
        assert_eq!(decoded[0].part.as_raw()[5], 0);
    }
}
