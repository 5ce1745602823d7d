//! Fixed-capacity part name storage
//!
//! Part names live in a 16-byte, NUL-padded buffer so that a table entry has
//! the same layout as a C `char part[16]` field: at most 15 visible
//! characters followed by at least one terminator. Names are restricted to
//! printable ASCII, which keeps `as_str` infallible.
//!
//! Built-in names are constructed in `const` context through
//! [`PartName::from_static`], so an over-long name in the built-in table is
//! a compile error rather than a runtime failure.

use std::fmt;

use zerocopy::{AsBytes, FromZeroes};

use crate::errors::TableError;

/// Size of the name buffer, terminator included
pub const PART_NAME_CAPACITY: usize = 16;

/// Longest name that still leaves room for the terminator
pub const PART_NAME_MAX_LEN: usize = PART_NAME_CAPACITY - 1;

/// Fixed-capacity, NUL-terminated ASCII part name
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, AsBytes, FromZeroes)]
pub struct PartName {
    data: [u8; PART_NAME_CAPACITY],
}

const fn is_name_byte(b: u8) -> bool {
    matches!(b, 0x20..=0x7e)
}

impl PartName {
    /// The empty name carried by the sentinel entry
    pub const EMPTY: PartName = PartName {
        data: [0; PART_NAME_CAPACITY],
    };

    /// Build a name at compile time
    ///
    /// # Panics
    ///
    /// Panics (a build error when used in a `const`/`static` initializer) if
    /// `name` is longer than [`PART_NAME_MAX_LEN`] bytes or contains anything
    /// other than printable ASCII.
    pub const fn from_static(name: &str) -> Self {
        let bytes = name.as_bytes();
        assert!(
            bytes.len() <= PART_NAME_MAX_LEN,
            "part name does not fit in 15 characters"
        );

        let mut data = [0u8; PART_NAME_CAPACITY];
        let mut i = 0;
        while i < bytes.len() {
            assert!(is_name_byte(bytes[i]), "part name must be printable ASCII");
            data[i] = bytes[i];
            i += 1;
        }
        Self { data }
    }

    /// Build a name at runtime with validation
    pub fn new(name: &str) -> Result<Self, TableError> {
        let bytes = name.as_bytes();
        if bytes.len() > PART_NAME_MAX_LEN {
            return Err(TableError::NameTooLong {
                name: name.to_string(),
                len: bytes.len(),
                max: PART_NAME_MAX_LEN,
            });
        }
        if !bytes.iter().all(|&b| is_name_byte(b)) {
            return Err(TableError::NonAsciiName {
                name: name.to_string(),
            });
        }

        let mut data = [0u8; PART_NAME_CAPACITY];
        data[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { data })
    }

    /// Number of visible characters
    pub const fn len(&self) -> usize {
        let mut i = 0;
        while i < PART_NAME_CAPACITY && self.data[i] != 0 {
            i += 1;
        }
        i
    }

    /// True for the sentinel's name
    pub const fn is_empty(&self) -> bool {
        self.data[0] == 0
    }

    /// Name as a string slice
    pub fn as_str(&self) -> &str {
        // Constructors only admit printable ASCII
        std::str::from_utf8(&self.data[..self.len()]).unwrap_or("")
    }

    /// Raw buffer including the NUL padding
    pub const fn as_raw(&self) -> &[u8; PART_NAME_CAPACITY] {
        &self.data
    }

    /// Buffer size, terminator included
    pub const fn capacity() -> usize {
        PART_NAME_CAPACITY
    }
}

impl Default for PartName {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for PartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for PartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartName({:?})", self.as_str())
    }
}

impl AsRef<str> for PartName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for PartName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for PartName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl TryFrom<&str> for PartName {
    type Error = TableError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for PartName {
    type Error = TableError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PartName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PartName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PartName::new(&s).map_err(serde::de::Error::custom)
    }
}
