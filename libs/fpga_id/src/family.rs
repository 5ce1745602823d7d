//! Device family classification
//!
//! Families are derived from the part-number prefix rather than stored in
//! the table, so table rows keep the plain `{id, mask, name}` layout.

use std::fmt;

use crate::idcode::Vendor;

/// Device families covered by the built-in table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    // Xilinx 7 series
    Spartan7,
    Artix7,
    Kintex7,
    Virtex7,
    Zynq7000,

    // Xilinx UltraScale / UltraScale+
    KintexUltraScale,
    VirtexUltraScale,
    ArtixUltraScalePlus,
    KintexUltraScalePlus,
    VirtexUltraScalePlus,
    ZynqUltraScalePlus,
    Kria,
    Alveo,

    // Xilinx Versal
    VersalAiEdge,
    VersalAiCore,
    VersalPrime,
    VersalPremium,

    // Intel
    Stratix10,
    Agilex,
}

impl Family {
    /// Every family, in table order
    pub const ALL: [Family; 19] = [
        Family::Spartan7,
        Family::Artix7,
        Family::Kintex7,
        Family::Virtex7,
        Family::Zynq7000,
        Family::KintexUltraScale,
        Family::VirtexUltraScale,
        Family::ArtixUltraScalePlus,
        Family::KintexUltraScalePlus,
        Family::VirtexUltraScalePlus,
        Family::ZynqUltraScalePlus,
        Family::Kria,
        Family::Alveo,
        Family::VersalAiEdge,
        Family::VersalAiCore,
        Family::VersalPrime,
        Family::VersalPremium,
        Family::Stratix10,
        Family::Agilex,
    ];

    /// Classify a part name by its prefix
    pub fn from_part_name(name: &str) -> Option<Family> {
        let family = if let Some(rest) = name.strip_prefix("XC7") {
            match rest.as_bytes().first()? {
                b'S' => Family::Spartan7,
                b'A' => Family::Artix7,
                b'K' => Family::Kintex7,
                b'V' => Family::Virtex7,
                b'Z' => Family::Zynq7000,
                _ => return None,
            }
        } else if let Some(rest) = name.strip_prefix("XCKU") {
            if rest.ends_with('P') {
                Family::KintexUltraScalePlus
            } else {
                Family::KintexUltraScale
            }
        } else if let Some(rest) = name.strip_prefix("XCVU") {
            if rest.ends_with('P') {
                Family::VirtexUltraScalePlus
            } else {
                Family::VirtexUltraScale
            }
        } else if name.starts_with("XCAU") {
            Family::ArtixUltraScalePlus
        } else if name.starts_with("XCZU") {
            Family::ZynqUltraScalePlus
        } else if name.starts_with("XCVE") {
            Family::VersalAiEdge
        } else if name.starts_with("XCVC") {
            Family::VersalAiCore
        } else if name.starts_with("XCVM") {
            Family::VersalPrime
        } else if name.starts_with("XCVP") {
            Family::VersalPremium
        } else if name.starts_with("XCK") {
            Family::Kria
        } else if name.starts_with("XCU") {
            Family::Alveo
        } else if name.starts_with("1S") {
            Family::Stratix10
        } else if name.starts_with("AG") {
            Family::Agilex
        } else {
            return None;
        };
        Some(family)
    }

    /// Vendor that makes this family
    pub fn vendor(&self) -> Vendor {
        match self {
            Family::Stratix10 | Family::Agilex => Vendor::Intel,
            _ => Vendor::Xilinx,
        }
    }

    /// Marketing name
    pub fn display_name(&self) -> &'static str {
        match self {
            Family::Spartan7 => "Spartan 7",
            Family::Artix7 => "Artix 7",
            Family::Kintex7 => "Kintex 7",
            Family::Virtex7 => "Virtex 7",
            Family::Zynq7000 => "Zynq 7000",
            Family::KintexUltraScale => "Kintex UltraScale",
            Family::VirtexUltraScale => "Virtex UltraScale",
            Family::ArtixUltraScalePlus => "Artix UltraScale+",
            Family::KintexUltraScalePlus => "Kintex UltraScale+",
            Family::VirtexUltraScalePlus => "Virtex UltraScale+",
            Family::ZynqUltraScalePlus => "Zynq UltraScale+",
            Family::Kria => "Kria SoM",
            Family::Alveo => "Alveo",
            Family::VersalAiEdge => "Versal AI Edge",
            Family::VersalAiCore => "Versal AI Core",
            Family::VersalPrime => "Versal Prime",
            Family::VersalPremium => "Versal Premium",
            Family::Stratix10 => "Stratix 10",
            Family::Agilex => "Agilex",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl std::str::FromStr for Family {
    type Err = String;

    /// Accepts the display name or the variant name, ignoring case, spaces and `+`/`plus`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn normalize(s: &str) -> String {
            s.chars()
                .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
                .collect::<String>()
                .to_ascii_lowercase()
                .replace('+', "plus")
        }

        let wanted = normalize(s);
        Family::ALL
            .iter()
            .copied()
            .find(|f| normalize(f.display_name()) == wanted || normalize(&format!("{:?}", f)) == wanted)
            .ok_or_else(|| format!("unknown family '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_series_prefixes() {
        assert_eq!(Family::from_part_name("XC7S50"), Some(Family::Spartan7));
        assert_eq!(Family::from_part_name("XC7A200T"), Some(Family::Artix7));
        assert_eq!(Family::from_part_name("XC7K325T"), Some(Family::Kintex7));
        assert_eq!(Family::from_part_name("XC7VX690T"), Some(Family::Virtex7));
        assert_eq!(Family::from_part_name("XC7Z020"), Some(Family::Zynq7000));
    }

    #[test]
    fn test_ultrascale_plus_suffix() {
        assert_eq!(Family::from_part_name("XCKU040"), Some(Family::KintexUltraScale));
        assert_eq!(Family::from_part_name("XCKU15P"), Some(Family::KintexUltraScalePlus));
        assert_eq!(Family::from_part_name("XCVU440"), Some(Family::VirtexUltraScale));
        assert_eq!(Family::from_part_name("XCVU9P"), Some(Family::VirtexUltraScalePlus));
    }

    #[test]
    fn test_kria_and_alveo_do_not_shadow_kintex() {
        assert_eq!(Family::from_part_name("XCK26"), Some(Family::Kria));
        assert_eq!(Family::from_part_name("XCU280"), Some(Family::Alveo));
        assert_eq!(Family::from_part_name("XCKU3P"), Some(Family::KintexUltraScalePlus));
    }

    #[test]
    fn test_versal_and_intel() {
        assert_eq!(Family::from_part_name("XCVC1902"), Some(Family::VersalAiCore));
        assert_eq!(Family::from_part_name("XCVP1802"), Some(Family::VersalPremium));
        assert_eq!(Family::from_part_name("1SG280L(ES1)"), Some(Family::Stratix10));
        assert_eq!(Family::from_part_name("AGIB027R29AR3"), Some(Family::Agilex));
        assert_eq!(Family::Agilex.vendor(), Vendor::Intel);
        assert_eq!(Family::Alveo.vendor(), Vendor::Xilinx);
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(Family::from_part_name(""), None);
        assert_eq!(Family::from_part_name("XC7"), None);
        assert_eq!(Family::from_part_name("LFE5U-85F"), None);
    }

    #[test]
    fn test_parse_family_names() {
        assert_eq!("Kintex UltraScale+".parse::<Family>(), Ok(Family::KintexUltraScalePlus));
        assert_eq!("kintex-ultrascale-plus".parse::<Family>(), Ok(Family::KintexUltraScalePlus));
        assert_eq!("stratix10".parse::<Family>(), Ok(Family::Stratix10));
        assert_eq!("Zynq7000".parse::<Family>(), Ok(Family::Zynq7000));
        assert!("cyclone".parse::<Family>().is_err());
    }
}
