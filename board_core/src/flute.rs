//! # Flute Profiles and Take-up Factors
//!
//! The flute is the wave-shaped medium glued between liners. Because of the
//! wave, a metre of board consumes more than a metre of medium; the ratio is
//! the take-up factor.
//!
//! ## Take-up Table
//!
//! | Code | Wall   | Factor        |
//! |------|--------|---------------|
//! | A    | single | 1.54          |
//! | B    | single | 1.36          |
//! | C    | single | 1.46          |
//! | E    | single | 1.27          |
//! | F    | single | 1.20          |
//! | BC   | double | B + C = 2.82  |
//! | BE   | double | B + E = 2.63  |
//! | AB   | double | A + B = 2.90  |
//!
//! ## Example
//!
//! ```rust
//! use board_core::flute::{takeup_factor, DoubleWallFlute, FluteCode, SingleWallFlute};
//!
//! let flute: FluteCode = "BC".parse().unwrap();
//! assert_eq!(flute, FluteCode::Double(DoubleWallFlute::BC));
//! assert_eq!(
//!     DoubleWallFlute::BC.constituents(),
//!     (SingleWallFlute::B, SingleWallFlute::C)
//! );
//!
//! // Unknown codes are neutral rather than an error
//! assert_eq!(takeup_factor("Z"), 1.0);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

const TAKEUP_A: f64 = 1.54;
const TAKEUP_B: f64 = 1.36;
const TAKEUP_C: f64 = 1.46;
const TAKEUP_E: f64 = 1.27;
const TAKEUP_F: f64 = 1.2;

/// Take-up factor used when a code is not in the table
pub const NEUTRAL_TAKEUP: f64 = 1.0;

/// Flute code → take-up factor. Composite entries are stored sums.
static TAKEUP_TABLE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("A", TAKEUP_A),
        ("B", TAKEUP_B),
        ("C", TAKEUP_C),
        ("E", TAKEUP_E),
        ("F", TAKEUP_F),
        ("BC", TAKEUP_B + TAKEUP_C),
        ("BE", TAKEUP_B + TAKEUP_E),
        ("AB", TAKEUP_A + TAKEUP_B),
    ])
});

/// Look up the take-up factor for a flute code string.
///
/// Never fails: anything outside the table gets [`NEUTRAL_TAKEUP`].
pub fn takeup_factor(code: &str) -> f64 {
    TAKEUP_TABLE.get(code).copied().unwrap_or(NEUTRAL_TAKEUP)
}

/// Single-wall flute profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SingleWallFlute {
    A,
    B,
    C,
    E,
    F,
}

impl SingleWallFlute {
    /// All single-wall profiles in table order
    pub const ALL: [SingleWallFlute; 5] = [
        SingleWallFlute::A,
        SingleWallFlute::B,
        SingleWallFlute::C,
        SingleWallFlute::E,
        SingleWallFlute::F,
    ];

    /// Table code (e.g., "B")
    pub fn code(&self) -> &'static str {
        match self {
            SingleWallFlute::A => "A",
            SingleWallFlute::B => "B",
            SingleWallFlute::C => "C",
            SingleWallFlute::E => "E",
            SingleWallFlute::F => "F",
        }
    }

    /// Take-up factor from the table
    pub fn takeup(&self) -> f64 {
        takeup_factor(self.code())
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'A' => Some(SingleWallFlute::A),
            'B' => Some(SingleWallFlute::B),
            'C' => Some(SingleWallFlute::C),
            'E' => Some(SingleWallFlute::E),
            'F' => Some(SingleWallFlute::F),
            _ => None,
        }
    }
}

/// Double-wall (two flute) combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoubleWallFlute {
    BC,
    BE,
    AB,
}

impl DoubleWallFlute {
    /// All double-wall combinations in table order
    pub const ALL: [DoubleWallFlute; 3] = [DoubleWallFlute::BC, DoubleWallFlute::BE, DoubleWallFlute::AB];

    /// Table code (e.g., "BC")
    pub fn code(&self) -> &'static str {
        match self {
            DoubleWallFlute::BC => "BC",
            DoubleWallFlute::BE => "BE",
            DoubleWallFlute::AB => "AB",
        }
    }

    /// The two single-wall profiles in written order.
    ///
    /// The first applies to the first flute medium of a 5-ply substance,
    /// the second to the second.
    pub fn constituents(&self) -> (SingleWallFlute, SingleWallFlute) {
        match self {
            DoubleWallFlute::BC => (SingleWallFlute::B, SingleWallFlute::C),
            DoubleWallFlute::BE => (SingleWallFlute::B, SingleWallFlute::E),
            DoubleWallFlute::AB => (SingleWallFlute::A, SingleWallFlute::B),
        }
    }

    /// Combined take-up factor stored in the table (sum of constituents)
    pub fn takeup(&self) -> f64 {
        takeup_factor(self.code())
    }
}

/// Any flute code accepted by the calculators.
///
/// Serializes as its code string (`"B"`, `"BC"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FluteCode {
    /// Single-wall board (one flute medium)
    Single(SingleWallFlute),
    /// Double-wall board (two flute media)
    Double(DoubleWallFlute),
}

impl Default for FluteCode {
    fn default() -> Self {
        FluteCode::Single(SingleWallFlute::B)
    }
}

impl FluteCode {
    /// Every code in table order, for selection lists
    pub const ALL: [FluteCode; 8] = [
        FluteCode::Single(SingleWallFlute::A),
        FluteCode::Single(SingleWallFlute::B),
        FluteCode::Single(SingleWallFlute::C),
        FluteCode::Single(SingleWallFlute::E),
        FluteCode::Single(SingleWallFlute::F),
        FluteCode::Double(DoubleWallFlute::BC),
        FluteCode::Double(DoubleWallFlute::BE),
        FluteCode::Double(DoubleWallFlute::AB),
    ];

    /// Table code (e.g., "B", "BC")
    pub fn code(&self) -> &'static str {
        match self {
            FluteCode::Single(f) => f.code(),
            FluteCode::Double(f) => f.code(),
        }
    }

    /// Take-up factor from the table
    pub fn takeup(&self) -> f64 {
        takeup_factor(self.code())
    }

    pub fn is_double_wall(&self) -> bool {
        matches!(self, FluteCode::Double(_))
    }

    /// Exact table-code match ("B", "BC"); `None` for anything else.
    ///
    /// This is what the calculators use, so a lower-case or padded code
    /// behaves like an unknown one and takes the plain-sum grammage rule.
    pub fn from_code(code: &str) -> Option<Self> {
        FluteCode::ALL.into_iter().find(|f| f.code() == code)
    }

    /// Parse a user-typed code; tolerant of case and surrounding whitespace
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        let letters: Vec<char> = normalized.chars().collect();
        let parsed = match letters.as_slice() {
            [c] => SingleWallFlute::from_letter(*c).map(FluteCode::Single),
            _ => DoubleWallFlute::ALL
                .into_iter()
                .find(|d| d.code() == normalized)
                .map(FluteCode::Double),
        };
        parsed.ok_or_else(|| CalcError::unknown_flute(s))
    }
}

impl FromStr for FluteCode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FluteCode::from_str_flexible(s)
    }
}

impl TryFrom<String> for FluteCode {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FluteCode::from_str_flexible(&value)
    }
}

impl From<FluteCode> for String {
    fn from(flute: FluteCode) -> Self {
        flute.code().to_string()
    }
}

impl fmt::Display for FluteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_wall_factors() {
        assert_eq!(takeup_factor("A"), 1.54);
        assert_eq!(takeup_factor("B"), 1.36);
        assert_eq!(takeup_factor("C"), 1.46);
        assert_eq!(takeup_factor("E"), 1.27);
        assert_eq!(takeup_factor("F"), 1.2);
    }

    #[test]
    fn test_composite_is_sum_of_constituents() {
        for double in DoubleWallFlute::ALL {
            let (first, second) = double.constituents();
            assert_eq!(double.takeup(), first.takeup() + second.takeup());
            assert_eq!(format!("{}{}", first.code(), second.code()), double.code());
        }
        assert!((takeup_factor("BC") - 2.82).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_code_is_neutral() {
        assert_eq!(takeup_factor(""), NEUTRAL_TAKEUP);
        assert_eq!(takeup_factor("Z"), NEUTRAL_TAKEUP);
        assert_eq!(takeup_factor("b"), NEUTRAL_TAKEUP);
        assert_eq!(takeup_factor("CB"), NEUTRAL_TAKEUP);
    }

    #[test]
    fn test_all_factors_above_one() {
        for flute in FluteCode::ALL {
            assert!(flute.takeup() > 1.0, "{flute} factor should exceed 1.0");
        }
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!("B".parse::<FluteCode>().unwrap(), FluteCode::Single(SingleWallFlute::B));
        assert_eq!(" be ".parse::<FluteCode>().unwrap(), FluteCode::Double(DoubleWallFlute::BE));
        assert_eq!("ab".parse::<FluteCode>().unwrap(), FluteCode::Double(DoubleWallFlute::AB));
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(FluteCode::from_code("BC"), Some(FluteCode::Double(DoubleWallFlute::BC)));
        assert_eq!(FluteCode::from_code("bc"), None);
        assert_eq!(FluteCode::from_code(" B"), None);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "CB".parse::<FluteCode>().unwrap_err();
        assert_eq!(err, CalcError::unknown_flute("CB"));
        assert!("".parse::<FluteCode>().is_err());
        assert!("D".parse::<FluteCode>().is_err());
    }

    #[test]
    fn test_all_codes_roundtrip_through_parse() {
        for flute in FluteCode::ALL {
            assert_eq!(flute.code().parse::<FluteCode>().unwrap(), flute);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&FluteCode::Double(DoubleWallFlute::BC)).unwrap();
        assert_eq!(json, "\"BC\"");

        let parsed: FluteCode = serde_json::from_str("\"E\"").unwrap();
        assert_eq!(parsed, FluteCode::Single(SingleWallFlute::E));

        assert!(serde_json::from_str::<FluteCode>("\"Q\"").is_err());
    }

    #[test]
    fn test_wall_kind() {
        assert!(!FluteCode::default().is_double_wall());
        assert!(FluteCode::Double(DoubleWallFlute::AB).is_double_wall());
    }
}
