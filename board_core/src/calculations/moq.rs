//! # Minimum Order Quantity
//!
//! Smallest number of sheets whose combined weight reaches a minimum
//! production tonnage (1 t unless the caller says otherwise):
//!
//! ```text
//! moq = ceil(min_tonnage × 1000 / kg_per_sheet)
//! ```
//!
//! Rounding is always up so the target is met or exceeded.
//!
//! ## Outcomes
//!
//! - `Sheets(0)` - no usable input (size or target not positive)
//! - `Unreachable` - the substance has no grammage, so no number of sheets
//!   will ever reach the target, or the count doesn't fit in a `u64`.
//!   Shown as "N/A", numerically `+∞`.
//! - `Sheets(n)` - the answer

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tonnage::sheet_weight;
use super::SheetSpec;
use crate::units::{Kilograms, Tonnes};

/// Production runs are planned in whole tonnes by default
pub const DEFAULT_MIN_TONNAGE: f64 = 1.0;

fn default_min_tonnage() -> f64 {
    DEFAULT_MIN_TONNAGE
}

/// Input parameters for an MOQ calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_mm": 1200.0,
///   "width_mm": 800.0,
///   "substance": "125/110/125",
///   "flute": "B",
///   "min_tonnage": 1.0
/// }
/// ```
///
/// `min_tonnage` may be omitted and defaults to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoqInput {
    #[serde(flatten)]
    pub sheet: SheetSpec,

    /// Target production weight in tonnes
    #[serde(default = "default_min_tonnage")]
    pub min_tonnage: f64,
}

impl MoqInput {
    /// MOQ input with the default 1 t target
    pub fn new(sheet: SheetSpec) -> Self {
        MoqInput {
            sheet,
            min_tonnage: DEFAULT_MIN_TONNAGE,
        }
    }
}

/// Result of an MOQ calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moq {
    /// Sheet count (0 when the inputs were not usable)
    Sheets(u64),
    /// No sheet count reaches the target
    Unreachable,
}

impl Moq {
    /// Numeric form: the sheet count, or `f64::INFINITY` when unreachable
    pub fn as_f64(&self) -> f64 {
        match self {
            Moq::Sheets(n) => *n as f64,
            Moq::Unreachable => f64::INFINITY,
        }
    }

    /// Sheet count, if reachable
    pub fn sheets(&self) -> Option<u64> {
        match self {
            Moq::Sheets(n) => Some(*n),
            Moq::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Moq::Sheets(_))
    }
}

impl fmt::Display for Moq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Moq::Sheets(n) => write!(f, "{n}"),
            Moq::Unreachable => write!(f, "N/A"),
        }
    }
}

/// Calculate the minimum order quantity in sheets.
///
/// ```rust
/// use board_core::calculations::{moq, SheetSpec};
/// use board_core::calculations::moq::{Moq, MoqInput};
///
/// // 1 m² of 400 g/m² board = 0.4 kg per sheet → 2500 sheets per tonne
/// let input = MoqInput::new(SheetSpec::new(1000.0, 1000.0, "100/100/100/100", "B"));
/// assert_eq!(moq::calculate(&input), Moq::Sheets(2500));
///
/// // Nothing to weigh
/// let input = MoqInput::new(SheetSpec::new(100.0, 100.0, "", "B"));
/// assert_eq!(moq::calculate(&input), Moq::Unreachable);
/// assert!(moq::calculate(&input).as_f64().is_infinite());
/// ```
pub fn calculate(input: &MoqInput) -> Moq {
    let sheet = &input.sheet;
    // `!(x > 0)` also rejects NaN targets
    if !sheet.has_positive_dimensions() || !(input.min_tonnage > 0.0) {
        tracing::debug!(
            length_mm = sheet.length_mm,
            width_mm = sheet.width_mm,
            min_tonnage = input.min_tonnage,
            "non-positive size or target, MOQ is 0"
        );
        return Moq::Sheets(0);
    }

    let grammage = sheet.grammage();
    if grammage.0 == 0.0 {
        tracing::debug!(substance = %sheet.substance, "no grammage, MOQ unreachable");
        return Moq::Unreachable;
    }

    let per_sheet = sheet_weight(sheet.length(), sheet.width(), grammage);
    if per_sheet.0 <= 0.0 {
        return Moq::Unreachable;
    }

    let target: Kilograms = Tonnes(input.min_tonnage).into();
    let sheets = (target.0 / per_sheet.0).ceil();
    // `u64::MAX as f64` rounds up to 2^64, which no u64 holds
    if !(sheets < u64::MAX as f64) {
        tracing::debug!(sheets, "sheet count beyond u64, MOQ unreachable");
        return Moq::Unreachable;
    }
    Moq::Sheets(sheets as u64)
}

/// MOQ for several sheet specs against one shared target tonnage
pub fn calculate_batch(sheets: &[SheetSpec], min_tonnage: f64) -> Vec<Moq> {
    sheets
        .iter()
        .map(|sheet| calculate(&sheet.clone().with_min_tonnage(min_tonnage)))
        .collect()
}
