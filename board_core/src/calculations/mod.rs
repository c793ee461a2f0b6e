//! # Board Calculations
//!
//! Every calculation here is a pure, total function: it never returns an
//! error. Inputs that make no sense (zero dimensions, empty substance,
//! non-positive price) degrade to `0` or, for MOQ, to "unreachable".
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `calculate(&input)` - Pure calculation function
//!
//! ## Pipeline
//!
//! ```text
//! substance ─┐
//!            ├─> grammage ─> tonnage ─> price
//! flute ─────┘       │
//!                    └─────> moq (inverts the per-sheet weight)
//! ```
//!
//! ## Available Calculations
//!
//! - [`grammage`] - Board grammage from substance and flute
//! - [`tonnage`] - Total weight of a sheet order
//! - [`price`] - Order price at a price per kilogram
//! - [`moq`] - Minimum sheets to reach a minimum production tonnage
//!
//! ## Example
//!
//! ```rust
//! use board_core::calculations::{moq, price, tonnage, SheetSpec};
//!
//! let sheet = SheetSpec::new(1200.0, 800.0, "125/110/125", "B");
//!
//! let weight = tonnage::calculate(&sheet.clone().with_quantity(1000));
//! assert!(weight.0 > 0.38 && weight.0 < 0.39);
//!
//! let amount = price::calculate(&sheet.clone().with_quantity(1000).at_price(1.5));
//! assert!((amount.0 - weight.0 * 1000.0 * 1.5).abs() < 1e-9);
//!
//! let min_sheets = moq::calculate(&sheet.with_min_tonnage(1.0));
//! assert_eq!(min_sheets, moq::Moq::Sheets(2607));
//! ```

pub mod grammage;
pub mod moq;
pub mod price;
pub mod tonnage;

use serde::{Deserialize, Serialize};

use crate::flute::FluteCode;
use crate::substance::PlyWeights;
use crate::units::{Gsm, Millimeters};

// Re-export commonly used types
pub use grammage::{calculate_grammage, GrammageBreakdown, GrammageRule};
pub use moq::{Moq, MoqInput};
pub use price::{PriceInput, PriceQuote};
pub use tonnage::{TonnageBatch, TonnageInput};

/// One sheet: size, substance and flute.
///
/// Flute stays as the raw code text so an unrecognised code can still be
/// carried through and degrade to the plain-sum grammage rule.
///
/// ## JSON Example
///
/// ```json
/// { "length_mm": 1200.0, "width_mm": 800.0, "substance": "125/110/125", "flute": "B" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    /// Sheet length in millimeters
    #[serde(alias = "panjang")]
    pub length_mm: f64,

    /// Sheet width in millimeters
    #[serde(alias = "lebar")]
    pub width_mm: f64,

    /// Substance string, e.g. "125/110/125"
    pub substance: String,

    /// Flute code, e.g. "B" or "BC"
    pub flute: String,
}

impl SheetSpec {
    pub fn new(length_mm: f64, width_mm: f64, substance: impl Into<String>, flute: impl Into<String>) -> Self {
        SheetSpec {
            length_mm,
            width_mm,
            substance: substance.into(),
            flute: flute.into(),
        }
    }

    /// Both dimensions strictly positive (NaN counts as not positive)
    pub fn has_positive_dimensions(&self) -> bool {
        self.length_mm > 0.0 && self.width_mm > 0.0
    }

    pub fn length(&self) -> Millimeters {
        Millimeters(self.length_mm)
    }

    pub fn width(&self) -> Millimeters {
        Millimeters(self.width_mm)
    }

    /// Parsed ply weights of the substance
    pub fn plies(&self) -> PlyWeights {
        PlyWeights::parse(&self.substance)
    }

    /// Flute code, if the text is a table code
    pub fn flute_code(&self) -> Option<FluteCode> {
        FluteCode::from_code(&self.flute)
    }

    /// Board grammage for this substance and flute
    pub fn grammage(&self) -> Gsm {
        grammage::resolve(&self.plies(), self.flute_code())
    }

    /// Pair with a sheet count for tonnage or pricing
    pub fn with_quantity(self, quantity: i64) -> TonnageInput {
        TonnageInput { sheet: self, quantity }
    }

    /// Pair with a target tonnage for MOQ
    pub fn with_min_tonnage(self, min_tonnage: f64) -> MoqInput {
        MoqInput {
            sheet: self,
            min_tonnage,
        }
    }
}
