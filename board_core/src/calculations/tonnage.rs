//! # Order Tonnage
//!
//! Total weight of `quantity` sheets:
//!
//! ```text
//! area_m2       = (length_mm / 1000) × (width_mm / 1000)
//! kg_per_sheet  = area_m2 × grammage / 1000
//! tonnes        = kg_per_sheet × quantity / 1000
//! ```
//!
//! Non-positive length, width or quantity, or a zero grammage, give 0 t.

use serde::{Deserialize, Serialize};

use super::price::PriceInput;
use super::SheetSpec;
use crate::units::{Gsm, Kilograms, Millimeters, SqM, Tonnes};

/// Input parameters for a tonnage calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_mm": 1200.0,
///   "width_mm": 800.0,
///   "substance": "125/110/125",
///   "flute": "B",
///   "quantity": 1000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonnageInput {
    #[serde(flatten)]
    pub sheet: SheetSpec,

    /// Number of sheets
    pub quantity: i64,
}

impl TonnageInput {
    pub fn new(sheet: SheetSpec, quantity: i64) -> Self {
        TonnageInput { sheet, quantity }
    }

    /// Price this order at `price_per_kg` USD/kg
    pub fn at_price(self, price_per_kg: f64) -> PriceInput {
        PriceInput {
            row: self,
            price_per_kg,
        }
    }
}

/// Weight of a single sheet of board.
pub fn sheet_weight(length: Millimeters, width: Millimeters, grammage: Gsm) -> Kilograms {
    grammage.mass_of(SqM::of_sheet(length, width))
}

/// Calculate the total weight of an order in tonnes.
///
/// ```rust
/// use board_core::calculations::{tonnage, SheetSpec};
///
/// let order = SheetSpec::new(1000.0, 1000.0, "100/100/100/100", "B").with_quantity(2500);
/// // 1 m² × 400 g/m² = 0.4 kg per sheet → 1000 kg
/// assert!((tonnage::calculate(&order).0 - 1.0).abs() < 1e-12);
/// ```
pub fn calculate(input: &TonnageInput) -> Tonnes {
    let sheet = &input.sheet;
    if !sheet.has_positive_dimensions() || input.quantity <= 0 {
        tracing::debug!(
            length_mm = sheet.length_mm,
            width_mm = sheet.width_mm,
            quantity = input.quantity,
            "non-positive size or quantity, tonnage is 0"
        );
        return Tonnes(0.0);
    }

    let grammage = sheet.grammage();
    if grammage.0 == 0.0 {
        tracing::debug!(substance = %sheet.substance, "no grammage, tonnage is 0");
        return Tonnes(0.0);
    }

    let per_sheet = sheet_weight(sheet.length(), sheet.width(), grammage);
    let total = per_sheet * input.quantity as f64;
    total.into()
}

/// Per-row tonnage for several orders plus their total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonnageBatch {
    pub rows: Vec<Tonnes>,
    pub total: Tonnes,
}

/// Calculate tonnage for each row; the total skips non-finite rows.
pub fn calculate_batch(rows: &[TonnageInput]) -> TonnageBatch {
    let rows: Vec<Tonnes> = rows.iter().map(calculate).collect();
    let total = rows
        .iter()
        .filter(|t| t.0.is_finite())
        .fold(Tonnes(0.0), |acc, &t| acc + t);
    TonnageBatch { rows, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> TonnageInput {
        SheetSpec::new(1200.0, 800.0, "125/110/125", "B").with_quantity(1000)
    }

    #[test]
    fn test_basic_tonnage() {
        // 0.96 m² × 399.6 g/m² = 0.383616 kg/sheet → 383.616 kg
        let t = calculate(&order());
        assert!((t.0 - 0.383616).abs() < 1e-9);
    }

    #[test]
    fn test_sheet_weight() {
        let kg = sheet_weight(Millimeters(1000.0), Millimeters(2000.0), Gsm(500.0));
        assert!((kg.0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_or_negative_inputs() {
        let mut input = order();
        input.sheet.length_mm = 0.0;
        assert_eq!(calculate(&input), Tonnes(0.0));

        let mut input = order();
        input.sheet.width_mm = -100.0;
        assert_eq!(calculate(&input), Tonnes(0.0));

        let mut input = order();
        input.quantity = 0;
        assert_eq!(calculate(&input), Tonnes(0.0));

        let mut input = order();
        input.quantity = -5;
        assert_eq!(calculate(&input), Tonnes(0.0));
    }

    #[test]
    fn test_empty_substance() {
        let mut input = order();
        input.sheet.substance = String::new();
        assert_eq!(calculate(&input), Tonnes(0.0));
    }

    #[test]
    fn test_linear_in_quantity() {
        let single = calculate(&order());
        let mut doubled = order();
        doubled.quantity = 2000;
        assert!((calculate(&doubled).0 - 2.0 * single.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_flute_uses_plain_sum() {
        let mut input = order();
        input.sheet.flute = "X".to_string();
        // 0.96 m² × 360 g/m² × 1000 sheets
        assert!((calculate(&input).0 - 0.3456).abs() < 1e-9);
    }

    #[test]
    fn test_batch_total() {
        let mut empty = order();
        empty.sheet.substance = String::new();
        let batch = calculate_batch(&[order(), order(), empty]);
        assert_eq!(batch.rows.len(), 3);
        assert_eq!(batch.rows[2], Tonnes(0.0));
        assert!((batch.total.0 - 2.0 * 0.383616).abs() < 1e-9);
    }

    #[test]
    fn test_batch_empty() {
        let batch = calculate_batch(&[]);
        assert!(batch.rows.is_empty());
        assert_eq!(batch.total, Tonnes(0.0));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = order();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"quantity\":1000"));
        assert!(json.contains("\"length_mm\":1200.0"));

        let roundtrip: TonnageInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(calculate(&order()), calculate(&order()));
    }
}
