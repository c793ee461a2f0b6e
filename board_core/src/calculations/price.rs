//! # Order Price
//!
//! `price = tonnage × 1000 × price_per_kg`. A price per kilogram of zero or
//! less gives a price of 0.
//!
//! [`quote`] prices several rows at one shared price per kilogram and totals
//! them, the way a multi-line quotation is built.

use serde::{Deserialize, Serialize};

use super::tonnage::{self, TonnageInput};
use crate::units::{Kilograms, Usd, UsdPerKg};

/// Input parameters for a price calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_mm": 1200.0,
///   "width_mm": 800.0,
///   "substance": "125/110/125",
///   "flute": "B",
///   "quantity": 1000,
///   "price_per_kg": 1.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    #[serde(flatten)]
    pub row: TonnageInput,

    /// Paper price in USD per kilogram
    pub price_per_kg: f64,
}

/// Calculate the price of an order.
pub fn calculate(input: &PriceInput) -> Usd {
    if input.price_per_kg <= 0.0 {
        tracing::debug!(price_per_kg = input.price_per_kg, "non-positive unit price, price is 0");
        return Usd(0.0);
    }

    let weight: Kilograms = tonnage::calculate(&input.row).into();
    weight * UsdPerKg(input.price_per_kg)
}

/// Priced rows and the quotation total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Shared unit price (USD/kg)
    pub price_per_kg: f64,
    /// Price of each row, in input order
    pub lines: Vec<Usd>,
    /// Sum of the finite line prices
    pub total: Usd,
}

/// Price every row at `price_per_kg`.
///
/// A row whose price is not a finite number counts as 0 in the total.
///
/// ```rust
/// use board_core::calculations::{price, SheetSpec};
///
/// let rows = vec![
///     SheetSpec::new(1000.0, 1000.0, "125/110/125", "B").with_quantity(100),
///     SheetSpec::new(1000.0, 1000.0, "125/110/125", "B").with_quantity(300),
/// ];
/// let quote = price::quote(&rows, 2.0);
/// assert_eq!(quote.lines.len(), 2);
/// assert!((quote.total.0 - (quote.lines[0].0 + quote.lines[1].0)).abs() < 1e-9);
/// ```
pub fn quote(rows: &[TonnageInput], price_per_kg: f64) -> PriceQuote {
    let lines: Vec<Usd> = rows
        .iter()
        .map(|row| {
            calculate(&PriceInput {
                row: row.clone(),
                price_per_kg,
            })
        })
        .collect();

    let total = lines
        .iter()
        .filter(|amount| amount.0.is_finite())
        .fold(Usd(0.0), |acc, &amount| acc + amount);

    PriceQuote {
        price_per_kg,
        lines,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::SheetSpec;

    fn row() -> TonnageInput {
        SheetSpec::new(1200.0, 800.0, "125/110/125", "B").with_quantity(1000)
    }

    #[test]
    fn test_basic_price() {
        // 383.616 kg × 1.5 USD/kg
        let amount = calculate(&row().at_price(1.5));
        assert!((amount.0 - 575.424).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_price_is_zero() {
        assert_eq!(calculate(&row().at_price(0.0)), Usd(0.0));
        assert_eq!(calculate(&row().at_price(-2.0)), Usd(0.0));
    }

    #[test]
    fn test_zero_tonnage_is_zero_price() {
        let mut input = row().at_price(1.5);
        input.row.quantity = 0;
        assert_eq!(calculate(&input), Usd(0.0));
    }

    #[test]
    fn test_linear_in_unit_price() {
        for k in [0.25, 1.0, 1.5, 7.0] {
            let single = calculate(&row().at_price(k));
            let double = calculate(&row().at_price(2.0 * k));
            assert!((double.0 - 2.0 * single.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_quote_total() {
        let mut bad = row();
        bad.sheet.substance = "x".to_string();
        let quote = quote(&[row(), bad, row()], 1.5);
        assert_eq!(quote.lines.len(), 3);
        assert_eq!(quote.lines[1], Usd(0.0));
        assert!((quote.total.0 - 2.0 * 575.424).abs() < 1e-9);
    }

    #[test]
    fn test_quote_skips_non_finite_rows() {
        let quote = quote(&[row(), row()], f64::NAN);
        assert!(quote.lines.iter().all(|l| l.0.is_nan()));
        assert_eq!(quote.total, Usd(0.0));
    }

    #[test]
    fn test_json_input() {
        let json = r#"{
            "length_mm": 1200.0,
            "width_mm": 800.0,
            "substance": "125/110/125",
            "flute": "B",
            "quantity": 1000,
            "price_per_kg": 1.5
        }"#;
        let input: PriceInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, row().at_price(1.5));
    }
}
