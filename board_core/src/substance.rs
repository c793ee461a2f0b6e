//! # Substance Parsing
//!
//! A substance string lists the paper weights (g/m²) of each layer from the
//! outside in, separated by `/`:
//!
//! - `125/110/125` - single wall (liner / flute / liner)
//! - `150K/120/110/120/150W` - double wall, with liner-grade markers
//! - `125/110` - single face (liner / flute)
//!
//! A grade-marker suffix (`K` for kraft, `W` for white top, ...) is stripped.
//! Tokens that still don't yield a number are dropped silently, so the
//! parsed sequence can be shorter than the token count.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered paper weights (g/m²), one per layer.
///
/// First and last entries are the outer liners; interior entries alternate
/// flute medium and inner liner.
///
/// ```rust
/// use board_core::substance::PlyWeights;
///
/// let plies = PlyWeights::parse("150K/120/x/110");
/// assert_eq!(plies.as_slice(), &[150, 120, 110]);
/// assert_eq!(plies.to_string(), "150/120/110");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlyWeights(Vec<u32>);

impl PlyWeights {
    /// Parse a `/`-delimited substance string. Never fails.
    pub fn parse(substance: &str) -> Self {
        let weights = substance
            .split('/')
            .filter_map(|token| {
                let weight = parse_ply(token);
                if weight.is_none() {
                    tracing::trace!(token, "dropping unparseable substance token");
                }
                weight
            })
            .collect();
        PlyWeights(weights)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Plain sum of all layers, no flute take-up
    pub fn total(&self) -> f64 {
        self.0.iter().map(|&w| f64::from(w)).sum()
    }
}

impl From<Vec<u32>> for PlyWeights {
    fn from(weights: Vec<u32>) -> Self {
        PlyWeights(weights)
    }
}

impl From<&str> for PlyWeights {
    fn from(substance: &str) -> Self {
        PlyWeights::parse(substance)
    }
}

impl fmt::Display for PlyWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for weight in &self.0 {
            if !first {
                write!(f, "/")?;
            }
            write!(f, "{weight}")?;
            first = false;
        }
        Ok(())
    }
}

/// One token → weight: strip the grade-marker suffix, read the leading digits.
///
/// Only a trailing run of letters counts as a grade marker, so `x110` is
/// dropped. After the marker, an optional `+` and the leading digits make
/// the weight; anything after them is ignored ("12.5" and "12a5" read as 12).
fn parse_ply(token: &str) -> Option<u32> {
    let unmarked = token.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let unsigned = unmarked.strip_prefix('+').unwrap_or(unmarked);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_wall() {
        assert_eq!(PlyWeights::parse("125/110/125").as_slice(), &[125, 110, 125]);
    }

    #[test]
    fn test_grade_markers_stripped() {
        let plies = PlyWeights::parse("150K/120/110/120/150W");
        assert_eq!(plies.as_slice(), &[150, 120, 110, 120, 150]);
    }

    #[test]
    fn test_invalid_tokens_dropped() {
        let plies = PlyWeights::parse("125/abc/125");
        assert_eq!(plies.as_slice(), &[125, 125]);
        assert_eq!(plies.len(), 2);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(PlyWeights::parse("").is_empty());
        assert!(PlyWeights::parse("/").is_empty());
        assert!(PlyWeights::parse("K/W/x").is_empty());
    }

    #[test]
    fn test_whitespace_and_trailing_garbage() {
        assert_eq!(PlyWeights::parse(" 125 / 110 /125 ").as_slice(), &[125, 110, 125]);
        assert_eq!(PlyWeights::parse("12.5/110").as_slice(), &[12, 110]);
    }

    #[test]
    fn test_only_suffix_markers_stripped() {
        assert_eq!(PlyWeights::parse("125/x110/125").as_slice(), &[125, 125]);
        assert_eq!(PlyWeights::parse("150KW/K150").as_slice(), &[150]);
    }

    #[test]
    fn test_reads_leading_digits_only() {
        assert_eq!(PlyWeights::parse("12a5").as_slice(), &[12]);
        assert_eq!(PlyWeights::parse("1e3").as_slice(), &[1]);
        assert_eq!(PlyWeights::parse("125abc").as_slice(), &[125]);
    }

    #[test]
    fn test_plus_sign_accepted() {
        assert_eq!(PlyWeights::parse("+125/110/+125K").as_slice(), &[125, 110, 125]);
        assert!(PlyWeights::parse("+").is_empty());
    }

    #[test]
    fn test_negative_token_dropped() {
        assert_eq!(PlyWeights::parse("-125/110").as_slice(), &[110]);
    }

    #[test]
    fn test_overflow_dropped() {
        assert_eq!(PlyWeights::parse("99999999999/110").as_slice(), &[110]);
    }

    #[test]
    fn test_total() {
        assert_eq!(PlyWeights::parse("125/110/125").total(), 360.0);
        assert_eq!(PlyWeights::default().total(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlyWeights::from(vec![150, 120, 150]).to_string(), "150/120/150");
        assert_eq!(PlyWeights::default().to_string(), "");
    }
}
