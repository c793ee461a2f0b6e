//! # Board Grammage
//!
//! Combines parsed ply weights with flute take-up to get the grammage of the
//! finished board. Dispatch is on ply count and flute shape, first match wins:
//!
//! 1. 3 plies + single-wall flute: `L1 + F×k + L2`
//! 2. 5 plies + double-wall flute: `L1 + F1×k1 + L2 + F2×k2 + L3`
//! 3. 2 plies + single-wall flute (single face): `L1 + F×k`
//! 4. Anything else: plain sum of the plies, no take-up
//!
//! An empty substance gives 0, which downstream means "no data".
//!
//! ## Example
//!
//! ```rust
//! use board_core::calculations::grammage::calculate_grammage;
//!
//! // 125 + 110×1.36 + 125
//! let gsm = calculate_grammage("125/110/125", "B");
//! assert!((gsm - 399.6).abs() < 1e-9);
//!
//! // Unknown flute: plain sum
//! assert_eq!(calculate_grammage("125/110/125", "Z"), 360.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::flute::FluteCode;
use crate::substance::PlyWeights;
use crate::units::Gsm;

/// Which rule produced a grammage value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrammageRule {
    /// Liner / flute / liner
    SingleWall,
    /// Liner / flute / liner / flute / liner
    DoubleWall,
    /// Liner / flute
    SingleFace,
    /// Ply count and flute didn't match a board shape; plain sum
    PlainSum,
    /// Nothing parsed from the substance
    NoData,
}

impl GrammageRule {
    pub fn display_name(&self) -> &'static str {
        match self {
            GrammageRule::SingleWall => "Single wall",
            GrammageRule::DoubleWall => "Double wall",
            GrammageRule::SingleFace => "Single face",
            GrammageRule::PlainSum => "Plain sum (no take-up)",
            GrammageRule::NoData => "No data",
        }
    }
}

/// Grammage together with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrammageBreakdown {
    pub grammage: Gsm,
    pub rule: GrammageRule,
}

/// Resolve the grammage of a board and report which rule applied.
///
/// `flute` is `None` when the caller's code is not in the table; that always
/// lands on the plain-sum rule.
pub fn resolve_with_rule(plies: &PlyWeights, flute: Option<FluteCode>) -> GrammageBreakdown {
    let w = |i: usize| f64::from(plies.as_slice()[i]);

    let (grammage, rule) = match (plies.len(), flute) {
        (0, _) => (0.0, GrammageRule::NoData),
        (3, Some(FluteCode::Single(f))) => (w(0) + w(1) * f.takeup() + w(2), GrammageRule::SingleWall),
        (5, Some(FluteCode::Double(d))) => {
            let (first, second) = d.constituents();
            (
                w(0) + w(1) * first.takeup() + w(2) + w(3) * second.takeup() + w(4),
                GrammageRule::DoubleWall,
            )
        }
        (2, Some(FluteCode::Single(f))) => (w(0) + w(1) * f.takeup(), GrammageRule::SingleFace),
        (count, _) => {
            tracing::debug!(
                plies = count,
                flute = flute.map(|f| f.code()).unwrap_or("?"),
                "no board shape matched, using plain ply sum"
            );
            (plies.total(), GrammageRule::PlainSum)
        }
    };

    GrammageBreakdown {
        grammage: Gsm(grammage),
        rule,
    }
}

/// Resolve the grammage of a board from parsed plies and a flute code.
pub fn resolve(plies: &PlyWeights, flute: Option<FluteCode>) -> Gsm {
    resolve_with_rule(plies, flute).grammage
}

/// String-level entry point: substance text and flute code text → g/m².
///
/// Never fails; malformed input degrades to the plain sum or to 0.
pub fn calculate_grammage(substance: &str, flute: &str) -> f64 {
    resolve(&PlyWeights::parse(substance), FluteCode::from_code(flute)).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flute::{DoubleWallFlute, SingleWallFlute};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_wall_b() {
        let gsm = calculate_grammage("125/110/125", "B");
        assert!((gsm - 399.6).abs() < EPS);
    }

    #[test]
    fn test_single_wall_every_flute() {
        for flute in SingleWallFlute::ALL {
            let gsm = calculate_grammage("150/120/150", flute.code());
            let expected = 150.0 + 120.0 * flute.takeup() + 150.0;
            assert!((gsm - expected).abs() < EPS, "flute {}", flute.code());
        }
    }

    #[test]
    fn test_double_wall_bc() {
        // 150 + 120×1.36 + 110 + 120×1.46 + 150 = 748.4
        let gsm = calculate_grammage("150/120/110/120/150", "BC");
        assert!((gsm - 748.4).abs() < EPS);
    }

    #[test]
    fn test_double_wall_letter_order_matters() {
        // AB: first medium gets A (1.54), second gets B (1.36)
        let gsm = calculate_grammage("150/100/110/200/150", "AB");
        let expected = 150.0 + 100.0 * 1.54 + 110.0 + 200.0 * 1.36 + 150.0;
        assert!((gsm - expected).abs() < EPS);
    }

    #[test]
    fn test_double_wall_uses_constituents_not_stored_sum() {
        let plies = PlyWeights::from(vec![100, 100, 100, 100, 100]);
        let gsm = resolve(&plies, Some(FluteCode::Double(DoubleWallFlute::BE)));
        let expected = 300.0 + 100.0 * 1.36 + 100.0 * 1.27;
        assert!((gsm.0 - expected).abs() < EPS);
    }

    #[test]
    fn test_single_face() {
        let gsm = calculate_grammage("125/110", "C");
        assert!((gsm - (125.0 + 110.0 * 1.46)).abs() < EPS);
    }

    #[test]
    fn test_fallback_mismatched_flute() {
        // 3 plies with a double-wall code
        assert_eq!(calculate_grammage("125/110/125", "BC"), 360.0);
        // 5 plies with a single-wall code
        assert_eq!(calculate_grammage("150/120/110/120/150", "B"), 650.0);
        // 2 plies with a double-wall code
        assert_eq!(calculate_grammage("125/110", "AB"), 235.0);
    }

    #[test]
    fn test_fallback_odd_ply_counts() {
        assert_eq!(calculate_grammage("200", "B"), 200.0);
        assert_eq!(calculate_grammage("100/100/100/100", "B"), 400.0);
        assert_eq!(calculate_grammage("100/100/100/100/100/100/100", "BC"), 700.0);
    }

    #[test]
    fn test_fallback_unrecognised_flute() {
        assert_eq!(calculate_grammage("125/110/125", ""), 360.0);
        assert_eq!(calculate_grammage("125/110/125", "b"), 360.0);
    }

    #[test]
    fn test_empty_substance_is_zero() {
        assert_eq!(calculate_grammage("", "B"), 0.0);
        assert_eq!(calculate_grammage("x/y", "BC"), 0.0);
    }

    #[test]
    fn test_dropped_token_changes_shape() {
        // "abc" drops out, leaving a 2-ply single face
        let gsm = calculate_grammage("125/abc/110", "B");
        assert!((gsm - (125.0 + 110.0 * 1.36)).abs() < EPS);
    }

    #[test]
    fn test_letter_prefixed_token_is_not_a_ply() {
        // "x110" drops out: 125 + 125×1.36 single face, not 3-ply single wall
        let gsm = calculate_grammage("125/x110/125", "B");
        assert!((gsm - 295.0).abs() < EPS);
    }

    #[test]
    fn test_rule_reported() {
        let plies = PlyWeights::parse("125/110/125");
        let b = Some(FluteCode::Single(SingleWallFlute::B));
        assert_eq!(resolve_with_rule(&plies, b).rule, GrammageRule::SingleWall);
        assert_eq!(resolve_with_rule(&plies, None).rule, GrammageRule::PlainSum);
        assert_eq!(resolve_with_rule(&PlyWeights::default(), b).rule, GrammageRule::NoData);
        assert_eq!(
            resolve_with_rule(&PlyWeights::parse("125/110"), b).rule,
            GrammageRule::SingleFace
        );
    }

    #[test]
    fn test_idempotent() {
        let first = calculate_grammage("150K/120/110/120/150", "BE");
        let second = calculate_grammage("150K/120/110/120/150", "BE");
        assert_eq!(first, second);
    }
}
