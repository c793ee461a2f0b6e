//! # Unit Types
//!
//! Type-safe wrappers for the units used in board estimating. These are
//! plain `f64` newtypes that serialize as bare numbers.
//!
//! ## Units
//!
//! - Length: millimeters (sheet dimensions as entered), meters
//! - Area: square meters
//! - Grammage: grams per square meter (g/m², "gsm")
//! - Mass: kilograms, tonnes (1 t = 1000 kg)
//! - Money: US dollars, US dollars per kilogram
//!
//! ## Example
//!
//! ```rust
//! use board_core::units::{Kilograms, Meters, Millimeters, Tonnes};
//!
//! let length: Meters = Millimeters(1200.0).into();
//! assert_eq!(length.0, 1.2);
//!
//! let weight: Tonnes = Kilograms(2500.0).into();
//! assert_eq!(weight.0, 2.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl SqM {
    /// Area of a rectangular sheet given in millimeters
    pub fn of_sheet(length: Millimeters, width: Millimeters) -> Self {
        let length_m: Meters = length.into();
        let width_m: Meters = width.into();
        SqM(length_m.0 * width_m.0)
    }
}

// ============================================================================
// Grammage
// ============================================================================

/// Grammage in grams per square meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gsm(pub f64);

impl Gsm {
    /// Mass of `area` of board at this grammage
    pub fn mass_of(self, area: SqM) -> Kilograms {
        // g/m² × m² = g, then g → kg
        Kilograms(area.0 * self.0 / 1000.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in metric tonnes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

impl From<Kilograms> for Tonnes {
    fn from(kg: Kilograms) -> Self {
        Tonnes(kg.0 / 1000.0)
    }
}

impl From<Tonnes> for Kilograms {
    fn from(t: Tonnes) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

// ============================================================================
// Money
// ============================================================================

/// Amount in US dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(pub f64);

/// Unit price in US dollars per kilogram
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdPerKg(pub f64);

impl Mul<UsdPerKg> for Kilograms {
    type Output = Usd;
    fn mul(self, rhs: UsdPerKg) -> Usd {
        Usd(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(SqM);
impl_arithmetic!(Gsm);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Tonnes);
impl_arithmetic!(Usd);
impl_arithmetic!(UsdPerKg);
