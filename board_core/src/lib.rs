//! # board_core - Corrugated Board Calculation Engine
//!
//! `board_core` estimates the physical and commercial properties of
//! corrugated board sheets from their size, substance (ply weights) and
//! flute profile: grammage, order tonnage, price, and the minimum order
//! quantity that reaches a production tonnage.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Total**: Calculators never fail; unusable input gives 0, and an
//!   unreachable MOQ is reported as such instead of an error
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use board_core::calculate_grammage;
//! use board_core::calculations::{price, SheetSpec};
//!
//! assert!((calculate_grammage("150/120/110/120/150", "BC") - 748.4).abs() < 1e-9);
//!
//! let order = SheetSpec::new(1200.0, 800.0, "125/110/125", "B")
//!     .with_quantity(1000)
//!     .at_price(1.5);
//! let amount = price::calculate(&order);
//! assert!(amount.0 > 575.0 && amount.0 < 576.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Grammage, tonnage, price and MOQ
//! - [`flute`] - Flute codes and the take-up table
//! - [`substance`] - Substance string parsing
//! - [`units`] - Type-safe unit wrappers
//! - [`articles`] - Sample article catalog with search and sorting
//! - [`settings`] - TOML-backed user defaults
//! - [`errors`] - Structured error types

pub mod articles;
pub mod calculations;
pub mod errors;
pub mod flute;
pub mod settings;
pub mod substance;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use articles::{Article, ArticleCatalog};
pub use calculations::{calculate_grammage, Moq, MoqInput, PriceInput, SheetSpec, TonnageInput};
pub use errors::{CalcError, CalcResult};
pub use flute::{takeup_factor, FluteCode};
pub use settings::Settings;
pub use substance::PlyWeights;
