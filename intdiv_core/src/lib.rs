//! # intdiv_core - Integer Division Engine
//!
//! `intdiv_core` divides arbitrary-precision signed integers under twelve
//! rounding policies. The truncating quotient and remainder are computed
//! once and every other policy is derived from that pair with exact
//! integer arithmetic. One approximate floating-point quotient rides along
//! for sanity checking.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take operands and return results
//! - **Exact**: `BigInt` throughout, no floating point except `double`
//! - **JSON-First**: Results and readouts serialize cleanly, integers as decimal strings
//! - **Errors are display states**: [`DivError::label`] is what the user sees
//!
//! ## Quick Start
//!
//! ```rust
//! use intdiv_core::{evaluate, Readout, RoundingMode};
//! use num_bigint::BigInt;
//!
//! let result = evaluate("-7", "2").unwrap();
//! assert_eq!(result.quotient(RoundingMode::Floor), &BigInt::from(-4));
//! assert_eq!(result.rem_floor, BigInt::from(1));
//!
//! let readout = Readout::from_outcome(&evaluate("abc", "2"));
//! assert!(readout.cells.iter().all(|cell| cell.text == "SYNTAX ERROR"));
//! ```
//!
//! ## Modules
//!
//! - [`division`] - Truncating division and every rounding variant
//! - [`rounding`] - The rounding policies
//! - [`operands`] - Parsing operand text
//! - [`readout`] - Display text for each output field
//! - [`settings`] - Which outputs a front end shows
//! - [`slides`] - Arrow-key slide navigation (independent of the engine)
//! - [`errors`] - Structured error types

pub mod decimal;
pub mod division;
pub mod errors;
pub mod operands;
pub mod readout;
pub mod rounding;
pub mod settings;
pub mod slides;

// Re-export commonly used types at crate root for convenience
pub use division::{div_rem, divide, evaluate, modulo, DivRem, DivisionResult, TruncatedPair};
pub use errors::{DivError, DivResult};
pub use readout::{OutputField, Readout, ReadoutState};
pub use rounding::RoundingMode;
pub use settings::DisplaySettings;
