//! # Readout
//!
//! The boundary between the engine and whatever displays it. A [`Readout`]
//! is the list of output fields with their display text: exact decimal
//! strings for every integer, a best-effort rendering of the approximate
//! quotient, or the same error label in every cell.
//!
//! ## Example
//!
//! ```rust
//! use intdiv_core::division::evaluate;
//! use intdiv_core::readout::{OutputField, Readout, ReadoutState};
//! use intdiv_core::rounding::RoundingMode;
//!
//! let readout = Readout::from_outcome(&evaluate("-7", "2"));
//! assert_eq!(readout.state, ReadoutState::Numbers);
//! assert_eq!(readout.text(OutputField::Quotient(RoundingMode::Floor)), Some("-4"));
//!
//! let readout = Readout::from_outcome(&evaluate("5", "0"));
//! assert_eq!(readout.text(OutputField::Quotient(RoundingMode::Floor)), Some("DIVISION BY ZERO"));
//! ```

use serde::{Deserialize, Serialize};

use crate::division::DivisionResult;
use crate::errors::DivResult;
use crate::rounding::RoundingMode;

/// One displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputField {
    Double,
    Quotient(RoundingMode),
    RemTrunc,
    RemFloor,
}

impl OutputField {
    /// All fields in display order
    pub const ALL: [OutputField; 15] = [
        OutputField::Double,
        OutputField::Quotient(RoundingMode::Trunc),
        OutputField::Quotient(RoundingMode::Mag),
        OutputField::Quotient(RoundingMode::Floor),
        OutputField::Quotient(RoundingMode::Ceil),
        OutputField::Quotient(RoundingMode::Odd),
        OutputField::Quotient(RoundingMode::Even),
        OutputField::Quotient(RoundingMode::TiesTrunc),
        OutputField::Quotient(RoundingMode::TiesMag),
        OutputField::Quotient(RoundingMode::TiesFloor),
        OutputField::Quotient(RoundingMode::TiesCeil),
        OutputField::Quotient(RoundingMode::TiesOdd),
        OutputField::Quotient(RoundingMode::TiesEven),
        OutputField::RemTrunc,
        OutputField::RemFloor,
    ];

    /// Stable element id, e.g. `quo-ties-even` or `rem-floor`
    pub fn id(&self) -> String {
        match self {
            OutputField::Double => "quo-double".to_string(),
            OutputField::Quotient(mode) => format!("quo-{}", mode.code()),
            OutputField::RemTrunc => "rem-trunc".to_string(),
            OutputField::RemFloor => "rem-floor".to_string(),
        }
    }

    /// Short label for tables
    pub fn label(&self) -> &'static str {
        match self {
            OutputField::Double => "double",
            OutputField::Quotient(mode) => mode.code(),
            OutputField::RemTrunc => "rem trunc",
            OutputField::RemFloor => "rem floor",
        }
    }

    /// Display text of this field for a successful division
    pub fn render(&self, result: &DivisionResult) -> String {
        match self {
            OutputField::Double => format_approximate(result.double),
            OutputField::Quotient(mode) => result.quotient(*mode).to_string(),
            OutputField::RemTrunc => result.rem_trunc.to_string(),
            OutputField::RemFloor => result.rem_floor.to_string(),
        }
    }
}

/// Whether the cells hold numbers or an error label (`data-h="num"` / `data-h="err"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadoutState {
    Numbers,
    Error,
}

/// One rendered output value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub field: OutputField,
    pub text: String,
}

/// Display text for every output field of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    pub state: ReadoutState,
    pub cells: Vec<Cell>,
}

impl Readout {
    /// Render a successful division
    pub fn from_result(result: &DivisionResult) -> Self {
        Readout {
            state: ReadoutState::Numbers,
            cells: OutputField::ALL
                .iter()
                .map(|field| Cell {
                    field: *field,
                    text: field.render(result),
                })
                .collect(),
        }
    }

    /// Put the same label in every cell
    pub fn error(label: &str) -> Self {
        Readout {
            state: ReadoutState::Error,
            cells: OutputField::ALL
                .iter()
                .map(|field| Cell {
                    field: *field,
                    text: label.to_string(),
                })
                .collect(),
        }
    }

    /// Render the outcome of [`crate::division::evaluate`]
    pub fn from_outcome(outcome: &DivResult<DivisionResult>) -> Self {
        match outcome {
            Ok(result) => Readout::from_result(result),
            Err(e) => Readout::error(e.label()),
        }
    }

    /// Text shown for `field`
    pub fn text(&self, field: OutputField) -> Option<&str> {
        self.cells
            .iter()
            .find(|cell| cell.field == field)
            .map(|cell| cell.text.as_str())
    }

    pub fn is_error(&self) -> bool {
        self.state == ReadoutState::Error
    }
}

/// Render the approximate quotient: `Infinity`, `-Infinity`, `NaN`, or the
/// shortest decimal that reads back as the same `f64`.
pub fn format_approximate(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // no "-0"
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::division::evaluate;

    #[test]
    fn test_every_field_present_once() {
        let readout = Readout::from_outcome(&evaluate("7", "2"));
        assert_eq!(readout.cells.len(), 15);
        let ids: std::collections::HashSet<String> =
            readout.cells.iter().map(|c| c.field.id()).collect();
        assert_eq!(ids.len(), 15);
        assert!(ids.contains("quo-ties-even"));
        assert!(ids.contains("rem-floor"));
    }

    #[test]
    fn test_numbers() {
        let readout = Readout::from_outcome(&evaluate("7", "2"));
        assert!(!readout.is_error());
        assert_eq!(readout.text(OutputField::Double), Some("3.5"));
        assert_eq!(readout.text(OutputField::Quotient(RoundingMode::Trunc)), Some("3"));
        assert_eq!(readout.text(OutputField::Quotient(RoundingMode::TiesOdd)), Some("3"));
        assert_eq!(readout.text(OutputField::RemTrunc), Some("1"));
    }

    #[test]
    fn test_division_by_zero_replaces_everything() {
        let readout = Readout::from_outcome(&evaluate("5", "0"));
        assert!(readout.is_error());
        assert!(readout.cells.iter().all(|c| c.text == "DIVISION BY ZERO"));
    }

    #[test]
    fn test_syntax_error_replaces_everything() {
        let readout = Readout::from_outcome(&evaluate("abc", "2"));
        assert!(readout.cells.iter().all(|c| c.text == "SYNTAX ERROR"));
    }

    #[test]
    fn test_recovers_after_error() {
        let broken = Readout::from_outcome(&evaluate("", "2"));
        let fixed = Readout::from_outcome(&evaluate("8", "2"));
        assert!(broken.is_error());
        assert_eq!(fixed.state, ReadoutState::Numbers);
        assert_eq!(fixed.text(OutputField::Quotient(RoundingMode::Floor)), Some("4"));
    }

    #[test]
    fn test_format_approximate() {
        assert_eq!(format_approximate(3.0), "3");
        assert_eq!(format_approximate(-0.25), "-0.25");
        assert_eq!(format_approximate(f64::INFINITY), "Infinity");
        assert_eq!(format_approximate(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_approximate(f64::NAN), "NaN");
        assert_eq!(format_approximate(-0.0), "0");
    }

    #[test]
    fn test_readout_json() {
        let readout = Readout::from_outcome(&evaluate("1", "3"));
        let json = serde_json::to_string(&readout).unwrap();
        assert!(json.contains(r#""state":"numbers""#));
        assert!(json.contains(r#"{"field":{"quotient":"ties-mag"},"text":"0"}"#));
    }
}
