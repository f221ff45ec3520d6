//! # Display Settings
//!
//! Which groups of output a front end shows and what the inputs start with.
//! Stored as JSON; every field is optional in the file and falls back to
//! [`DisplaySettings::default`].
//!
//! ```json
//! {
//!   "show_approximate": true,
//!   "show_ties": true,
//!   "show_remainders": true,
//!   "initial_x": "7",
//!   "initial_y": "2"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::readout::{Cell, OutputField, Readout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Show the floating-point `double` quotient
    pub show_approximate: bool,
    /// Show the six round-to-nearest quotients
    pub show_ties: bool,
    /// Show `rem_trunc` and `rem_floor`
    pub show_remainders: bool,
    /// Dividend text the inputs start with
    pub initial_x: String,
    /// Divisor text the inputs start with
    pub initial_y: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            show_approximate: true,
            show_ties: true,
            show_remainders: true,
            initial_x: "7".to_string(),
            initial_y: "2".to_string(),
        }
    }
}

impl DisplaySettings {
    /// Whether `field` is shown under these settings
    pub fn shows(&self, field: OutputField) -> bool {
        match field {
            OutputField::Double => self.show_approximate,
            OutputField::Quotient(mode) => !mode.is_ties() || self.show_ties,
            OutputField::RemTrunc | OutputField::RemFloor => self.show_remainders,
        }
    }

    /// The cells of `readout` that are shown, in display order
    pub fn visible<'a>(&'a self, readout: &'a Readout) -> impl Iterator<Item = &'a Cell> + 'a {
        readout.cells.iter().filter(move |cell| self.shows(cell.field))
    }
}
