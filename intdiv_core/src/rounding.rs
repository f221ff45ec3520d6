//! Rounding policies for integer division
//!
//! Twelve policies, all reachable from a single truncating division by
//! stepping at most once away from zero. The first six are directed: they
//! decide what to do with any nonzero remainder. The `Ties*` six round to
//! the nearest quotient and only use their rule to break an exact halfway tie.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A policy for turning the exact quotient `x / y` into an integer.
///
/// # Example
/// ```
/// use intdiv_core::rounding::RoundingMode;
///
/// let mode: RoundingMode = "ties-even".parse().unwrap();
/// assert_eq!(mode, RoundingMode::TiesEven);
/// assert!(mode.is_ties());
/// assert_eq!(mode.code(), "ties-even");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RoundingMode {
    /// Toward zero
    Trunc,
    /// Away from zero
    Mag,
    /// Toward negative infinity
    Floor,
    /// Toward positive infinity
    Ceil,
    /// To the odd neighbour when inexact
    Odd,
    /// To the even neighbour when inexact
    Even,
    /// Nearest, ties toward zero
    TiesTrunc,
    /// Nearest, ties away from zero
    TiesMag,
    /// Nearest, ties toward negative infinity
    TiesFloor,
    /// Nearest, ties toward positive infinity
    TiesCeil,
    /// Nearest, ties to the odd quotient
    TiesOdd,
    /// Nearest, ties to the even quotient
    TiesEven,
}

impl RoundingMode {
    /// All policies in display order
    pub const ALL: [RoundingMode; 12] = [
        RoundingMode::Trunc,
        RoundingMode::Mag,
        RoundingMode::Floor,
        RoundingMode::Ceil,
        RoundingMode::Odd,
        RoundingMode::Even,
        RoundingMode::TiesTrunc,
        RoundingMode::TiesMag,
        RoundingMode::TiesFloor,
        RoundingMode::TiesCeil,
        RoundingMode::TiesOdd,
        RoundingMode::TiesEven,
    ];

    /// Stable kebab-case code, also accepted by [`FromStr`]
    pub fn code(&self) -> &'static str {
        match self {
            RoundingMode::Trunc => "trunc",
            RoundingMode::Mag => "mag",
            RoundingMode::Floor => "floor",
            RoundingMode::Ceil => "ceil",
            RoundingMode::Odd => "odd",
            RoundingMode::Even => "even",
            RoundingMode::TiesTrunc => "ties-trunc",
            RoundingMode::TiesMag => "ties-mag",
            RoundingMode::TiesFloor => "ties-floor",
            RoundingMode::TiesCeil => "ties-ceil",
            RoundingMode::TiesOdd => "ties-odd",
            RoundingMode::TiesEven => "ties-even",
        }
    }

    /// Human-readable description of the policy
    pub fn description(&self) -> &'static str {
        match self {
            RoundingMode::Trunc => "Round toward zero",
            RoundingMode::Mag => "Round away from zero",
            RoundingMode::Floor => "Round toward negative infinity",
            RoundingMode::Ceil => "Round toward positive infinity",
            RoundingMode::Odd => "Round to the odd neighbour",
            RoundingMode::Even => "Round to the even neighbour",
            RoundingMode::TiesTrunc => "Round to nearest, ties toward zero",
            RoundingMode::TiesMag => "Round to nearest, ties away from zero",
            RoundingMode::TiesFloor => "Round to nearest, ties toward negative infinity",
            RoundingMode::TiesCeil => "Round to nearest, ties toward positive infinity",
            RoundingMode::TiesOdd => "Round to nearest, ties to odd",
            RoundingMode::TiesEven => "Round to nearest, ties to even",
        }
    }

    /// True for the round-to-nearest policies
    pub fn is_ties(&self) -> bool {
        matches!(
            self,
            RoundingMode::TiesTrunc
                | RoundingMode::TiesMag
                | RoundingMode::TiesFloor
                | RoundingMode::TiesCeil
                | RoundingMode::TiesOdd
                | RoundingMode::TiesEven
        )
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-").to_ascii_lowercase();
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.code() == wanted)
            .ok_or_else(|| format!("Unknown rounding mode: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for mode in RoundingMode::ALL {
            assert_eq!(mode.code().parse::<RoundingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_accepts_snake_case() {
        assert_eq!("TIES_FLOOR".parse::<RoundingMode>().unwrap(), RoundingMode::TiesFloor);
        assert!("nearest".parse::<RoundingMode>().is_err());
    }

    #[test]
    fn test_ties_split() {
        let ties = RoundingMode::ALL.iter().filter(|m| m.is_ties()).count();
        assert_eq!(ties, 6);
        assert!(!RoundingMode::Floor.is_ties());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&RoundingMode::TiesOdd).unwrap();
        assert_eq!(json, "\"ties-odd\"");
    }
}
