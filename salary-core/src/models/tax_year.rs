use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;

/// Supported tax years.
///
/// Policy tables are versioned by this enum, so an unsupported year is
/// unrepresentable once parsing has succeeded and every downstream
/// lookup is infallible. Adding a year means adding a variant here and
/// a schedule in the policy tables; no calculator changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TaxYear {
    Y2025,
    Y2026,
}

impl TaxYear {
    pub const DEFAULT: TaxYear = TaxYear::Y2025;

    pub fn from_year(year: i32) -> Result<Self, EngineError> {
        match year {
            2025 => Ok(Self::Y2025),
            2026 => Ok(Self::Y2026),
            _ => Err(EngineError::UnsupportedTaxYear(year)),
        }
    }

    /// Parses a year, falling back to 2025 for anything unsupported.
    ///
    /// The interactive calculator never fails on a bad year; it quietly
    /// uses the default. That behavior lives here under its own name so
    /// callers opt into it deliberately; [`TaxYear::from_year`] is the
    /// strict path.
    pub fn from_year_or_default(year: i32) -> Self {
        Self::from_year(year).unwrap_or_else(|_| {
            warn!(year, "unsupported tax year, using {}", Self::DEFAULT);
            Self::DEFAULT
        })
    }

    pub fn as_i32(self) -> i32 {
        match self {
            Self::Y2025 => 2025,
            Self::Y2026 => 2026,
        }
    }
}

impl TryFrom<i32> for TaxYear {
    type Error = EngineError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::from_year(year)
    }
}

impl From<TaxYear> for i32 {
    fn from(year: TaxYear) -> i32 {
        year.as_i32()
    }
}

impl fmt::Display for TaxYear {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}
