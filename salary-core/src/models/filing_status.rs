use serde::{Deserialize, Serialize};

/// Filing status carried by breakdown records.
///
/// Only `Single` is populated in the builtin policy tables; records and
/// file names carry the status explicitly so further statuses can be
/// added without a format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
        }
    }

    /// Lowercase form used in record file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Single => "single",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Single" | "single" => Some(Self::Single),
            _ => None,
        }
    }
}
