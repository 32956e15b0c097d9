use serde::{Deserialize, Serialize};

use freshpredict_core::{DomainError, DomainResult};

/// Supported forecast horizons.
///
/// The engine only models these three windows; any other request is rejected
/// rather than extrapolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Week,
    Fortnight,
    Month,
}

impl Horizon {
    pub const fn days(self) -> usize {
        match self {
            Horizon::Week => 7,
            Horizon::Fortnight => 14,
            Horizon::Month => 30,
        }
    }

    pub fn from_days(days: u32) -> DomainResult<Self> {
        match days {
            7 => Ok(Horizon::Week),
            14 => Ok(Horizon::Fortnight),
            30 => Ok(Horizon::Month),
            _ => Err(DomainError::InvalidHorizon { days }),
        }
    }
}

impl TryFrom<u32> for Horizon {
    type Error = DomainError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::from_days(days)
    }
}
