use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permit status carried by a stored vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleStatus {
    Approved,
    Requested,
    Expired,
    Suspend,
    Issued,
    Inactive,
    OnHold,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 7] = [
        VehicleStatus::Approved,
        VehicleStatus::Requested,
        VehicleStatus::Expired,
        VehicleStatus::Suspend,
        VehicleStatus::Issued,
        VehicleStatus::Inactive,
        VehicleStatus::OnHold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Approved => "APPROVED",
            VehicleStatus::Requested => "REQUESTED",
            VehicleStatus::Expired => "EXPIRED",
            VehicleStatus::Suspend => "SUSPEND",
            VehicleStatus::Issued => "ISSUED",
            VehicleStatus::Inactive => "INACTIVE",
            VehicleStatus::OnHold => "ONHOLD",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vehicle status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for VehicleStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        VehicleStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Which statuses a query should match.
///
/// Kept apart from [`VehicleStatus`] so the `All` / `NoStatement` selectors
/// can never end up on a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusSelector {
    /// Every stored vehicle.
    #[default]
    All,
    /// Nothing. Produced for status tokens that name no known status.
    NoStatement,
    Only(VehicleStatus),
}

impl StatusSelector {
    /// Resolve an optional free-text token.
    ///
    /// A missing token selects everything, `"ALL"` selects everything, a
    /// known status selects that bucket and anything else selects nothing.
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            None => StatusSelector::All,
            Some(t) if t.trim().eq_ignore_ascii_case("all") => StatusSelector::All,
            Some(t) => t
                .parse::<VehicleStatus>()
                .map(StatusSelector::Only)
                .unwrap_or(StatusSelector::NoStatement),
        }
    }

    pub fn matches(&self, status: VehicleStatus) -> bool {
        match self {
            StatusSelector::All => true,
            StatusSelector::NoStatement => false,
            StatusSelector::Only(wanted) => *wanted == status,
        }
    }
}

impl From<VehicleStatus> for StatusSelector {
    fn from(status: VehicleStatus) -> Self {
        StatusSelector::Only(status)
    }
}
