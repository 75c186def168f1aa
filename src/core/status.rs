use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HelpDeskError;

/// Lifecycle state of a help-desk ticket.
///
/// The storage and wire representation uses the exact strings `"New"`,
/// `"In-Progress"`, `"Resolved"`, and `"Closed"`; nothing else is a valid
/// status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    New,
    #[serde(rename = "In-Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    /// All recognized statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Resolved, Self::Closed];

    /// The canonical storage string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In-Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = HelpDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "in-progress" | "in progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(HelpDeskError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Status {
    type Error = HelpDeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_strings_round_trip() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_parse_is_forgiving_about_case_and_spacing() {
        assert_eq!("in progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!(" CLOSED ".parse::<Status>().unwrap(), Status::Closed);
    }

    #[test]
    fn test_unrecognized_status_is_rejected() {
        let err = "Reopened".parse::<Status>().unwrap_err();
        assert!(matches!(err, HelpDeskError::InvalidStatus { value } if value == "Reopened"));
    }

    #[test]
    fn test_serde_uses_the_wire_strings() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"In-Progress\"");
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Status::InProgress);
    }
}
