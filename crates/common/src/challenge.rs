use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The "biggest challenge" options offered by the lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Challenge {
    LowInquiryVolume,
    PoorOnlineVisibility,
    HighMarketingCosts,
    CannotTrackRoi,
    NeedCompleteSolution,
}

impl Challenge {
    /// All options, in the order the select widget lists them
    pub const ALL: [Challenge; 5] = [
        Challenge::LowInquiryVolume,
        Challenge::PoorOnlineVisibility,
        Challenge::HighMarketingCosts,
        Challenge::CannotTrackRoi,
        Challenge::NeedCompleteSolution,
    ];

    /// Label shown to the visitor and sent over the wire
    pub fn label(&self) -> &'static str {
        match self {
            Challenge::LowInquiryVolume => "Low inquiry volume",
            Challenge::PoorOnlineVisibility => "Poor online visibility",
            Challenge::HighMarketingCosts => "High marketing costs",
            Challenge::CannotTrackRoi => "Cannot track ROI",
            Challenge::NeedCompleteSolution => "Need complete solution",
        }
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Challenge {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Challenge::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| Error::UnknownChallenge(s.to_string()))
    }
}

impl From<Challenge> for String {
    fn from(challenge: Challenge) -> Self {
        challenge.label().to_string()
    }
}

impl TryFrom<String> for Challenge {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for challenge in Challenge::ALL {
            assert_eq!(challenge.label().parse::<Challenge>().unwrap(), challenge);
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = "Too many customers".parse::<Challenge>().unwrap_err();
        assert!(matches!(err, Error::UnknownChallenge(_)));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Challenge::CannotTrackRoi).unwrap();
        assert_eq!(json, "\"Cannot track ROI\"");
    }
}
