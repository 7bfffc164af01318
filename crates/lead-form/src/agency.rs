//! Per-agency copy that reaches the lead form

use std::fmt;
use std::str::FromStr;

use lead_common::Field;
use thiserror::Error;

/// Which landing page the form is embedded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agency {
    Healthcare,
    Restaurant,
}

#[derive(Debug, Error)]
#[error("Unknown agency: {0} (expected healthcare or restaurant)")]
pub struct UnknownAgency(String);

/// Call-back number shown on the success panel
pub const CALL_BACK_DISPLAY: &str = "094158 90852";
pub const CALL_BACK_TEL: &str = "tel:09415890852";

impl Agency {
    pub fn placeholder(&self, field: Field) -> &'static str {
        match (self, field) {
            (Agency::Healthcare, Field::BusinessName) => "Your clinic or hospital name",
            (Agency::Restaurant, Field::BusinessName) => "Your restaurant or cafe name",
            (Agency::Healthcare, Field::Name) => "Dr. / Your full name",
            (Agency::Restaurant, Field::Name) => "Your full name",
            (Agency::Healthcare, Field::Email) => "doctor@clinic.com",
            (Agency::Restaurant, Field::Email) => "owner@restaurant.com",
            (_, Field::Phone) => "+91 98765 43210",
            (_, Field::City) => "Mumbai, Delhi...",
            (_, Field::Challenge) => "Select your challenge",
        }
    }

    /// Body text of the success panel
    pub fn success_message(&self) -> &'static str {
        match self {
            Agency::Healthcare => {
                "Our healthcare marketing experts will contact you within 24 hours with your personalised growth plan."
            }
            Agency::Restaurant => {
                "Our restaurant marketing experts will contact you within 24 hours with your personalised growth plan."
            }
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agency::Healthcare => f.write_str("healthcare"),
            Agency::Restaurant => f.write_str("restaurant"),
        }
    }
}

impl FromStr for Agency {
    type Err = UnknownAgency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "healthcare" => Ok(Agency::Healthcare),
            "restaurant" => Ok(Agency::Restaurant),
            other => Err(UnknownAgency(other.to_string())),
        }
    }
}
