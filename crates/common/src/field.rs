use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A visitor-editable field of the lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BusinessName,
    Name,
    Phone,
    Email,
    City,
    Challenge,
}

impl Field {
    /// Fields in form order
    pub const ALL: [Field; 6] = [
        Field::BusinessName,
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::City,
        Field::Challenge,
    ];

    /// Wire / DOM name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::BusinessName => "businessName",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::City => "city",
            Field::Challenge => "challenge",
        }
    }

    /// Everything except the challenge select must be filled in
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Challenge)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        assert_eq!("businessName".parse::<Field>().unwrap(), Field::BusinessName);
        assert_eq!("city".parse::<Field>().unwrap(), Field::City);
        assert!("business_name".parse::<Field>().is_err());
    }

    #[test]
    fn test_only_challenge_is_optional() {
        let optional: Vec<Field> = Field::ALL.into_iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![Field::Challenge]);
    }
}
