use serde::{Deserialize, Serialize};

use crate::{Error, Field, Result};

/// A prospective-customer contact record captured by the lead form.
///
/// Immutable once submitted: the store exposes no update or delete, and the
/// submitting client keeps no identifier for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub business_name: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,

    /// One of the [`crate::Challenge`] labels, or empty when none was picked
    #[serde(default)]
    pub challenge: String,

    /// Milliseconds since the Unix epoch, stamped by the client at submit time
    pub timestamp: i64,
}

impl Lead {
    pub fn new(
        business_name: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
        challenge: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            city: city.into(),
            challenge: challenge.into(),
            timestamp,
        }
    }

    /// Value of a form field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::BusinessName => &self.business_name,
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::City => &self.city,
            Field::Challenge => &self.challenge,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::BusinessName => &mut self.business_name,
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::City => &mut self.city,
            Field::Challenge => &mut self.challenge,
        }
    }

    /// First required field that is blank, in form order
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .filter(Field::is_required)
            .find(|f| self.get(*f).trim().is_empty())
    }

    /// Required-field presence check. Nothing else is validated server-side.
    pub fn validate(&self) -> Result<()> {
        match self.missing_field() {
            Some(field) => Err(Error::MissingField(field.as_str())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lead {
        Lead::new(
            "Acme Clinic",
            "Dr. Rao",
            "9876543210",
            "rao@acme.com",
            "Pune",
            "Low inquiry volume",
            1_700_000_000_000,
        )
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["businessName"], "Acme Clinic");
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
        assert!(json.get("business_name").is_none());
    }

    #[test]
    fn test_challenge_defaults_to_empty() {
        let lead: Lead = serde_json::from_str(
            r#"{"businessName":"B","name":"N","phone":"1","email":"a@b.c","city":"X","timestamp":5}"#,
        )
        .unwrap();
        assert_eq!(lead.challenge, "");
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let mut lead = sample();
        lead.city = "   ".to_string();
        let err = lead.validate().unwrap_err();
        assert!(matches!(err, Error::MissingField("city")));
    }

    #[test]
    fn test_field_mut_targets_named_field() {
        let mut lead = Lead::default();
        *lead.field_mut(Field::BusinessName) = "Spice Route".to_string();
        assert_eq!(lead.get(Field::BusinessName), "Spice Route");
        assert_eq!(lead.missing_field(), Some(Field::Name));
    }

    #[test]
    fn test_first_missing_field_in_form_order() {
        let mut lead = sample();
        lead.email.clear();
        lead.name.clear();
        assert_eq!(lead.missing_field(), Some(Field::Name));
    }
}
