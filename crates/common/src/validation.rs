//! Widget-level checks the lead form applies before a submit is allowed
//!
//! These mirror what a browser enforces on `type="email"` and `required`
//! inputs. The store itself only checks required-field presence.

use validator::ValidateEmail;

use crate::{Error, Lead, Result};

/// HTML5 email syntax, as checked by a `type="email"` input
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Everything the form widgets enforce: required fields and email syntax
pub fn validate_form_input(lead: &Lead) -> Result<()> {
    lead.validate()?;

    if !is_valid_email(lead.email.trim()) {
        return Err(Error::InvalidEmail(lead.email.clone()));
    }

    Ok(())
}
