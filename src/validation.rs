use crate::error::{AppError, AppResult};
use crate::models::ParticipantForm;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // local@domain.tld: one '@', no whitespace, at least one dot in the domain
    // with non-empty labels around every dot.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$")
        .expect("email pattern is valid");
}

/// Returns true if any of the given values is empty after trimming whitespace
pub fn has_empty_fields(fields: &[&str]) -> bool {
    fields.iter().any(|f| f.trim().is_empty())
}

/// Validates the basic `local@domain.tld` shape of an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates a complete form submission
///
/// Empty fields are reported before the email format, so a form with a
/// blank email yields `EmptyField` rather than `InvalidEmail`.
pub fn validate_participant(form: &ParticipantForm) -> AppResult<()> {
    let empty: Vec<String> = form
        .labeled_fields()
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label.to_string())
        .collect();

    if !empty.is_empty() {
        return Err(AppError::EmptyField(empty));
    }

    let email = form.email.trim();
    if !is_valid_email(email) {
        return Err(AppError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validates a registration ID used as a lookup key
pub fn validate_registration_id(id: &str) -> AppResult<()> {
    if has_empty_fields(&[id]) {
        return Err(AppError::EmptyField(vec!["registrationId".to_string()]));
    }
    Ok(())
}
