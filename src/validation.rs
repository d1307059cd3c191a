//! Registration request validation.
//!
//! Validation is a pure, stateless function of the request body and runs
//! before any handler logic touches a store. Rules are applied in a fixed
//! order; the first failing rule decides the outcome.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

/// Minimum accepted length for the `name` field.
const MIN_NAME_LEN: usize = 2;

/// Minimum accepted length for the `password` field.
const MIN_PASSWORD_LEN: usize = 8;

/// Registration request body for `POST /api/auth/register`.
///
/// All fields default to empty strings so that absent JSON keys flow through
/// the validator as missing fields instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    /// Display name of the new user.
    #[serde(default)]
    pub name: String,
    /// Contact email, unique per account.
    #[serde(default)]
    pub email: String,
    /// Plain-text password; storage strategy is the account store's concern.
    #[serde(default)]
    pub password: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: String,
}

/// A required registration field, named for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    PhoneNumber,
}

impl Field {
    /// Field name as it appears in the request body.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PhoneNumber => "phone_number",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating a registration request.
///
/// Constructed per request and consumed immediately by the handler layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// All required fields present and well formed.
    Valid,
    /// At least one required field is empty or absent.
    MissingFields,
    /// A field is present but fails its format rule.
    InvalidFormat(Field),
}

/// Validate a registration request body.
///
/// # Parameters
///
/// - `request` - Parsed registration request body
///
/// # Returns
///
/// Returns [`ValidationOutcome::Valid`] when every field passes, otherwise
/// the outcome of the first failing rule, in order: field presence, name
/// length, email format, phone format, password strength.
pub fn validate(request: &RegisterRequest) -> ValidationOutcome {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
        || request.phone_number.trim().is_empty()
    {
        return ValidationOutcome::MissingFields;
    }

    if request.name.trim().chars().count() < MIN_NAME_LEN {
        return ValidationOutcome::InvalidFormat(Field::Name);
    }

    if !email_pattern().is_match(request.email.trim()) {
        return ValidationOutcome::InvalidFormat(Field::Email);
    }

    if !phone_pattern().is_match(request.phone_number.trim()) {
        return ValidationOutcome::InvalidFormat(Field::PhoneNumber);
    }

    if !password_is_strong(&request.password) {
        return ValidationOutcome::InvalidFormat(Field::Password);
    }

    ValidationOutcome::Valid
}

/// Well-formedness check for emails: local part, `@`, dotted domain.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Permissive phone format: 7-20 characters of digits and common separators.
fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\+?[0-9\s().x-]{7,20}$").expect("phone pattern is valid"))
}

/// Password strength rule: minimum length plus mixed-case and a digit.
fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
