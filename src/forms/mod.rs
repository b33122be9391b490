// src/forms/mod.rs  -  Request types, field rules and validation errors
pub mod feedback;
pub mod wholesale;

pub use feedback::FeedbackRequest;
pub use wholesale::WholesaleRequest;

use crate::dom::Document;
use crate::store::KeyValueStore;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Smallest wholesale order, in packs/cartons
pub const MIN_QUANTITY: f64 = 10.0;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("phone pattern"));

/// Permissive shape check: something@something.something, no spaces around.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Optional leading `+` and 8-15 digits once all whitespace is removed.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Finite number, surrounding whitespace allowed.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|q| q.is_finite())
}

pub fn is_valid_quantity(raw: &str) -> bool {
    parse_quantity(raw).is_some_and(|q| q >= MIN_QUANTITY)
}

/// Why a submission was refused. Checked in declaration order; the first
/// failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    Quantity,
    Phone,
    Email,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidationError::MissingFields => "required field missing",
            ValidationError::Quantity      => "quantity below minimum or not a number",
            ValidationError::Phone         => "malformed phone number",
            ValidationError::Email         => "malformed email address",
        };
        f.write_str(s)
    }
}

impl std::error::Error for ValidationError {}

/// A form whose submission is simulated locally.
pub trait Submission: Serialize + Sized {
    /// Label for the diagnostic log line
    const LABEL: &'static str;
    const SUCCESS_KEY: &'static str;
    const MISSING_KEY: &'static str;

    /// Collect trimmed field values from the page.
    fn read(doc: &Document) -> Self;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Remember whatever should prefill a later visit.
    fn remember(&self, _store: &mut dyn KeyValueStore) {}

    /// Dictionary key of the alert for `err`.
    fn message_key(err: ValidationError) -> &'static str {
        match err {
            ValidationError::MissingFields => Self::MISSING_KEY,
            ValidationError::Quantity      => "alertQuantity",
            ValidationError::Phone         => "alertPhone",
            ValidationError::Email         => "alertEmail",
        }
    }
}
