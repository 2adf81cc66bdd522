//! Form-level checks run when the user submits a field.
//!
//! Each check reads the raw field value, runs the matching predicate and
//! reports the result through the injected [`Presenter`]. Validity and
//! submit prevention are returned as two separate flags.

use log::{info, warn};
use serde::Serialize;

use crate::presenter::{FormField, Presenter};
use crate::utils::card::{luhn_checksum_valid, mask};
use crate::utils::input_validation::{is_valid_email, is_valid_visa};

/// Message shown when the card number is accepted
pub const VALID_CARD_MESSAGE: &str = "valid visa";

/// Result of checking a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// The value has the expected shape
    pub valid: bool,
    /// The default form submission must be suppressed
    pub prevent_submit: bool,
}

/// Log record emitted for every checked field
#[derive(Debug, Serialize)]
struct FieldReport<'a> {
    field: FormField,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum_valid: Option<bool>,
}

impl FieldReport<'_> {
    fn log(&self) {
        match serde_json::to_string(self) {
            Ok(record) => info!("{record}"),
            Err(e) => warn!("Could not serialize report for {}: {e}", self.field),
        }
    }
}

/// Checks the email field and colors it according to the result.
///
/// Submission is always prevented, the form is only checked client side.
pub fn validate_email_field<P: Presenter + ?Sized>(
    value: &str,
    presenter: &mut P,
) -> ValidationOutcome {
    let valid = is_valid_email(value);

    if valid {
        presenter.mark_valid(FormField::Email);
    } else {
        presenter.mark_invalid(FormField::Email);
    }

    FieldReport {
        field: FormField::Email,
        valid,
        value: None,
        checksum_valid: None,
    }
    .log();

    ValidationOutcome {
        valid,
        prevent_submit: true,
    }
}

/// Checks the card number field and notifies the user when it is a Visa
/// number. Nothing is shown on failure.
pub fn validate_card_field<P: Presenter + ?Sized>(
    value: &str,
    presenter: &mut P,
) -> ValidationOutcome {
    let valid = is_valid_visa(value);

    if valid {
        presenter.notify_success(VALID_CARD_MESSAGE);
    }

    // Never log the full number
    let masked = mask(value);
    FieldReport {
        field: FormField::CardNumber,
        valid,
        value: Some(&masked),
        checksum_valid: Some(luhn_checksum_valid(value)),
    }
    .log();

    ValidationOutcome {
        valid,
        prevent_submit: true,
    }
}

/// Dispatches to the check matching `field`
pub fn validate_field<P: Presenter + ?Sized>(
    field: FormField,
    value: &str,
    presenter: &mut P,
) -> ValidationOutcome {
    match field {
        FormField::Email => validate_email_field(value, presenter),
        FormField::CardNumber => validate_card_field(value, presenter),
    }
}
