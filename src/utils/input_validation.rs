use derive_more::derive::Display;
use inquire::Text;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::card::mask;

// Word characters, optionally separated by a single dot or hyphen, on both
// sides of the "@", then one or more 2 to 3 character suffixes.
// `[[:word:]]` is ASCII only, like `\w` in a browser regex.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[[:word:]]+(?:[.-]?[[:word:]]+)*@[[:word:]]+(?:[.-]?[[:word:]]+)*(?:\.[[:word:]]{2,3})+$",
    )
    .expect("Failed to compile email regex")
});

// Visa: a leading 4, then 12 digits, optionally 3 more (13 or 16 digits).
static VISA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^4[0-9]{12}(?:[0-9]{3})?$").expect("Failed to compile visa regex")
});

/// Returns true if the given string has the shape of an email address.
/// Any non-match, empty input included, is false.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if the given string is a 13 or 16 digit Visa number.
pub fn is_valid_visa(card_number: &str) -> bool {
    VISA_REGEX.is_match(card_number)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid input")]
pub struct InvalidInput;

/// Wrapper type for an email address that has been validated.
///
/// The address is kept lowercased.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl TryFrom<String> for EmailAddress {
    type Error = InvalidInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        Self::try_from(email.as_str())
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = InvalidInput;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        if is_valid_email(email) {
            Ok(Self(email.to_lowercase()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for a Visa card number that has been validated.
///
/// `Display` shows the masked number so it can go to logs and the terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(try_from = "String", into = "String")]
#[display("{}", mask(_0))]
pub struct VisaNumber(String);

impl VisaNumber {
    pub fn masked(&self) -> String {
        mask(&self.0)
    }
}

impl TryFrom<String> for VisaNumber {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_visa(&value) {
            Ok(VisaNumber(value))
        } else {
            Err(InvalidInput)
        }
    }
}

impl TryFrom<&str> for VisaNumber {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if is_valid_visa(value) {
            Ok(VisaNumber(value.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl From<VisaNumber> for String {
    fn from(number: VisaNumber) -> Self {
        number.0
    }
}

impl AsRef<str> for VisaNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Prompts for an email address and validates it
pub fn email_input_validation(message: &str) -> Result<EmailAddress, InvalidInput> {
    let email = Text::new(message).prompt().unwrap_or_default();
    EmailAddress::try_from(email)
}

/// Prompts for a card number and validates it
pub fn card_input_validation(message: &str) -> Result<VisaNumber, InvalidInput> {
    let number = Text::new(message).prompt().unwrap_or_default();
    VisaNumber::try_from(number)
}
