//! Client-side checks for the order form: email address and Visa card number.

pub mod config;
pub mod form;
pub mod presenter;
pub mod utils;

pub use form::{validate_card_field, validate_email_field, validate_field, ValidationOutcome};
pub use presenter::{ConsolePresenter, FieldStyle, FormField, Presenter};
pub use utils::input_validation::{is_valid_email, is_valid_visa};
