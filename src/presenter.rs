//! Rendering of validation results
//!
//! The validators never touch the UI directly: the form-level callers
//! report through a [`Presenter`], which decides how a field is marked
//! and how notifications are shown.

use derive_more::Display;
use serde::Serialize;
use strum_macros::EnumIter;

/// A field of the order form that is checked before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, Display)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    #[display("email")]
    Email,
    #[display("cardnum")]
    CardNumber,
}

impl FormField {
    /// Id of the form element holding the field
    pub fn element_id(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::CardNumber => "cardnum",
        }
    }
}

/// Background applied to a field once it has been checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldStyle {
    #[display("lightgreen")]
    Valid,
    #[display("rgb(255, 204, 204)")]
    Invalid,
}

impl From<bool> for FieldStyle {
    fn from(valid: bool) -> Self {
        if valid {
            FieldStyle::Valid
        } else {
            FieldStyle::Invalid
        }
    }
}

/// UI capability injected into the form-level validators
pub trait Presenter {
    fn mark_valid(&mut self, field: FormField);

    fn mark_invalid(&mut self, field: FormField);

    /// Shows a transient message to the user
    fn notify_success(&mut self, message: &str);
}

/// Presenter writing to the terminal
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    fn mark(&self, field: FormField, valid: bool) {
        println!(
            "#{} background-color: {}",
            field.element_id(),
            FieldStyle::from(valid)
        );
    }
}

impl Presenter for ConsolePresenter {
    fn mark_valid(&mut self, field: FormField) {
        self.mark(field, true);
    }

    fn mark_invalid(&mut self, field: FormField) {
        self.mark(field, false);
    }

    fn notify_success(&mut self, message: &str) {
        println!("[!] {message}");
    }
}
