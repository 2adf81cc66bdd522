pub mod card;
pub mod input_validation;
