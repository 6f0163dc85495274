pub mod validation_model;
pub mod validator;

pub use validation_model::{TypeMismatch, ValidationStatus};
pub use validator::validate_action_mappings;
