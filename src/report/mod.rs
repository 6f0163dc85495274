pub mod console;

pub use console::{format_analysis_report, format_elements_report, format_validation_report};
