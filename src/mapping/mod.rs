pub mod mapping_model;
pub mod placeholder;

pub use mapping_model::{ActionMapping, InputSchema, ParameterSource, PropertySchema, ToolSchema};
pub use placeholder::extract_template_placeholders;
