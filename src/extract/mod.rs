pub mod element_model;
pub mod extractor;
pub mod resolve;

pub use element_model::{DetectedElement, ElementType, FormField};
pub use extractor::{extract_elements, extract_with_nodes};
pub use resolve::{field_canonical_type, resolve_element, resolve_field};
