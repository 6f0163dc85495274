pub mod compat;

pub use compat::{CanonicalType, canonical_from_input, canonical_from_schema, compatible};
