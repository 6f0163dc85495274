pub mod document;
pub mod parser;

pub use document::{DocumentModel, NodeId};
pub use parser::parse;
