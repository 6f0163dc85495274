pub mod engine;
pub mod inference_model;
pub mod rules;

pub use engine::analyze;
pub use inference_model::{AnalysisResult, ImplementationType, InferredParameter, ToolInference};
