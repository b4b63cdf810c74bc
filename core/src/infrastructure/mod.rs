pub mod llm;
pub mod ml;
