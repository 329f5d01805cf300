pub mod image_fetch;
pub mod llm;
