use thiserror::Error;

/// Errors produced by the estimation pipeline. Every AI operation runs the
/// same sequence (config check, model call, text extraction, JSON parse,
/// field mapping, validation) and each stage fails with a distinct variant;
/// nothing is retried internally.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("{0} is not configured")]
    MissingConfig(&'static str),

    #[error("failed to contact the generative model: {0}")]
    ModelUnavailable(String),

    #[error("generative model response contained no text")]
    EmptyModelResponse,

    #[error("generative model returned invalid JSON: {0}")]
    InvalidModelJson(String),

    #[error("generative model response schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("{0}")]
    InvalidImage(String),
}
