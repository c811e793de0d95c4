use thiserror::Error;

/// Faults in wiring or configuring a chain. Business rejections are [`crate::Outcome`]s, never errors.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Cycle detected: linking {handler} would make it reachable from itself")]
    Cycle { handler: String },

    #[error("Chain has no handlers")]
    EmptyChain,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChainError>;
