use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelforgeError {
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("Evaluation failed for individual {index}: {reason}")]
    EvaluationFailed { index: usize, reason: String },

    #[error("Population not the correct size: expected {expected}, got {actual}")]
    PopulationSize { expected: usize, actual: usize },

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LevelforgeError>;
