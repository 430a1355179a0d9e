use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("Insufficient points: need at least {required}, path has {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("Offset {offset} is outside the path length {total}")]
    OffsetOutOfRange { offset: f64, total: f64 },

    #[error("Index {index} out of range for path of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid geometry: {0}")]
    Geometry(String),

    #[error("Lock poisoned: {0}")]
    Poisoned(String),
}

pub type Result<T> = std::result::Result<T, LoopError>;
