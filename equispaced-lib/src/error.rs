use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResampleError {
    #[error("the x and y vectors don't have the same size ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, ResampleError>;
