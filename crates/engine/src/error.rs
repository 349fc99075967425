use crate::core::BoardError;

/// Errors raised while configuring or initialising an engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board size {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("board still had matches after {rounds} resolution rounds")]
    Unstable { rounds: u32 },

    #[error("a resolution cycle is in flight")]
    Busy,
}

impl From<BoardError> for EngineError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidDimensions { width, height } => {
                EngineError::InvalidDimensions { width, height }
            }
            other => EngineError::InvalidConfig(other.to_string()),
        }
    }
}
