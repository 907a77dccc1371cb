use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("layer {0} is outside -1..=1")]
    InvalidLayer(i8),

    #[error("direction {0} must be 1 or -1")]
    InvalidDirection(i8),
}
