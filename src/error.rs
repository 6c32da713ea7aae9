use thiserror::Error;

pub type ScalerResult<T> = Result<T, ScalerError>;

#[derive(Debug, Error)]
pub enum ScalerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid page patch: {0}")]
    InvalidPatch(String),

    #[error("page access failed: {0}")]
    Page(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
