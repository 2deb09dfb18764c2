use mob_core::MobError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] MobError),
}

pub type ModelResult<T> = Result<T, ModelError>;
