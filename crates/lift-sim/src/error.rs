use lift_render::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("presentation update failed: {0}")]
    Render(#[from] RenderError),
}

pub type SimResult<T> = Result<T, SimError>;
