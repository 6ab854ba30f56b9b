use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("texture {0:?} not found")]
    TextureNotFound(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
