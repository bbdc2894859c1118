/// Error types shared by the core pipeline
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vertex index {index} out of bounds for {len} vertices ({context})")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        context: String,
    },

    #[error("invalid face {face}: {reason}")]
    InvalidFace { face: usize, reason: String },

    #[error("invalid color spec {0:?}")]
    InvalidColor(String),

    #[error("drawing surface error: {0}")]
    Surface(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
