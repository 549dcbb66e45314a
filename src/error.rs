use std::io;

#[derive(Debug, thiserror::Error)]
pub enum CrcError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("digest needs {needed} bytes, buffer has {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

pub type CrcResult<T> = Result<T, CrcError>;
