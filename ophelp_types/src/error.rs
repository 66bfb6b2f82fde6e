use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("clipboard rejected the write: {0}")]
    Clipboard(String),
    #[error("config file is not valid: {0}")]
    ConfigInvalid(String),
}

pub type Result<T> = std::result::Result<T, Error>;
