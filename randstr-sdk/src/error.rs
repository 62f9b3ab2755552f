use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandstrError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
