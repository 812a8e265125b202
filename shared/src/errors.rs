//! Shared error types for the report engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Unknown scoring module: {input}")]
    UnknownModule { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
