use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Parameter '{name}' is required but was not set")]
    MissingParameter { name: String },

    #[error("Parameter '{name}' is not of type {expected}")]
    ParameterType { name: String, expected: &'static str },

    #[error("Force '{name}' not found. Check the spelling of the force name")]
    UnknownForce { name: String },

    #[error("A force named '{name}' is already registered")]
    DuplicateForce { name: String },
}
