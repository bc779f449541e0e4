//! Construction errors and their message constants.

use thiserror::Error;

pub mod messages {
    pub const ABSENT_SOURCE: &str = "source tuple is absent";
    pub const ABSENT_COMPONENT: &str = "component is absent";
    pub const WRONG_ARITY: &str = "expected exactly four components";
}

pub type TupleResult<T> = Result<T, TupleError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TupleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TupleError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        TupleError::InvalidArgument(msg.into())
    }
}
