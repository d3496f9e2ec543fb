use thiserror::Error;

use crate::parser::ParseError;

/// Errors surfaced while parsing, planning or executing a query.
///
/// Every variant aborts the query it was raised for. They are all caused by
/// the shape of the input, so retrying the same query gives the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("{0}")]
    Syntax(#[from] ParseError),

    #[error("JSON parse error: {message}")]
    JsonParse { message: String },

    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    #[error("unknown column {name}; available columns: [{}]", .candidates.join(", "))]
    UnknownColumn { name: String, candidates: Vec<String> },

    #[error("unknown dataset '{0}'")]
    UnknownDataset(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("function '{name}' expects {expected}, got ({})", .got.join(", "))]
    FunctionArgMismatch { name: String, expected: String, got: Vec<String> },
}

impl QueryError {
    pub fn malformed(message: impl Into<String>) -> Self {
        QueryError::MalformedInput { message: message.into() }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::JsonParse { message: err.to_string() }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
