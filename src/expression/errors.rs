use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}
