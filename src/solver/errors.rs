use thiserror::Error;

use crate::draw::DrawError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Search cancelled before completion")]
    Cancelled,
    #[error("Draw error: {0}")]
    DrawError(#[from] DrawError),
}
