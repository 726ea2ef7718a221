//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Item, Operation, Operator};
pub use errors::ExpressionError;
pub use eval::evaluate;

#[cfg(test)]
mod tests;
