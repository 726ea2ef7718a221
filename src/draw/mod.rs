//! A puzzle instance: six tiles, a target and what the search found

pub mod constants;
mod core;
mod errors;
mod random;
mod report;
mod status;
mod validation;

pub use self::core::Draw;
pub use errors::DrawError;
pub use random::{random_target, random_tiles};
pub use report::DrawReport;
pub use status::Status;
pub use validation::validate_draw;
