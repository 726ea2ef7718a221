//! Tiles ("plaques") and the master multiset they are drawn from

pub mod constants;
mod core;
mod errors;

pub use constants::{TILE_POOL, TILES_PER_DRAW};
pub use self::core::{Tile, is_tile_value, pool_count};
pub use errors::TileError;

#[cfg(test)]
mod tests;
