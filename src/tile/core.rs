use std::fmt;

use log::{debug, warn};

use crate::tile::constants::TILE_POOL;
use crate::tile::errors::TileError;

/// One numbered tile of a draw.
///
/// Tiles compare by value: two tiles showing the same number are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    value: i64,
}

impl Tile {
    /// Create a tile, rejecting values that never appear in the tile set
    ///
    /// # Errors
    ///
    /// Returns [`TileError::OutOfDomain`] if `value` is not in [`TILE_POOL`].
    pub fn new(value: i64) -> Result<Self, TileError> {
        if !is_tile_value(value) {
            warn!("Rejected tile value {}", value);
            return Err(TileError::OutOfDomain(value));
        }
        Ok(Self { value })
    }

    /// Build a tile from a value known to come from [`TILE_POOL`]
    pub(crate) const fn from_pool(value: i64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Change the number shown on the tile. Only meaningful between searches.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::OutOfDomain`] and leaves the tile untouched if
    /// `value` is not in [`TILE_POOL`].
    pub fn set_value(&mut self, value: i64) -> Result<(), TileError> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl TryFrom<i64> for Tile {
    type Error = TileError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Whether `value` is printed on at least one tile of the set
pub fn is_tile_value(value: i64) -> bool {
    TILE_POOL.contains(&value)
}

/// How many tiles of the set carry `value`
pub fn pool_count(value: i64) -> usize {
    let count = TILE_POOL.iter().filter(|&&v| v == value).count();
    debug!("Tile set holds {} copies of {}", count, value);
    count
}
