use thiserror::Error;

use crate::tile::TileError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Tile error: {0}")]
    TileError(#[from] TileError),
    #[error("Target {0} is outside 100..=999")]
    TargetOutOfRange(i64),
    #[error("A draw needs exactly 6 tiles, got {0}")]
    WrongTileCount(usize),
    #[error("Tile {value} appears {count} times but the set only has {allowed}")]
    TooManyCopies {
        value: i64,
        count: usize,
        allowed: usize,
    },
    #[error("Tile index {index} out of range for {len} tiles")]
    IndexOutOfRange { index: usize, len: usize },
}
