use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    #[error("Tile value {0} is not part of the tile set")]
    OutOfDomain(i64),
}
