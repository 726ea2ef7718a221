use rand::Rng;
use rand::seq::IndexedRandom;

use crate::draw::constants::{TARGET_MAX, TARGET_MIN};
use crate::tile::{TILE_POOL, TILES_PER_DRAW, Tile};

/// Uniform target in `100..=999`
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(TARGET_MIN..=TARGET_MAX)
}

/// Six tiles taken from the tile set without replacement
pub fn random_tiles<R: Rng + ?Sized>(rng: &mut R) -> Vec<Tile> {
    TILE_POOL
        .choose_multiple(rng, TILES_PER_DRAW)
        .map(|&value| Tile::from_pool(value))
        .collect()
}
