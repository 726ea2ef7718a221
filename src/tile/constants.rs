/// Master multiset every draw is taken from: two copies of 1..=10 and 25,
/// one copy of 50, 75 and 100.
pub const TILE_POOL: [i64; 25] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 25, //
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 25, //
    50, 75, 100,
];

/// Number of tiles in a complete draw
pub const TILES_PER_DRAW: usize = 6;
