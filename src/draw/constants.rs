/// Smallest target a draw may ask for
pub const TARGET_MIN: i64 = 100;

/// Largest target a draw may ask for
pub const TARGET_MAX: i64 = 999;
