use crate::tile::{TILE_POOL, Tile, TileError, is_tile_value, pool_count};

#[test]
fn test_tile_pool_composition() {
    assert_eq!(TILE_POOL.len(), 25);
    for value in (1..=10).chain([25]) {
        assert_eq!(pool_count(value), 2, "expected two copies of {}", value);
    }
    for value in [50, 75, 100] {
        assert_eq!(pool_count(value), 1, "expected one copy of {}", value);
    }
    assert_eq!(pool_count(11), 0);
}

#[test]
fn test_tile_new_valid() {
    for &value in &TILE_POOL {
        let tile = Tile::new(value);
        assert!(tile.is_ok(), "{} should be a valid tile", value);
        if let Ok(tile) = tile {
            assert_eq!(tile.value(), value);
        }
    }
}

#[test]
fn test_tile_new_out_of_domain() {
    for value in [0, -1, 11, 20, 99, 101, 1000] {
        assert_eq!(Tile::new(value), Err(TileError::OutOfDomain(value)));
        assert!(!is_tile_value(value));
    }
}

#[test]
fn test_tile_equality_by_value() {
    assert_eq!(Tile::new(7), Tile::new(7));
    assert_ne!(Tile::new(7), Tile::new(8));
}

#[test]
fn test_tile_set_value() {
    let mut tile = Tile::from_pool(5);
    assert!(tile.set_value(75).is_ok());
    assert_eq!(tile.value(), 75);

    assert_eq!(tile.set_value(12), Err(TileError::OutOfDomain(12)));
    assert_eq!(tile.value(), 75);
}

#[test]
fn test_tile_try_from_and_display() {
    let tile = Tile::try_from(25);
    assert!(tile.is_ok());
    if let Ok(tile) = tile {
        assert_eq!(tile.to_string(), "25");
    }
    assert!(Tile::try_from(26).is_err());
}
