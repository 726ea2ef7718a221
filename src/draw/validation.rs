use std::collections::BTreeMap;

use log::debug;

use crate::draw::constants::{TARGET_MAX, TARGET_MIN};
use crate::draw::errors::DrawError;
use crate::tile::{TILES_PER_DRAW, Tile, pool_count};

/// Check a draw against the rules of the game
///
/// # Errors
///
/// Returns the first rule broken:
/// * the target is outside `100..=999`
/// * there are not exactly six tiles
/// * a value appears more often than in the tile set
pub fn validate_draw(tiles: &[Tile], target: i64) -> Result<(), DrawError> {
    debug!("Validating draw {:?} for {}", tiles, target);

    if !(TARGET_MIN..=TARGET_MAX).contains(&target) {
        debug!("Target {} out of range", target);
        return Err(DrawError::TargetOutOfRange(target));
    }

    if tiles.len() != TILES_PER_DRAW {
        debug!("Draw has {} tiles", tiles.len());
        return Err(DrawError::WrongTileCount(tiles.len()));
    }

    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for tile in tiles {
        *counts.entry(tile.value()).or_default() += 1;
    }
    for (value, count) in counts {
        let allowed = pool_count(value);
        if count > allowed {
            debug!("Tile {} used {} times, {} allowed", value, count, allowed);
            return Err(DrawError::TooManyCopies {
                value,
                count,
                allowed,
            });
        }
    }

    debug!("Draw validation successful");
    Ok(())
}
