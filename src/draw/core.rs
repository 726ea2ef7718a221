use std::collections::BTreeSet;
use std::sync::atomic::AtomicBool;

use log::{debug, info};
use rand::Rng;

use crate::draw::errors::DrawError;
use crate::draw::random::{random_target, random_tiles};
use crate::draw::report::DrawReport;
use crate::draw::status::Status;
use crate::draw::validation::validate_draw;
use crate::expression::Item;
use crate::solver::{SearchOutcome, Solver, SolverError};
use crate::tile::Tile;

/// One puzzle: the tiles, the target, and the solutions of the last search.
///
/// Every change to the tiles or the target re-validates the draw and drops
/// the solutions found so far. With `auto` set, the draw resolves itself
/// after each change.
#[derive(Debug, Clone, Default)]
pub struct Draw {
    tiles: Vec<Tile>,
    target: i64,
    status: Status,
    solutions: Vec<Item>,
    best_diff: Option<i64>,
    auto: bool,
}

fn to_tiles(values: &[i64]) -> Result<Vec<Tile>, DrawError> {
    values
        .iter()
        .map(|&value| Tile::new(value).map_err(DrawError::from))
        .collect()
}

impl Draw {
    /// Draw with explicit tiles and target.
    ///
    /// Breaking the rules of the game (target range, tile count, copies of a
    /// value) is not an error: the draw is built with [`Status::Invalid`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::TileError`] if a value is not a tile at all.
    pub fn new(tiles: &[i64], target: i64) -> Result<Self, DrawError> {
        let mut draw = Self {
            tiles: to_tiles(tiles)?,
            target,
            ..Self::default()
        };
        draw.clear();
        Ok(draw)
    }

    /// Fully random draw: six tiles from the set and a target in `100..=999`
    pub fn random() -> Self {
        Self::random_with_rng(&mut rand::rng())
    }

    pub fn random_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut draw = Self::default();
        draw.randomize_with_rng(rng);
        draw
    }

    /// Draw with the given tiles and a random target
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::TileError`] if a value is not a tile at all.
    pub fn with_tiles(tiles: &[i64]) -> Result<Self, DrawError> {
        Self::with_tiles_and_rng(tiles, &mut rand::rng())
    }

    /// # Errors
    ///
    /// Returns [`DrawError::TileError`] if a value is not a tile at all.
    pub fn with_tiles_and_rng<R: Rng + ?Sized>(
        tiles: &[i64],
        rng: &mut R,
    ) -> Result<Self, DrawError> {
        Self::new(tiles, random_target(rng))
    }

    /// Draw with the given target and random tiles
    pub fn with_target(target: i64) -> Self {
        Self::with_target_and_rng(target, &mut rand::rng())
    }

    pub fn with_target_and_rng<R: Rng + ?Sized>(target: i64, rng: &mut R) -> Self {
        let mut draw = Self {
            tiles: random_tiles(rng),
            target,
            ..Self::default()
        };
        draw.clear();
        draw
    }

    /// Resolve automatically after every change
    pub fn with_auto(mut self, auto: bool) -> Self {
        self.auto = auto;
        self.clear();
        self
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Replace every tile
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::TileError`] and leaves the draw untouched if a
    /// value is not a tile at all.
    pub fn set_tiles(&mut self, tiles: &[i64]) -> Result<Status, DrawError> {
        self.tiles = to_tiles(tiles)?;
        Ok(self.clear())
    }

    /// Change the value of one tile
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::IndexOutOfRange`] or [`DrawError::TileError`];
    /// the draw is untouched in both cases.
    pub fn set_tile(&mut self, index: usize, value: i64) -> Result<Status, DrawError> {
        let len = self.tiles.len();
        let tile = self
            .tiles
            .get_mut(index)
            .ok_or(DrawError::IndexOutOfRange { index, len })?;
        tile.set_value(value)?;
        Ok(self.clear())
    }

    pub fn set_target(&mut self, target: i64) -> Status {
        self.target = target;
        self.clear()
    }

    /// Replace tiles and target with a fresh random draw
    pub fn randomize(&mut self) -> Status {
        self.randomize_with_rng(&mut rand::rng())
    }

    pub fn randomize_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Status {
        self.target = random_target(rng);
        self.tiles = random_tiles(rng);
        self.clear()
    }

    /// Drop the solutions and re-validate; resolves again when `auto` is set
    pub fn clear(&mut self) -> Status {
        self.reset();
        if self.auto {
            self.resolve()
        } else {
            self.status
        }
    }

    fn reset(&mut self) {
        self.solutions.clear();
        self.best_diff = None;
        self.valid();
    }

    /// Check the draw against the rules and record the verdict
    pub fn valid(&mut self) -> Status {
        self.status = match validate_draw(&self.tiles, self.target) {
            Ok(()) => Status::Valid,
            Err(err) => {
                debug!("Draw is invalid: {}", err);
                Status::Invalid
            }
        };
        self.status
    }

    /// Search every combination of the tiles. Does nothing on an invalid draw.
    pub fn resolve(&mut self) -> Status {
        self.reset();
        if self.status == Status::Invalid {
            return self.status;
        }

        self.status = Status::Resolving;
        let outcome = Solver::new().search(&self.tiles, self.target);
        self.apply(outcome)
    }

    /// Like [`Draw::resolve`], polling `cancel` between steps.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] if the flag was raised; the draw is
    /// left [`Status::Valid`] with no solutions.
    pub fn resolve_with_cancel(&mut self, cancel: &AtomicBool) -> Result<Status, SolverError> {
        self.reset();
        if self.status == Status::Invalid {
            return Ok(self.status);
        }

        self.status = Status::Resolving;
        match Solver::new().search_with_cancel(&self.tiles, self.target, cancel) {
            Ok(outcome) => Ok(self.apply(outcome)),
            Err(err) => {
                self.status = Status::Valid;
                Err(err)
            }
        }
    }

    fn apply(&mut self, outcome: SearchOutcome) -> Status {
        self.status = match outcome.solutions.first() {
            Some(best) if best.value() == self.target => Status::ExactMatch,
            Some(_) => Status::ApproximateMatch,
            None => Status::Valid,
        };
        self.solutions = outcome.solutions;
        self.best_diff = outcome.best_diff;
        info!(
            "{}: {} solutions for {}",
            self.status,
            self.solutions.len(),
            self.target
        );
        self.status
    }

    /// Solutions of the last search, simplest first; empty until resolved
    pub fn solutions(&self) -> &[Item] {
        if self.status.is_resolved() {
            &self.solutions
        } else {
            &[]
        }
    }

    /// The simplest solution, if any
    pub fn solution(&self) -> Option<&Item> {
        self.solutions().first()
    }

    pub fn count(&self) -> usize {
        self.solutions().len()
    }

    /// Distance between the solutions and the target
    pub fn best_diff(&self) -> Option<i64> {
        self.best_diff
    }

    /// Distinct values reached by the solutions, ascending
    pub fn found(&self) -> Vec<i64> {
        self.solutions()
            .iter()
            .map(Item::value)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn report(&self) -> DrawReport {
        DrawReport::from(self)
    }

    /// # Errors
    ///
    /// Fails only if serde_json cannot serialize the report.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.report().to_json()
    }
}
