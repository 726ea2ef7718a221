use serde::Serialize;

use crate::draw::core::Draw;
use crate::draw::status::Status;
use crate::tile::Tile;

/// Plain summary of a draw, ready to print or serialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawReport {
    pub tiles: Vec<i64>,
    pub target: i64,
    pub status: Status,
    pub found: Vec<i64>,
    pub best_diff: Option<i64>,
    pub count: usize,
    pub solutions: Vec<Vec<String>>,
}

impl DrawReport {
    /// # Errors
    ///
    /// Fails only if serde_json cannot serialize the report.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Draw> for DrawReport {
    fn from(draw: &Draw) -> Self {
        Self {
            tiles: draw.tiles().iter().map(Tile::value).collect(),
            target: draw.target(),
            status: draw.status(),
            found: draw.found(),
            best_diff: draw.best_diff(),
            count: draw.count(),
            solutions: draw.solutions().iter().map(|s| s.trace()).collect(),
        }
    }
}
