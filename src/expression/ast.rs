use std::sync::Arc;

use crate::tile::Tile;

/// The four operations allowed between two items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Mul,
    Add,
    Sub,
    Div,
}

/// Two items combined by one operator.
///
/// Operands are stored in canonical order: `left.value() >= right.value()`.
#[derive(Debug, Clone)]
pub struct Operation {
    pub(crate) value: i64,
    pub(crate) operator: Operator,
    pub(crate) left: Item,
    pub(crate) right: Item,
    pub(crate) tile_count: usize,
}

/// Anything that can take part in a search: a bare tile or an operation
/// already built from tiles.
#[derive(Debug, Clone)]
pub enum Item {
    Tile(Tile),
    Operation(Arc<Operation>),
}

impl Operation {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn left(&self) -> &Item {
        &self.left
    }

    pub fn right(&self) -> &Item {
        &self.right
    }

    /// Number of tiles consumed to build this operation
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// This node's own step, e.g. `"25 x 9 = 225"`
    pub fn step(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.left.value(),
            self.operator,
            self.right.value(),
            self.value
        )
    }

    /// Every step that built this operation, left operand first, own step last
    pub fn trace(&self) -> Vec<String> {
        let mut steps = Vec::with_capacity(self.tile_count - 1);
        self.collect_steps(&mut steps);
        steps
    }

    fn collect_steps(&self, steps: &mut Vec<String>) {
        for operand in [&self.left, &self.right] {
            if let Item::Operation(inner) = operand {
                inner.collect_steps(steps);
            }
        }
        steps.push(self.step());
    }
}

impl Item {
    pub fn value(&self) -> i64 {
        match self {
            Item::Tile(tile) => tile.value(),
            Item::Operation(op) => op.value,
        }
    }

    pub fn tile_count(&self) -> usize {
        match self {
            Item::Tile(_) => 1,
            Item::Operation(op) => op.tile_count,
        }
    }

    /// Simplicity rank used to order solutions; fewer tiles ranks first
    pub fn rank(&self) -> usize {
        self.tile_count()
    }

    /// Human-readable steps. A bare tile reads as its own value.
    pub fn trace(&self) -> Vec<String> {
        match self {
            Item::Tile(tile) => vec![tile.value().to_string()],
            Item::Operation(op) => op.trace(),
        }
    }

    pub fn is_tile(&self) -> bool {
        matches!(self, Item::Tile(_))
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Item::Tile(_) => None,
            Item::Operation(op) => Some(op),
        }
    }
}

impl From<Tile> for Item {
    fn from(tile: Tile) -> Self {
        Item::Tile(tile)
    }
}

impl From<Operation> for Item {
    fn from(op: Operation) -> Self {
        Item::Operation(Arc::new(op))
    }
}

/// Items are equal when they read the same: identical traces.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Item::Tile(a), Item::Tile(b)) => a == b,
            (Item::Operation(a), Item::Operation(b)) => {
                a.value == b.value && a.trace() == b.trace()
            }
            _ => false,
        }
    }
}

impl Eq for Item {}
