use log::trace;

use crate::expression::ast::{Item, Operation, Operator};

/// Apply `operator` to `left` and `right`, with `left >= right`.
///
/// Returns `None` for every combination the game never plays:
/// * `-` between equal values
/// * `x` involving 0 or 1
/// * `/` by 0 or 1, or with a remainder
/// * a result that does not fit in an `i64`
pub fn evaluate(left: i64, operator: Operator, right: i64) -> Option<i64> {
    match operator {
        Operator::Add => left.checked_add(right),
        Operator::Sub => (left > right).then(|| left - right),
        Operator::Mul => {
            if left > 1 && right > 1 {
                left.checked_mul(right)
            } else {
                None
            }
        }
        Operator::Div => {
            if right > 1 && left % right == 0 {
                Some(left / right)
            } else {
                None
            }
        }
    }
}

impl Operation {
    /// Combine two items, larger value on the left.
    ///
    /// Returns `None` when [`evaluate`] rejects the combination.
    pub fn combine(left: &Item, operator: Operator, right: &Item) -> Option<Self> {
        let (left, right) = if left.value() < right.value() {
            (right, left)
        } else {
            (left, right)
        };

        let Some(value) = evaluate(left.value(), operator, right.value()) else {
            trace!(
                "Pruned {} {} {}",
                left.value(),
                operator,
                right.value()
            );
            return None;
        };

        Some(Self {
            value,
            operator,
            left: left.clone(),
            right: right.clone(),
            tile_count: left.tile_count() + right.tile_count(),
        })
    }
}

impl Item {
    /// [`Operation::combine`] wrapped back into an item
    pub fn combine(left: &Item, operator: Operator, right: &Item) -> Option<Self> {
        Operation::combine(left, operator, right).map(Item::from)
    }
}
