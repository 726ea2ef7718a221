use crate::expression::{ExpressionError, Item, Operation, Operator, evaluate};
use crate::tile::Tile;

fn tile(value: i64) -> Item {
    Item::Tile(Tile::from_pool(value))
}

fn combine(left: &Item, operator: Operator, right: &Item) -> Item {
    match Item::combine(left, operator, right) {
        Some(item) => item,
        None => panic!("{} {} {} should be playable", left, operator, right),
    }
}

#[test]
fn test_evaluate_addition() {
    assert_eq!(evaluate(25, Operator::Add, 1), Some(26));
    assert_eq!(evaluate(1, Operator::Add, 1), Some(2));
}

#[test]
fn test_evaluate_subtraction() {
    assert_eq!(evaluate(10, Operator::Sub, 3), Some(7));
    assert_eq!(evaluate(5, Operator::Sub, 5), None);
}

#[test]
fn test_evaluate_multiplication_prunes_identity() {
    assert_eq!(evaluate(25, Operator::Mul, 9), Some(225));
    assert_eq!(evaluate(7, Operator::Mul, 1), None);
    assert_eq!(evaluate(1, Operator::Mul, 1), None);
    assert_eq!(evaluate(7, Operator::Mul, 0), None);
}

#[test]
fn test_evaluate_division_exact_only() {
    assert_eq!(evaluate(100, Operator::Div, 4), Some(25));
    assert_eq!(evaluate(100, Operator::Div, 3), None);
    assert_eq!(evaluate(100, Operator::Div, 1), None);
    assert_eq!(evaluate(100, Operator::Div, 0), None);
}

#[test]
fn test_evaluate_overflow_is_invalid() {
    assert_eq!(evaluate(i64::MAX, Operator::Mul, 2), None);
    assert_eq!(evaluate(i64::MAX, Operator::Add, 1), None);
}

#[test]
fn test_combine_swaps_operands() {
    let op = Operation::combine(&tile(3), Operator::Sub, &tile(10));
    assert!(op.is_some());
    if let Some(op) = op {
        assert_eq!(op.value(), 7);
        assert_eq!(op.left().value(), 10);
        assert_eq!(op.right().value(), 3);
        assert_eq!(op.trace(), vec!["10 - 3 = 7".to_string()]);
    }
}

#[test]
fn test_combine_equal_subtraction_is_degenerate() {
    assert!(Operation::combine(&tile(5), Operator::Sub, &tile(5)).is_none());
    assert!(Item::combine(&tile(5), Operator::Sub, &tile(5)).is_none());
}

#[test]
fn test_combine_division_by_larger_is_swapped() {
    let op = Item::combine(&tile(4), Operator::Div, &tile(100));
    assert!(op.is_some());
    if let Some(op) = op {
        assert_eq!(op.value(), 25);
        assert_eq!(op.trace(), vec!["100 / 4 = 25".to_string()]);
    }
}

#[test]
fn test_nested_trace_and_tile_count() {
    let product = combine(&tile(25), Operator::Mul, &tile(9));
    let sum = combine(&product, Operator::Add, &tile(7));
    let pair = combine(&tile(1), Operator::Add, &tile(1));
    let one = combine(&tile(3), Operator::Sub, &pair);
    let total = combine(&one, Operator::Add, &sum);

    assert_eq!(total.value(), 233);
    assert_eq!(total.tile_count(), 6);
    assert_eq!(total.rank(), 6);
    // The larger operand (232) is folded in first
    assert_eq!(
        total.trace(),
        vec![
            "25 x 9 = 225".to_string(),
            "225 + 7 = 232".to_string(),
            "1 + 1 = 2".to_string(),
            "3 - 2 = 1".to_string(),
            "232 + 1 = 233".to_string(),
        ]
    );
    assert_eq!(
        total.to_string(),
        "25 x 9 = 225, 225 + 7 = 232, 1 + 1 = 2, 3 - 2 = 1, 232 + 1 = 233"
    );
}

#[test]
fn test_tile_item_trace() {
    let item = tile(75);
    assert!(item.is_tile());
    assert!(item.as_operation().is_none());
    assert_eq!(item.tile_count(), 1);
    assert_eq!(item.trace(), vec!["75".to_string()]);
    assert_eq!(item.to_string(), "75");
}

#[test]
fn test_item_equality_by_trace() {
    let a = combine(&tile(6), Operator::Add, &tile(2));
    let b = combine(&tile(2), Operator::Add, &tile(6));
    let c = combine(&tile(4), Operator::Mul, &tile(2));
    // Same value, same steps once canonicalized
    assert_eq!(a, b);
    // Same value, different steps
    assert_ne!(a, c);
    assert_eq!(tile(8), tile(8));
    assert_ne!(tile(8), c);
}

#[test]
fn test_operator_parse_and_display() {
    assert_eq!("x".parse::<Operator>(), Ok(Operator::Mul));
    assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
    assert_eq!(":".parse::<Operator>(), Ok(Operator::Div));
    assert_eq!(" + ".parse::<Operator>(), Ok(Operator::Add));
    assert_eq!(
        "%".parse::<Operator>(),
        Err(ExpressionError::UnknownOperator("%".to_string()))
    );
    for op in [Operator::Mul, Operator::Add, Operator::Sub, Operator::Div] {
        assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
    }
}
