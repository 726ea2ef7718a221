use crate::expression::Operator;

/// Order in which operators are tried on each pair of items
pub const OPERATORS: [Operator; 4] = [
    Operator::Mul,
    Operator::Add,
    Operator::Sub,
    Operator::Div,
];
