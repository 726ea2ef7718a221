use std::fmt;
use std::str::FromStr;

use crate::expression::ast::{Item, Operation, Operator};
use crate::expression::errors::ExpressionError;

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Mul => "x",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" | "*" | "×" => Ok(Operator::Mul),
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "/" | ":" | "÷" => Ok(Operator::Div),
            other => Err(ExpressionError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.trace().join(", "))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Item::Tile(tile) => write!(f, "{}", tile),
            Item::Operation(op) => write!(f, "{}", op),
        }
    }
}
