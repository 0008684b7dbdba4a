use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::Operand;
use crate::value::Value;

/// Subtracts `b` from `a`, defined as `a + (-b)`.
pub fn sub_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
