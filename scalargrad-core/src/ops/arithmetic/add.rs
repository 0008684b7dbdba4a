// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::ops::{apply_binary_op, Operand};
use crate::value::Value;

/// Adds two operands.
///
/// Gradient rule: both operands receive the output gradient unchanged.
pub fn add_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    apply_binary_op(
        a,
        b,
        |x, y| x + y,
        |lhs, rhs| BackwardOp::Add { lhs, rhs },
        "add_op",
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
