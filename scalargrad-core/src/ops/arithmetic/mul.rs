use crate::autograd::BackwardOp;
use crate::ops::{apply_binary_op, Operand};
use crate::value::Value;

// --- Forward Operation ---

/// Multiplies two operands.
///
/// Gradient rule: each operand receives the output gradient scaled by the
/// value of the other operand.
pub fn mul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    apply_binary_op(
        a,
        b,
        |x, y| x * y,
        |lhs, rhs| BackwardOp::Mul { lhs, rhs },
        "mul_op",
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
