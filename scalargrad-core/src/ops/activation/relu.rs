use crate::autograd::BackwardOp;
use crate::ops::{apply_unary_op, Operand};
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit (ReLU) activation function.
/// ReLU(x) = max(0, x)
///
/// Gradient rule: the output gradient passes through when the *output* is
/// positive, and is blocked otherwise (including at exactly zero).
pub fn relu_op(a: impl Into<Operand>) -> Value {
    apply_unary_op(
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        |input| BackwardOp::Relu { input },
        "relu_op",
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
