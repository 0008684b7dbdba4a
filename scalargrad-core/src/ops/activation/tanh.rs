use crate::autograd::BackwardOp;
use crate::ops::{apply_unary_op, Operand};
use crate::value::Value;

/// Applies the hyperbolic tangent.
///
/// Gradient rule: \\( \frac{dL}{da} = (1 - t^2) \cdot \frac{dL}{d\text{out}} \\) with `t` the output.
///
/// `f64::tanh` is used for the forward value; it saturates to `±1` instead of
/// producing `inf / inf` for large inputs.
pub fn tanh_op(a: impl Into<Operand>) -> Value {
    apply_unary_op(
        a,
        f64::tanh,
        |input| BackwardOp::Tanh { input },
        "tanh_op",
    )
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
