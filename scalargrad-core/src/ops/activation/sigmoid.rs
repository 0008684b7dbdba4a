use crate::autograd::BackwardOp;
use crate::ops::{apply_unary_op, Operand};
use crate::value::Value;

/// Applies the logistic sigmoid, `1 / (1 + e^-x)`.
///
/// Gradient rule: \\( \frac{dL}{da} = s (1 - s) \cdot \frac{dL}{d\text{out}} \\) with `s` the output.
pub fn sigmoid_op(a: impl Into<Operand>) -> Value {
    apply_unary_op(
        a,
        |x| 1.0 / (1.0 + (-x).exp()),
        |input| BackwardOp::Sigmoid { input },
        "sigmoid_op",
    )
}
