// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::{apply_unary_op, Operand};
use crate::value::Value;

/// Raises `base` to a constant `exponent`.
///
/// Gradient rule: \\( \frac{dL}{d\text{base}} = p \cdot \text{base}^{p - 1} \cdot \frac{dL}{d\text{out}} \\).
/// The exponent is a constant of the operation and receives no gradient.
///
/// # Errors
/// Returns `ScalarGradError::InvalidOperand` if `exponent` is a `Value` rather than
/// a number, or if it is NaN or infinite.
pub fn pow_op(base: &Value, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Scalar(p) if p.is_finite() => p,
        Operand::Scalar(p) => {
            return Err(ScalarGradError::InvalidOperand {
                operation: "pow_op".to_string(),
                reason: format!("exponent must be finite, got {}", p),
            })
        }
        Operand::Node(node) => {
            return Err(ScalarGradError::InvalidOperand {
                operation: "pow_op".to_string(),
                reason: format!(
                    "only numeric constant exponents are supported, got node {:?}",
                    node
                ),
            })
        }
    };

    Ok(apply_unary_op(
        base,
        |x| x.powf(exponent),
        move |base| BackwardOp::Pow { base, exponent },
        "pow_op",
    ))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
