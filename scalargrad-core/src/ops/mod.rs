//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable primitive lives in its own file and exposes an `xxx_op`
//! function that computes the forward value and attaches the matching
//! [`BackwardOp`](crate::autograd::BackwardOp) to the output node.
//!
//! - [`arithmetic`]: add, mul, pow, and the derived neg and sub.
//! - [`activation`]: tanh, relu, sigmoid.
//!
//! Operands are passed as anything convertible into an [`Operand`], so raw
//! numbers can be mixed with `Value`s; numbers are promoted to fresh leaves.

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::ToPrimitive;

pub mod activation;
pub mod arithmetic;

/// An operand of a primitive operation: a node of the graph or a plain number.
#[derive(Debug, Clone)]
pub enum Operand {
    Scalar(f64),
    Node(Value),
}

impl Operand {
    /// Builds a scalar operand from any numeric primitive.
    ///
    /// Every std numeric type converts. Only a custom `ToPrimitive` impl can fail here.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InvalidOperand` if `to_f64()` yields `None`.
    pub fn from_primitive<T: ToPrimitive>(number: T) -> Result<Self, ScalarGradError> {
        number
            .to_f64()
            .map(Operand::Scalar)
            .ok_or_else(|| ScalarGradError::InvalidOperand {
                operation: "Operand::from_primitive".to_string(),
                reason: "number is not representable as f64".to_string(),
            })
    }

    /// Returns the node, promoting a scalar into a new leaf.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Scalar(number) => Value::new(number),
            Operand::Node(node) => node,
        }
    }
}

impl From<Value> for Operand {
    fn from(node: Value) -> Self {
        Operand::Node(node)
    }
}

impl From<&Value> for Operand {
    fn from(node: &Value) -> Self {
        Operand::Node(node.clone())
    }
}

impl From<f64> for Operand {
    fn from(number: f64) -> Self {
        Operand::Scalar(number)
    }
}

impl From<f32> for Operand {
    fn from(number: f32) -> Self {
        Operand::Scalar(f64::from(number))
    }
}

impl From<i32> for Operand {
    fn from(number: i32) -> Self {
        Operand::Scalar(f64::from(number))
    }
}

/// Applies a unary scalar operation and attaches its gradient rule.
///
/// # Arguments
/// * `a`: The input operand, promoted to a leaf if it is a number.
/// * `op`: The forward formula.
/// * `backward_builder`: Builds the `BackwardOp` from the input node.
/// * `op_name`: Name of the operation for logging.
pub(crate) fn apply_unary_op<F, B>(
    a: impl Into<Operand>,
    op: F,
    backward_builder: B,
    op_name: &str,
) -> Value
where
    F: Fn(f64) -> f64,
    B: FnOnce(Value) -> BackwardOp,
{
    let input = a.into().into_value();
    let output = op(input.value());
    log::trace!("{}: {} -> {}", op_name, input.value(), output);
    Value::from_op(output, backward_builder(input))
}

/// Applies a binary scalar operation and attaches its gradient rule.
///
/// See [`apply_unary_op`].
pub(crate) fn apply_binary_op<F, B>(
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    op: F,
    backward_builder: B,
    op_name: &str,
) -> Value
where
    F: Fn(f64, f64) -> f64,
    B: FnOnce(Value, Value) -> BackwardOp,
{
    let lhs = a.into().into_value();
    let rhs = b.into().into_value();
    let output = op(lhs.value(), rhs.value());
    log::trace!("{}: ({}, {}) -> {}", op_name, lhs.value(), rhs.value(), output);
    Value::from_op(output, backward_builder(lhs, rhs))
}
