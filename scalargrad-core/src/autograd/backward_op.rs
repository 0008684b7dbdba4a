use crate::value::Value;
use std::fmt;

/// Records which operation produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpTag {
    Leaf,
    Add,
    Multiply,
    Power,
    Tanh,
    Relu,
    Sigmoid,
}

impl fmt::Display for OpTag {
    /// Short symbol used when rendering the graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            OpTag::Leaf => "",
            OpTag::Add => "+",
            OpTag::Multiply => "*",
            OpTag::Power => "**",
            OpTag::Tanh => "tanh",
            OpTag::Relu => "relu",
            OpTag::Sigmoid => "sigmoid",
        };
        f.write_str(symbol)
    }
}

/// The gradient rule of a non-leaf node.
///
/// Each variant stores the operands that were used during the forward pass, one
/// per operand *slot*. The same node may occupy several slots (`a * a`), in which
/// case it receives one partial per slot.
///
/// The rule is evaluated by [`BackwardOp::backward`], which is given the output
/// node's value and its fully accumulated gradient and returns
/// \\( \frac{dL}{d\text{input}_i} = \frac{dL}{d\text{out}} \cdot \frac{d\text{out}}{d\text{input}_i} \\)
/// for every slot.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    Add { lhs: Value, rhs: Value },
    Mul { lhs: Value, rhs: Value },
    /// `exponent` is a plain constant, it never receives a gradient.
    Pow { base: Value, exponent: f64 },
    Tanh { input: Value },
    Relu { input: Value },
    Sigmoid { input: Value },
}

impl BackwardOp {
    pub fn tag(&self) -> OpTag {
        match self {
            BackwardOp::Add { .. } => OpTag::Add,
            BackwardOp::Mul { .. } => OpTag::Multiply,
            BackwardOp::Pow { .. } => OpTag::Power,
            BackwardOp::Tanh { .. } => OpTag::Tanh,
            BackwardOp::Relu { .. } => OpTag::Relu,
            BackwardOp::Sigmoid { .. } => OpTag::Sigmoid,
        }
    }

    /// Operands in slot order. The order matches the partials returned by `backward()`.
    pub fn inputs(&self) -> Vec<Value> {
        match self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => {
                vec![lhs.clone(), rhs.clone()]
            }
            BackwardOp::Pow { base, .. } => vec![base.clone()],
            BackwardOp::Tanh { input }
            | BackwardOp::Relu { input }
            | BackwardOp::Sigmoid { input } => vec![input.clone()],
        }
    }

    /// Like `inputs()`, but moves the handles out instead of cloning them.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input }
            | BackwardOp::Relu { input }
            | BackwardOp::Sigmoid { input } => vec![input],
        }
    }

    /// Computes the partial for each operand slot.
    ///
    /// # Arguments
    /// * `output`: the forward value of the node this rule belongs to.
    /// * `grad_output`: the gradient accumulated into that node by all of its consumers.
    pub fn backward(&self, output: f64, grad_output: f64) -> Vec<f64> {
        match self {
            BackwardOp::Add { .. } => vec![grad_output, grad_output],
            BackwardOp::Mul { lhs, rhs } => {
                vec![rhs.value() * grad_output, lhs.value() * grad_output]
            }
            BackwardOp::Pow { base, exponent } => {
                let p = *exponent;
                vec![p * base.value().powf(p - 1.0) * grad_output]
            }
            // d tanh(x) / dx = 1 - tanh(x)^2
            BackwardOp::Tanh { .. } => vec![(1.0 - output * output) * grad_output],
            BackwardOp::Relu { .. } => {
                let mask = if output > 0.0 { 1.0 } else { 0.0 };
                vec![mask * grad_output]
            }
            // d s(x) / dx = s(x) * (1 - s(x))
            BackwardOp::Sigmoid { .. } => vec![output * (1.0 - output) * grad_output],
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
