// src/value_data.rs
use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage and metadata for a single scalar node.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` struct to allow
/// shared ownership across every downstream consumer, plus interior mutability
/// for the gradient accumulator and the diagnostic label.
#[derive(Debug)]
pub struct ValueData {
    /// The forward-computed scalar. Never written after construction.
    pub(crate) value: f64,

    // --- Autograd Metadata ---
    /// Gradient accumulator, starts at `0.0` and only grows during `backward()`.
    pub(crate) grad: f64,
    /// Gradient rule of the operation that produced this node.
    /// Leaf nodes (created directly by the user) have `grad_fn = None`.
    pub(crate) grad_fn: Option<BackwardOp>,

    /// Diagnostic name, no effect on computation.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates a leaf record: zero gradient, no gradient rule.
    pub fn new(value: f64) -> Self {
        ValueData {
            value,
            grad: 0.0,
            grad_fn: None,
            label: None,
        }
    }

    /// Creates the record of an operation output, recording how it was produced.
    pub(crate) fn from_op(value: f64, grad_fn: BackwardOp) -> Self {
        ValueData {
            value,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            label: None,
        }
    }
}

impl Drop for ValueData {
    /// Frees the dependency chain with an explicit work-stack, so dropping a deep
    /// graph does not grow the call stack. A node whose last handle is popped has
    /// its `grad_fn` detached before it is freed.
    fn drop(&mut self) {
        let mut pending: Vec<Value> = match self.grad_fn.take() {
            Some(op) => op.into_inputs(),
            None => return,
        };
        while let Some(node) = pending.pop() {
            // Shared nodes are only released here, another handle keeps them alive.
            if let Ok(cell) = Rc::try_unwrap(node.data) {
                let mut data = cell.into_inner();
                if let Some(op) = data.grad_fn.take() {
                    pending.extend(op.into_inputs());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "value_data_test.rs"]
mod tests;
