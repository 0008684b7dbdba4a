// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::{BackwardOp, OpTag};
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashSet;
use std::rc::Rc;

mod arithmetic_methods;
mod autograd;
mod traits;

/// A scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** A node may be an operand of many downstream nodes,
///     and cloning a `Value` only clones the handle, never the node.
/// 2.  **Interior Mutability:** The gradient accumulator (and the label) can be
///     modified through a shared `Value` reference.
///
/// Equality and hashing are by identity: two distinct nodes holding the same
/// number are different nodes.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a new leaf node holding `value`.
    pub fn new(value: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(value))),
        }
    }

    /// Creates a new leaf node with a diagnostic label.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        let node = Value::new(value);
        node.set_label(label);
        node
    }

    /// Wraps the output of an operation together with its gradient rule.
    pub(crate) fn from_op(value: f64, grad_fn: BackwardOp) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(value, grad_fn))),
        }
    }

    /// Borrows the node record immutably.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node record mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// The forward-computed scalar.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// The accumulated gradient of the last `backward()` root(s) w.r.t. this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// The operation that produced this node, `OpTag::Leaf` for inputs.
    pub fn op(&self) -> OpTag {
        match &self.read_data().grad_fn {
            Some(grad_fn) => grad_fn.tag(),
            None => OpTag::Leaf,
        }
    }

    /// Returns a clone of the gradient rule, if this node is not a leaf.
    pub fn grad_fn(&self) -> Option<BackwardOp> {
        self.read_data().grad_fn.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// The distinct operands that produced this node, in order of first appearance.
    ///
    /// An operand used twice by the same operation (e.g. `a * a`) is listed once.
    pub fn dependencies(&self) -> Vec<Value> {
        let inputs = match &self.read_data().grad_fn {
            Some(grad_fn) => grad_fn.inputs(),
            None => return Vec::new(),
        };
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(inputs.len());
        inputs
            .into_iter()
            .filter(|input| seen.insert(input.node_id()))
            .collect()
    }

    /// Stable identity of the underlying node, shared by all clones of this handle.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
