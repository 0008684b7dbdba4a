// src/value/autograd.rs

use crate::autograd::graph;
use crate::value::Value;

impl Value {
    /// Computes the gradient of this node w.r.t. every node it depends on.
    ///
    /// The seed is `1.0` (d self / d self). After the call each reachable node's
    /// `grad()` has been increased by d self / d node. Gradients are **not**
    /// reset between calls: calling `backward()` twice without `zero_grad_graph()`
    /// doubles every gradient.
    pub fn backward(&self) {
        if self.is_leaf() {
            log::debug!("backward() called on a leaf value. Only the seed is accumulated.");
        }
        graph::backward(self);
    }

    /// Resets the gradient of this node to `0.0`.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Resets the gradient of this node and of every node it depends on.
    pub fn zero_grad_graph(&self) {
        for node in graph::topological_sort(self) {
            node.zero_grad();
        }
    }

    /// Adds `grad_to_add` into this node's accumulator.
    pub(crate) fn acc_grad(&self, grad_to_add: f64) {
        self.write_data().grad += grad_to_add;
    }
}
