use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Identity of a node: the address of its shared `RefCell<ValueData>`.
///
/// Stable for as long as any `Value` handle (or downstream node) keeps the node alive.
/// Only ever compared and hashed, never dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// Topological sort of every node reachable from `root`.
///
/// See [`topological_sort_with`].
pub fn topological_sort(root: &Value) -> Vec<Value> {
    topological_sort_with(root, |_| {})
}

/// Builds a topological sort of the computation graph ending at `root`.
///
/// Every dependency appears before the nodes that consume it, and `root` is last.
/// A node shared by several consumers is emitted once. The traversal is a
/// depth-first post-order over `dependencies()`, driven by an explicit stack so
/// that deep graphs do not grow the call stack.
///
/// `visit` is invoked once per node, in emission order.
pub fn topological_sort_with<F>(root: &Value, mut visit: F) -> Vec<Value>
where
    F: FnMut(&Value),
{
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, its dependencies, index of the next dependency to descend into)
    let mut stack: Vec<(Value, Vec<Value>, usize)> = Vec::new();

    visited.insert(root.node_id());
    stack.push((root.clone(), root.dependencies(), 0));

    loop {
        let next_dependency = match stack.last_mut() {
            Some((_, dependencies, next)) => {
                let dependency = dependencies.get(*next).cloned();
                *next += 1;
                dependency
            }
            None => break,
        };

        match next_dependency {
            Some(dependency) => {
                if visited.insert(dependency.node_id()) {
                    let grand_dependencies = dependency.dependencies();
                    stack.push((dependency, grand_dependencies, 0));
                }
            }
            // All dependencies emitted: post-order position of this node.
            None => {
                if let Some((node, _, _)) = stack.pop() {
                    visit(&node);
                    sorted_list.push(node);
                }
            }
        }
    }

    sorted_list
}

/// Backward engine.
///
/// Seeds `root` with `1.0` and walks the topological order in reverse. Each
/// node's rule runs only once all of its consumers have pushed their
/// contribution into `grad_map`, so the `grad_output` it reads is final for
/// this pass. The pass result is then added into every node's accumulator.
pub(crate) fn backward(root: &Value) {
    let sorted_nodes = topological_sort(root);
    log::debug!(
        "Backward pass from {:?} over {} nodes",
        root.node_id(),
        sorted_nodes.len()
    );

    // Key: NodeId, Value: gradient accumulated during this pass
    let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
    grad_map.insert(root.node_id(), 1.0);

    for node in sorted_nodes.iter().rev() {
        let grad_output = grad_map.get(&node.node_id()).copied().unwrap_or(0.0);
        node.acc_grad(grad_output);

        // Clone the rule so that no borrow of `node` is held while inputs are touched.
        let grad_fn = match node.grad_fn() {
            Some(grad_fn) => grad_fn,
            None => continue,
        };
        let inputs = grad_fn.inputs();
        let input_grads = grad_fn.backward(node.value(), grad_output);
        debug_assert_eq!(inputs.len(), input_grads.len());

        log::trace!(
            "Propagating {:?} node {:?}: grad_output={}, partials={:?}",
            grad_fn.tag(),
            node.node_id(),
            grad_output,
            input_grads
        );

        for (input, grad_to_add) in inputs.iter().zip(input_grads) {
            *grad_map.entry(input.node_id()).or_insert(0.0) += grad_to_add;
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
