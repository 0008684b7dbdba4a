//! # Reverse-mode automatic differentiation
//!
//! - [`backward_op`]: the per-operation gradient rules and the [`OpTag`] recorded on each node.
//! - [`graph`]: node identity, topological ordering and the backward engine.
//! - [`grad_check`]: comparison of analytical gradients against central differences.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{BackwardOp, OpTag};
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::{topological_sort, topological_sort_with, NodeId};
