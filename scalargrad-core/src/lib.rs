//! Scalar reverse-mode automatic differentiation.
//!
//! Forward computations on [`Value`]s build a DAG of nodes as a side effect;
//! [`Value::backward`] then walks that graph in reverse topological order and
//! accumulates d root / d node into every node it depends on.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = &a * &b;
//! c.backward();
//! assert_eq!(c.value(), -6.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod ops;
pub mod utils;
pub mod value;
pub mod value_data;

pub mod error;
pub use error::ScalarGradError;

// Re-export the main types so they are reachable as `scalargrad_core::Value` etc.
pub use autograd::{BackwardOp, OpTag};
pub use ops::Operand;
pub use value::Value;
