// src/value/traits.rs

use crate::value::Value;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Shallow clone: a new handle to the same node.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl PartialEq for Value {
    /// Identity comparison, the held numbers are not compared.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// Hashes the Value based on the pointer address of the `RefCell<ValueData>`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => {
                let op = match &guard.grad_fn {
                    Some(grad_fn) => grad_fn.tag(),
                    None => crate::autograd::OpTag::Leaf,
                };
                write!(
                    f,
                    "Value(data={}, grad={}, op={:?}, label={:?})",
                    guard.value, guard.grad, op, guard.label
                )
            }
            Err(_) => write!(f, "Value(<borrowed>)"),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.value())
    }
}
