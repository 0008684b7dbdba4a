// src/value/arithmetic_methods.rs

use crate::error::ScalarGradError;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::{add_op, mul_op, neg_op, pow_op, sub_op};
use crate::ops::Operand;
use crate::value::Value;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

impl Value {
    /// Raises this value to a constant exponent. See [`pow_op`].
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

// Every combination of owned/borrowed `Value` and `f64` operands forwards to the
// `_op` function; scalars are promoted to leaves by `Operand`.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<&'a Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &'a Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<&'a Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &'a Value) -> Value {
                $op_fn(self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Sum for Value {
    /// Left fold with `+`, starting from a `0.0` leaf.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| add_op(acc, v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| add_op(acc, v))
    }
}
