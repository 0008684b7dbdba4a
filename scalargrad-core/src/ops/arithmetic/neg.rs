use crate::ops::arithmetic::mul_op;
use crate::ops::Operand;
use crate::value::Value;

/// Negates an operand, defined as `a * -1`.
///
/// There is no dedicated gradient rule, the multiplication's rule applies.
pub fn neg_op(a: impl Into<Operand>) -> Value {
    mul_op(a, -1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::OpTag;

    #[test]
    fn test_neg_forward_and_backward() {
        let a = Value::new(4.0);
        let b = neg_op(&a);
        assert_eq!(b.value(), -4.0);
        assert_eq!(b.op(), OpTag::Multiply);
        b.backward();
        assert_eq!(a.grad(), -1.0);
    }
}
