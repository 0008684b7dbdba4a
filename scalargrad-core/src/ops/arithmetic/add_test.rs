use super::*;
use crate::autograd::OpTag;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Value::new(1.5);
    let b = Value::new(-4.0);
    let c = add_op(&a, &b);
    assert_relative_eq!(c.value(), -2.5);
    assert_eq!(c.op(), OpTag::Add);
    assert_eq!(c.dependencies(), vec![a, b]);
    assert_eq!(c.grad(), 0.0);
}

#[test]
fn test_add_backward() {
    let a = Value::new(1.5);
    let b = Value::new(-4.0);
    let c = add_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 1.0);
}

#[test]
fn test_add_scalar_promoted() {
    let a = Value::new(2.0);
    let c = add_op(&a, 3.0);
    assert_eq!(c.value(), 5.0);
    let deps = c.dependencies();
    assert_eq!(deps.len(), 2);
    assert!(deps[1].is_leaf());
    assert_eq!(deps[1].value(), 3.0);

    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(deps[1].grad(), 1.0);
}

#[test]
fn test_add_to_itself() {
    let a = Value::new(3.0);
    let b = add_op(&a, &a);
    assert_eq!(b.value(), 6.0);
    assert_eq!(b.dependencies(), vec![a.clone()]);
    b.backward();
    // Both slots contribute.
    assert_eq!(a.grad(), 2.0);
}
