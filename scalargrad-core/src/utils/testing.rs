use crate::value::Value;

/// Checks that a node holds the expected value and gradient within `tolerance`.
/// Panics with the offending field otherwise.
pub fn check_value_near(actual: &Value, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value = actual.value();
    let value_diff = (value - expected_value).abs();
    if !(value_diff <= tolerance) {
        panic!(
            "Value mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, value, expected_value, value_diff, tolerance
        );
    }

    let grad = actual.grad();
    let grad_diff = (grad - expected_grad).abs();
    if !(grad_diff <= tolerance) {
        panic!(
            "Gradient mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, grad, expected_grad, grad_diff, tolerance
        );
    }
}
