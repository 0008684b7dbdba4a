use crate::error::ScalarGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input must be a leaf node (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

/// Step and acceptance threshold for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Maximum absolute *and* relative difference tolerated.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` builds a scalar output from the given leaves. It is called once on
/// `inputs` (whose gradients are reset first) to get the analytical gradients via
/// `backward()`, then twice per input on fresh, perturbed leaves to compute
/// \\( \frac{f(x + \epsilon) - f(x - \epsilon)}{2 \epsilon} \\).
///
/// A gradient is rejected when it differs from the estimate by more than
/// `tolerance`, both absolutely and relative to its magnitude.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let GradCheckConfig { epsilon, tolerance } = *config;

    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs)?;
    output.backward();
    let analytical_grads: Vec<f64> = inputs.iter().map(Value::grad).collect();

    let base_values: Vec<f64> = inputs.iter().map(Value::value).collect();
    let evaluate_with = |index: usize, delta: f64| -> Result<f64, ScalarGradError> {
        let perturbed: Vec<Value> = base_values
            .iter()
            .enumerate()
            .map(|(j, &v)| Value::new(if j == index { v + delta } else { v }))
            .collect();
        Ok(func(&perturbed)?.value())
    };

    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate_with(i, epsilon)?;
        let loss_minus = evaluate_with(i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
        log::trace!(
            "check_grad input {}: analytical={}, numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
