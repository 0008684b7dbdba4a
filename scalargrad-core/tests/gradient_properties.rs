use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::Rng;
use scalargrad_core::autograd::{check_grad, topological_sort, GradCheckConfig, GradCheckError};
use scalargrad_core::ops::activation::{relu_op, sigmoid_op, tanh_op};
use scalargrad_core::ops::arithmetic::{add_op, mul_op, neg_op, pow_op, sub_op};
use scalargrad_core::{ScalarGradError, Value};

mod common;
use common::{init_logger, random_leaves, seeded_rng};

const SAMPLES: usize = 25;

type ScalarFn = fn(&[Value]) -> Result<Value, ScalarGradError>;

fn check_sampled(name: &str, func: ScalarFn, arity: usize, low: f64, high: f64, seed: u64) {
    let mut rng = seeded_rng(seed);
    let config = GradCheckConfig::default();
    for _ in 0..SAMPLES {
        let inputs = random_leaves(&mut rng, arity, low, high);
        if let Err(err) = check_grad(func, &inputs, &config) {
            let values: Vec<f64> = inputs.iter().map(Value::value).collect();
            panic!("{} failed at {:?}: {}", name, values, err);
        }
    }
}

#[test]
fn test_every_operation_matches_central_difference() {
    init_logger();
    check_sampled("add", |xs| Ok(add_op(&xs[0], &xs[1])), 2, -3.0, 3.0, 1);
    check_sampled("mul", |xs| Ok(mul_op(&xs[0], &xs[1])), 2, -3.0, 3.0, 2);
    check_sampled("neg", |xs| Ok(neg_op(&xs[0])), 1, -3.0, 3.0, 3);
    check_sampled("sub", |xs| Ok(sub_op(&xs[0], &xs[1])), 2, -3.0, 3.0, 4);
    check_sampled("pow3", |xs| pow_op(&xs[0], 3), 1, -2.0, 2.0, 5);
    check_sampled("pow_frac", |xs| pow_op(&xs[0], 1.5), 1, 0.5, 3.0, 6);
    check_sampled("pow_neg", |xs| pow_op(&xs[0], -2), 1, 0.5, 3.0, 7);
    check_sampled("tanh", |xs| Ok(tanh_op(&xs[0])), 1, -3.0, 3.0, 8);
    check_sampled("sigmoid", |xs| Ok(sigmoid_op(&xs[0])), 1, -4.0, 4.0, 9);
    check_sampled("relu_pos", |xs| Ok(relu_op(&xs[0])), 1, 0.01, 3.0, 10);
    check_sampled("relu_neg", |xs| Ok(relu_op(&xs[0])), 1, -3.0, -0.01, 11);
}

#[test]
fn test_composite_expression_matches_central_difference() -> Result<(), GradCheckError> {
    init_logger();
    let mut rng = seeded_rng(42);
    for _ in 0..SAMPLES {
        let inputs = random_leaves(&mut rng, 4, -1.5, 1.5);
        check_grad(
            |xs| {
                // tanh(x0*x1 + x2) * sigmoid(x3) - (x0 - x3)^2 + x1*x1
                let h = (&xs[0] * &xs[1] + &xs[2]).tanh();
                let gate = xs[3].sigmoid();
                let diff = (&xs[0] - &xs[3]).pow(2)?;
                Ok(h * gate - diff + &xs[1] * &xs[1])
            },
            &inputs,
            &GradCheckConfig::default(),
        )?;
    }
    Ok(())
}

/// Random DAG built from the leaves, reusing earlier nodes as operands.
fn random_graph(rng: &mut StdRng, leaves: &[Value], extra: usize) -> Vec<Value> {
    let mut nodes: Vec<Value> = leaves.to_vec();
    for _ in 0..extra {
        let a = nodes[rng.gen_range(0..nodes.len())].clone();
        let b = nodes[rng.gen_range(0..nodes.len())].clone();
        let node = match rng.gen_range(0..5) {
            0 => &a + &b,
            1 => &a * &b,
            2 => a.tanh(),
            3 => a.sigmoid(),
            _ => &a - &b,
        };
        nodes.push(node);
    }
    nodes
}

#[test]
fn test_topological_order_respects_every_edge() {
    let mut rng = seeded_rng(7);
    for _ in 0..10 {
        let leaves = random_leaves(&mut rng, 4, -1.0, 1.0);
        let nodes = random_graph(&mut rng, &leaves, 30);
        let root = nodes.last().cloned().expect("graph is never empty");

        let order = topological_sort(&root);
        assert_eq!(order.last(), Some(&root));
        for (i, node) in order.iter().enumerate() {
            assert_eq!(
                order.iter().filter(|other| *other == node).count(),
                1,
                "node emitted more than once"
            );
            for dependency in node.dependencies() {
                let pos = order
                    .iter()
                    .position(|other| *other == dependency)
                    .expect("dependency missing from order");
                assert!(pos < i, "dependency emitted after its consumer");
            }
        }
    }
}

#[test]
fn test_shared_leaf_gradient_is_sum_over_paths() {
    let a = Value::new(1.5);
    let b = Value::new(-2.0);
    let c = Value::new(4.0);
    // f = a*b + a*c + tanh(a)  =>  df/da = b + c + (1 - tanh(a)^2)
    let f = &a * &b + &a * &c + a.tanh();
    f.backward();

    let t = 1.5f64.tanh();
    assert_relative_eq!(a.grad(), -2.0 + 4.0 + (1.0 - t * t), epsilon = 1e-12);
    assert_relative_eq!(b.grad(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(c.grad(), 1.5, epsilon = 1e-12);
}

#[test]
fn test_forward_values_never_change() {
    let mut rng = seeded_rng(11);
    let leaves = random_leaves(&mut rng, 3, -1.0, 1.0);
    let nodes = random_graph(&mut rng, &leaves, 20);
    let root = nodes.last().cloned().expect("graph is never empty");

    let before: Vec<f64> = nodes.iter().map(Value::value).collect();
    root.backward();
    root.backward();
    root.zero_grad_graph();
    root.backward();
    let after: Vec<f64> = nodes.iter().map(Value::value).collect();
    assert_eq!(before, after);
}

#[test]
fn test_second_backward_doubles_every_gradient() {
    init_logger();
    let mut rng = seeded_rng(23);
    let leaves = random_leaves(&mut rng, 3, -1.0, 1.0);
    let nodes = random_graph(&mut rng, &leaves, 15);
    let root = nodes.last().cloned().expect("graph is never empty");
    let order = topological_sort(&root);

    root.backward();
    let once: Vec<f64> = order.iter().map(Value::grad).collect();
    root.backward();
    let twice: Vec<f64> = order.iter().map(Value::grad).collect();

    for (g1, g2) in once.iter().zip(&twice) {
        assert_relative_eq!(*g2, 2.0 * g1, epsilon = 1e-12, max_relative = 1e-12);
    }
    assert_eq!(root.grad(), 2.0);

    root.zero_grad_graph();
    root.backward();
    let reset: Vec<f64> = order.iter().map(Value::grad).collect();
    for (g1, g) in once.iter().zip(&reset) {
        assert_relative_eq!(*g, *g1, epsilon = 1e-12, max_relative = 1e-12);
    }
}
