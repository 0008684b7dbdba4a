use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::Value;

// Helpers shared by the integration test crates. Not every crate uses every
// helper, hence the allow(dead_code).

/// Routes `log` output through the test harness. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic RNG so failures are reproducible.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Samples `n` leaves uniformly in `[low, high)`, labelled `x0`, `x1`, ...
#[allow(dead_code)]
pub fn random_leaves(rng: &mut StdRng, n: usize, low: f64, high: f64) -> Vec<Value> {
    (0..n)
        .map(|i| Value::with_label(rng.gen_range(low..high), format!("x{}", i)))
        .collect()
}
