// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear scalar functions with their gradient rules.
//!
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.
//! - [`relu`](relu/fn.relu_op.html): Rectified Linear Unit.
//! - [`sigmoid`](sigmoid/fn.sigmoid_op.html): logistic function.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
