//! # linreg-fd
//!
//! Gradient-descent training of a single-variable linear model `y = w·x + b`, with
//! gradients estimated by finite differences instead of derived analytically.
//!
//! ## Core Design Principles
//!
//! - **Explicit state**: weight and bias live in a [`LinearParams`](model::LinearParams)
//!   value owned by the model the trainer is fitting. No globals.
//! - **Training/Inference Separation**: `LinearModel<T, Unfitted>` is what the trainer
//!   mutates; only `LinearModel<T, Fitted>` can `predict`.
//! - **Precision agnostic**: everything is generic over [`ScalarOps`] (`f32`, `f64`).
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg_fd::dataset::InMemoryDataset;
//! use linreg_fd::model::LinearRegression;
//! use linreg_fd::trainer::TrainerBuilder;
//!
//! let dataset = InMemoryDataset::<f64>::demo();
//! let trainer = TrainerBuilder::new().epochs(2000).build().unwrap();
//! let (fitted, report) = trainer.fit(LinearRegression::new(), &dataset).unwrap();
//!
//! assert!((report.params.weight - 10.0).abs() < 1.0);
//! let y = fitted.predict(5.0);
//! assert!((y - 50.0).abs() < 5.0);
//! ```
//!
//! ## Module Structure
//!
//! - `scalar`: floating-point abstraction
//! - `model`: predictor and typestate linear model
//! - `loss`: per-sample half squared error (`cost`)
//! - `gradient`: forward-difference and closed-form gradient estimators
//! - `optimizer`: SGD parameter update
//! - `trainer`: the online training loop
//! - `dataset`: ordered `(x, y)` sample sources
//! - `config`: compile-time hyperparameters and the demo dataset
//! - `prompt`: stdin parsing and output formatting for the demo binary

/// Compile-time hyperparameters and demo data.
pub mod config;

/// Ordered sample sources.
pub mod dataset;

pub mod error;

/// Gradient estimators.
pub mod gradient;

/// Per-sample loss functions.
pub mod loss;

/// Linear model with compile-time training state.
pub mod model;

/// Parameter update rules.
pub mod optimizer;

pub mod prompt;

pub mod scalar;

/// Online training loop.
pub mod trainer;

pub use error::{Error, Result};
pub use scalar::ScalarOps;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Hyperparameters;
    use crate::dataset::InMemoryDataset;
    use crate::model::LinearRegression;
    use crate::trainer::{TrainerBuilder, TrainingReport};

    fn train_demo<T: ScalarOps>() -> TrainingReport<T> {
        let trainer = TrainerBuilder::from_hyperparameters(Hyperparameters::default())
            .verbose(false)
            .build()
            .unwrap();
        let (_, report) = trainer
            .fit(LinearRegression::new(), &InMemoryDataset::demo())
            .unwrap();
        report
    }

    #[test]
    fn test_demo_training_converges_f64() {
        let report = train_demo::<f64>();
        let w = report.params.weight;
        let b = report.params.bias;
        println!("loss={:.6}, w={:.4}, b={:.4}", report.last_loss, w, b);
        assert_eq!(report.epochs, 10_000);
        assert!((w - 10.0).abs() < 1.0, "weight = {}", w);
        assert!(b.abs() < 5.0, "bias = {}", b);
        assert!(report.last_loss < 1.0, "loss = {}", report.last_loss);
        assert!(report.last_loss >= 0.0);
    }

    #[test]
    fn test_demo_training_converges_f32() {
        let report = train_demo::<f32>();
        assert!((report.params.weight - 10.0).abs() < 1.0);
        assert!(report.params.bias.abs() < 5.0);
        assert!(report.last_loss < 1.0);
    }

    #[test]
    fn test_demo_training_f32_matches_reference_output() {
        // Values printed by the single-precision reference run of the demo.
        let trainer = TrainerBuilder::<f32>::new().verbose(false).build().unwrap();
        let (fitted, report) = trainer
            .fit(LinearRegression::new(), &InMemoryDataset::demo())
            .unwrap();

        assert_eq!(format!("{:.6}", report.last_loss), "0.041898");
        assert_eq!(format!("{:.6}", report.params.weight), "9.858013");
        assert_eq!(format!("{:.6}", report.params.bias), "0.848324");
        assert_eq!(format!("{:.2}", fitted.predict(5.0)), "50.14");
    }

    #[test]
    fn test_demo_training_is_deterministic() {
        assert_eq!(train_demo::<f32>(), train_demo::<f32>());
    }

    #[test]
    fn test_trained_model_predicts_near_ten_x() {
        let trainer = TrainerBuilder::<f64>::new().verbose(false).build().unwrap();
        let (fitted, report) = trainer
            .fit(LinearRegression::new(), &InMemoryDataset::demo())
            .unwrap();
        let p = fitted.predict(5.0);
        assert_eq!(p, report.params.weight * 5.0 + report.params.bias);
        assert!((p - 50.0).abs() < 2.0, "p = {}", p);
    }
}
