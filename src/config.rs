//! Compile-time training configuration.
//!
//! The demo has no flags or configuration file. Everything the binary trains
//! with is fixed here; [`Hyperparameters::default`] bundles the constants for
//! the [`TrainerBuilder`](crate::trainer::TrainerBuilder).

use crate::scalar::ScalarOps;

/// Number of full passes over the dataset.
pub const EPOCHS: usize = 10_000;

/// Gradient-descent step size.
pub const LEARNING_RATE: f64 = 1e-4;

/// Perturbation used by the forward-difference gradient estimator.
pub const STEP: f64 = 1e-4;

/// Demo inputs. Paired by index with [`LABELS`] (y = 10x).
pub const INPUTS: [f64; 4] = [2.0, 4.0, 6.0, 8.0];

pub const LABELS: [f64; 4] = [20.0, 40.0, 60.0, 80.0];

/// Hyperparameters for one training run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperparameters<T> {
    pub epochs: usize,
    pub learning_rate: T,
    /// Finite-difference step.
    pub h: T,
}

impl<T: ScalarOps> Default for Hyperparameters<T> {
    fn default() -> Self {
        Self {
            epochs: EPOCHS,
            learning_rate: T::from_f64(LEARNING_RATE),
            h: T::from_f64(STEP),
        }
    }
}

/// Demo dataset converted to the requested precision.
pub fn demo_samples<T: ScalarOps>() -> (Vec<T>, Vec<T>) {
    let inputs = INPUTS.iter().map(|&x| T::from_f64(x)).collect();
    let labels = LABELS.iter().map(|&y| T::from_f64(y)).collect();
    (inputs, labels)
}
