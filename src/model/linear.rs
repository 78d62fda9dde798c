//! Single-variable linear model `y = weight * x + bias`.
//!
//! The model carries its training state in the type:
//! - [`LinearRegression<T>`] = `LinearModel<T, Unfitted>`, mutated by the trainer.
//! - `LinearModel<T, Fitted>`, inference only.

use super::{Fitted, ParamOps, Unfitted};
use crate::scalar::ScalarOps;
use std::marker::PhantomData;

/// Computes `weight * x + bias`.
pub fn predict<T: ScalarOps>(x: T, weight: T, bias: T) -> T {
    x * weight + bias
}

/// Trainable parameters of the model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearParams<T> {
    pub weight: T,
    pub bias: T,
}

impl<T: ScalarOps> LinearParams<T> {
    pub fn new(weight: T, bias: T) -> Self {
        Self { weight, bias }
    }

    /// Both parameters at zero.
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Prediction for a single input under these parameters.
    pub fn predict(&self, x: T) -> T {
        predict(x, self.weight, self.bias)
    }
}

impl<T: ScalarOps> ParamOps<T> for LinearParams<T> {
    fn add(&self, other: &Self) -> Self {
        Self {
            weight: self.weight + other.weight,
            bias: self.bias + other.bias,
        }
    }

    fn scale(&self, factor: T) -> Self {
        Self {
            weight: self.weight * factor,
            bias: self.bias * factor,
        }
    }
}

/// A linear model with its training state encoded at the type level.
pub struct LinearModel<T, S> {
    params: LinearParams<T>,
    _state: PhantomData<S>,
}

impl<T: ScalarOps, S> LinearModel<T, S> {
    pub fn params(&self) -> &LinearParams<T> {
        &self.params
    }
}

pub type LinearRegression<T> = LinearModel<T, Unfitted>;

impl<T: ScalarOps> LinearModel<T, Unfitted> {
    /// Untrained model with weight and bias initialized to zero.
    pub fn new() -> Self {
        Self::from_params(LinearParams::zeros())
    }

    pub fn from_params(params: LinearParams<T>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn update_params(&mut self, params: LinearParams<T>) {
        self.params = params;
    }

    /// Ends training. The parameters are carried over unchanged.
    pub fn into_fitted(self) -> LinearModel<T, Fitted> {
        LinearModel::<T, Fitted>::new(self.params)
    }
}

impl<T: ScalarOps> Default for LinearModel<T, Unfitted> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScalarOps> LinearModel<T, Fitted> {
    /// Wraps already-trained parameters for inference.
    pub fn new(params: LinearParams<T>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn predict(&self, x: T) -> T {
        self.params.predict(x)
    }
}
