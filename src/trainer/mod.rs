use crate::{
    config::Hyperparameters,
    dataset::Dataset,
    error::{Error, Result},
    gradient::{ForwardDifference, GradientEstimator},
    loss::cost,
    model::{Fitted, LinearModel, LinearParams, LinearRegression},
    optimizer::{Optimizer, Sgd},
    scalar::ScalarOps,
};
use log::{debug, info};
use std::marker::PhantomData;

/// Summary of a finished training run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingReport<T> {
    pub epochs: usize,
    /// Loss of the last sample visited, measured before its update.
    pub last_loss: T,
    /// Mean per-sample loss over the final epoch.
    pub mean_loss: T,
    pub params: LinearParams<T>,
}

/// Runs online gradient descent over a dataset for a fixed number of epochs.
///
/// Every sample triggers one update: the loss and the gradient estimate are taken at
/// the current parameters, then the optimizer steps immediately. There is no
/// convergence check; all `epochs` passes run. With a fixed dataset and
/// hyperparameters the result is bit-for-bit reproducible.
pub struct Trainer<T, O, G>
where
    T: ScalarOps,
    O: Optimizer<T, LinearParams<T>>,
    G: GradientEstimator<T>,
{
    pub(crate) epochs: usize,
    pub(crate) verbose: bool,
    pub(crate) log_every: usize,
    pub(crate) optimizer: O,
    pub(crate) estimator: G,
    _phantom: PhantomData<T>,
}

/// Fluent builder for the default trainer: [`Sgd`] with [`ForwardDifference`] gradients.
///
/// Defaults come from [`Hyperparameters::default`], plus:
/// - `verbose`: true
/// - `log_every`: 1000
pub struct TrainerBuilder<T: ScalarOps> {
    hyperparameters: Hyperparameters<T>,
    verbose: bool,
    log_every: usize,
}

impl<T: ScalarOps> TrainerBuilder<T> {
    pub fn new() -> Self {
        Self::from_hyperparameters(Hyperparameters::default())
    }

    pub fn from_hyperparameters(hyperparameters: Hyperparameters<T>) -> Self {
        Self {
            hyperparameters,
            verbose: true,
            log_every: 1000,
        }
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.hyperparameters.epochs = epochs;
        self
    }

    pub fn learning_rate(mut self, lr: T) -> Self {
        self.hyperparameters.learning_rate = lr;
        self
    }

    /// Sets the finite-difference step `h`.
    pub fn step(mut self, h: T) -> Self {
        self.hyperparameters.h = h;
        self
    }

    /// When `false`, suppresses the periodic epoch logs.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Epoch interval between progress logs. `0` disables them.
    pub fn log_every(mut self, epochs: usize) -> Self {
        self.log_every = epochs;
        self
    }

    /// Validates the hyperparameters and builds the trainer.
    ///
    /// # Errors
    /// [`Error::InvalidHyperparameter`] if `epochs` is zero, the learning rate is not
    /// finite, or `h` is zero or not finite.
    pub fn build(self) -> Result<Trainer<T, Sgd<T>, ForwardDifference<T>>> {
        let hp = self.hyperparameters;
        if hp.epochs == 0 {
            return Err(Error::InvalidHyperparameter("epochs must be at least 1".into()));
        }
        if !hp.learning_rate.is_finite() {
            return Err(Error::InvalidHyperparameter(format!(
                "learning rate must be finite, got {}",
                hp.learning_rate
            )));
        }
        if !hp.h.is_finite() || hp.h == T::zero() {
            return Err(Error::InvalidHyperparameter(format!(
                "finite-difference step must be finite and non-zero, got {}",
                hp.h
            )));
        }

        let mut trainer = Trainer::new(
            hp.epochs,
            Sgd::new(hp.learning_rate),
            ForwardDifference::new(hp.h),
        );
        trainer.verbose = self.verbose;
        trainer.log_every = self.log_every;
        Ok(trainer)
    }
}

impl<T: ScalarOps> Default for TrainerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O, G> Trainer<T, O, G>
where
    T: ScalarOps,
    O: Optimizer<T, LinearParams<T>>,
    G: GradientEstimator<T>,
{
    /// Assembles a trainer from explicit components, e.g. to swap in
    /// [`Analytic`](crate::gradient::Analytic) gradients.
    pub fn new(epochs: usize, optimizer: O, estimator: G) -> Self {
        Self {
            epochs,
            verbose: true,
            log_every: 1000,
            optimizer,
            estimator,
            _phantom: PhantomData,
        }
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Trains `model` on `dataset` and returns the fitted model with a run summary.
    ///
    /// # Errors
    /// [`Error::EmptyDataset`] if the dataset has no samples.
    pub fn fit<D>(
        &self,
        mut model: LinearRegression<T>,
        dataset: &D,
    ) -> Result<(LinearModel<T, Fitted>, TrainingReport<T>)>
    where
        D: Dataset<T>,
    {
        let n_total = dataset.len();
        if n_total == 0 {
            return Err(Error::EmptyDataset);
        }
        info!("Starting fit: epochs = {}, samples = {}", self.epochs, n_total);

        let mut last_loss = T::zero();
        let mut mean_loss = T::zero();
        for epoch in 0..self.epochs {
            let mut epoch_loss = T::zero();
            for (x, y) in dataset.samples() {
                let params = *model.params();
                last_loss = cost(x, y, params.weight, params.bias);
                epoch_loss = epoch_loss + last_loss;

                let grads = self.estimator.gradients(x, y, &params);
                model.update_params(self.optimizer.step(&params, &grads));
            }
            mean_loss = epoch_loss / T::from_f64(n_total as f64);

            if self.verbose && self.log_every > 0 && (epoch + 1) % self.log_every == 0 {
                let p = model.params();
                debug!(
                    "Epoch {}: loss = {}, weight = {}, bias = {}",
                    epoch + 1,
                    mean_loss,
                    p.weight,
                    p.bias
                );
            }
        }

        let params = *model.params();
        info!(
            "Finished fit: weight = {}, bias = {}, loss = {}",
            params.weight, params.bias, last_loss
        );
        let report = TrainingReport {
            epochs: self.epochs,
            last_loss,
            mean_loss,
            params,
        };
        Ok((model.into_fitted(), report))
    }
}
