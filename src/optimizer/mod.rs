use crate::model::ParamOps;
use crate::scalar::ScalarOps;

/// Trait for gradient-based optimizers.
///
/// Keeps the parameter update rule separate from the training loop, so the
/// [`Trainer`](crate::trainer::Trainer) only orchestrates: estimate gradients, step.
///
/// # Type Parameters
/// * `T`: scalar precision
/// * `P`: parameter set (e.g., [`LinearParams`](crate::model::LinearParams))
///
/// # Example
/// ```rust
/// use linreg_fd::model::LinearParams;
/// use linreg_fd::optimizer::{Optimizer, Sgd};
///
/// let params = LinearParams::new(1.0f64, 0.5);
/// let grads = LinearParams::new(10.0, -2.0);
/// let updated = Sgd::new(0.1).step(&params, &grads);
/// assert_eq!(updated, LinearParams::new(0.0, 0.7));
/// ```
pub trait Optimizer<T: ScalarOps, P> {
    /// Returns the updated parameters; inputs are left untouched.
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Plain stochastic gradient descent: `θ ← θ - η · ∇L(θ)`.
///
/// Stateless: no momentum, no schedule.
#[derive(Debug, Clone, Copy)]
pub struct Sgd<T> {
    lr: T,
}

impl<T: ScalarOps> Sgd<T> {
    pub fn new(lr: T) -> Self {
        Self { lr }
    }

    pub fn learning_rate(&self) -> T {
        self.lr
    }
}

impl<T, P> Optimizer<T, P> for Sgd<T>
where
    T: ScalarOps,
    P: ParamOps<T>,
{
    fn step(&self, params: &P, grads: &P) -> P {
        // θ + (-η · g) is bit-identical to θ - η · g
        params.add(&grads.scale(-self.lr))
    }
}
