pub mod state;
pub use state::{Fitted, Unfitted};

pub mod linear;
pub use linear::{predict, LinearModel, LinearParams, LinearRegression};

use crate::scalar::ScalarOps;

/// Element-wise arithmetic on a parameter set, used by optimizers.
pub trait ParamOps<T: ScalarOps>: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, factor: T) -> Self;
}
