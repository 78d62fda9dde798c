//! Gradient estimators for the half-squared-error cost of a linear model.
//!
//! Training uses [`ForwardDifference`]: the cost is evaluated at the current
//! parameters and again with one parameter nudged by `h`, and the slope between the
//! two points stands in for the partial derivative. [`Analytic`] computes the exact
//! derivative and is kept as a reference to measure the approximation against.
//!
//! ```
//! use linreg_fd::gradient::{Analytic, ForwardDifference, GradientEstimator};
//! use linreg_fd::model::LinearParams;
//!
//! let params = LinearParams::new(1.0f64, 0.0);
//! let approx = ForwardDifference::new(1e-6).gradients(2.0, 20.0, &params);
//! let exact = Analytic.gradients(2.0, 20.0, &params);
//! assert!((approx.weight - exact.weight).abs() < 1e-4);
//! ```

use crate::loss::{cost, HalfSquaredError, Loss};
use crate::model::LinearParams;
use crate::scalar::ScalarOps;

/// The parameter a partial derivative is taken with respect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Weight,
    Bias,
}

impl Param {
    /// Copy of `params` with this parameter shifted by `delta`.
    pub fn perturb<T: ScalarOps>(self, params: &LinearParams<T>, delta: T) -> LinearParams<T> {
        match self {
            Param::Weight => LinearParams::new(params.weight + delta, params.bias),
            Param::Bias => LinearParams::new(params.weight, params.bias + delta),
        }
    }
}

/// Estimates ∂cost/∂param for a single sample.
pub trait GradientEstimator<T: ScalarOps> {
    fn partial(&self, param: Param, x: T, label: T, params: &LinearParams<T>) -> T;

    /// Both partials, packed as a parameter-shaped gradient.
    ///
    /// Each partial is taken at the same `params`.
    fn gradients(&self, x: T, label: T, params: &LinearParams<T>) -> LinearParams<T> {
        LinearParams::new(
            self.partial(Param::Weight, x, label, params),
            self.partial(Param::Bias, x, label, params),
        )
    }
}

/// Forward-difference approximation `(cost(p + h) - cost(p)) / h`.
///
/// No step adaptation and no error bound: the truncation error grows with `h`,
/// the rounding error with `1 / h`.
#[derive(Debug, Clone, Copy)]
pub struct ForwardDifference<T> {
    h: T,
}

impl<T: ScalarOps> ForwardDifference<T> {
    pub fn new(h: T) -> Self {
        Self { h }
    }

    pub fn step(&self) -> T {
        self.h
    }
}

impl<T: ScalarOps> GradientEstimator<T> for ForwardDifference<T> {
    fn partial(&self, param: Param, x: T, label: T, params: &LinearParams<T>) -> T {
        let nudged = param.perturb(params, self.h);
        let cost_perturbed = cost(x, label, nudged.weight, nudged.bias);
        let cost_base = cost(x, label, params.weight, params.bias);
        (cost_perturbed - cost_base) / self.h
    }
}

/// Closed-form derivative of the half squared error.
///
/// `∂L/∂w = (pred - y) * x`, `∂L/∂b = pred - y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analytic;

impl<T: ScalarOps> GradientEstimator<T> for Analytic {
    fn partial(&self, param: Param, x: T, label: T, params: &LinearParams<T>) -> T {
        let residual = HalfSquaredError.grad_wrt_prediction(params.predict(x), label);
        match param {
            Param::Weight => residual * x,
            Param::Bias => residual,
        }
    }
}

/// Forward-difference slope of the cost with respect to `weight`.
pub fn weight_grad<T: ScalarOps>(x: T, label: T, weight: T, bias: T, h: T) -> T {
    ForwardDifference::new(h).partial(Param::Weight, x, label, &LinearParams::new(weight, bias))
}

/// Forward-difference slope of the cost with respect to `bias`.
pub fn bias_grad<T: ScalarOps>(x: T, label: T, weight: T, bias: T, h: T) -> T {
    ForwardDifference::new(h).partial(Param::Bias, x, label, &LinearParams::new(weight, bias))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perturb_touches_one_param() {
        let p = LinearParams::new(1.0f64, 2.0);
        assert_eq!(Param::Weight.perturb(&p, 0.5), LinearParams::new(1.5, 2.0));
        assert_eq!(Param::Bias.perturb(&p, 0.5), LinearParams::new(1.0, 2.5));
    }

    #[test]
    fn test_analytic_gradient() {
        // pred = 1 * 2 + 0 = 2, residual = 2 - 20 = -18
        let g = Analytic.gradients(2.0f64, 20.0, &LinearParams::new(1.0, 0.0));
        assert_eq!(g.weight, -36.0);
        assert_eq!(g.bias, -18.0);
    }

    #[test]
    fn test_weight_grad_converges_to_analytic() {
        let (x, y, w, b) = (4.0f64, 40.0, 3.0, 1.5);
        let exact = -(y - predict_ref(x, w, b)) * x;

        let mut prev_err = f64::INFINITY;
        for h in [1e-1, 1e-2, 1e-3, 1e-4] {
            let err = (weight_grad(x, y, w, b, h) - exact).abs();
            assert!(err < prev_err, "h = {h}: error {err} did not shrink");
            prev_err = err;
        }
        assert!(prev_err < 1e-2);
    }

    #[test]
    fn test_bias_grad_converges_to_analytic() {
        let (x, y, w, b) = (6.0f64, 60.0, 9.0, 0.5);
        let exact = -(y - predict_ref(x, w, b));
        assert!((bias_grad(x, y, w, b, 1e-6) - exact).abs() < 1e-4);
    }

    #[test]
    fn test_forward_difference_bias_term() {
        // The forward difference of a quadratic is exact up to h * curvature / 2:
        // ∂w: x^2 * h / 2, ∂b: h / 2.
        let (x, y, w, b, h) = (2.0f64, 20.0, 0.0, 0.0, 1e-2);
        let params = LinearParams::new(w, b);
        let fd = ForwardDifference::new(h).gradients(x, y, &params);
        let exact = Analytic.gradients(x, y, &params);
        assert!((fd.weight - exact.weight - x * x * h / 2.0).abs() < 1e-9);
        assert!((fd.bias - exact.bias - h / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_gradient_at_perfect_fit() {
        let g = Analytic.gradients(8.0f64, 80.0, &LinearParams::new(10.0, 0.0));
        assert_eq!(g, LinearParams::new(0.0, 0.0));
    }

    #[test]
    fn test_free_functions_match_estimator() {
        let params = LinearParams::new(2.0f32, -1.0);
        let g = ForwardDifference::new(1e-3f32).gradients(6.0, 60.0, &params);
        assert_eq!(weight_grad(6.0f32, 60.0, 2.0, -1.0, 1e-3), g.weight);
        assert_eq!(bias_grad(6.0f32, 60.0, 2.0, -1.0, 1e-3), g.bias);
    }

    fn predict_ref(x: f64, w: f64, b: f64) -> f64 {
        w * x + b
    }
}
