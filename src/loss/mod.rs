use crate::model::predict;
use crate::scalar::ScalarOps;

/// A per-sample loss function.
///
/// Implementors define the scalar loss value and its derivative with respect to the
/// prediction. The trainer only needs [`Loss::loss`]; the derivative backs the
/// closed-form reference estimator in [`crate::gradient::Analytic`].
pub trait Loss<T: ScalarOps> {
    /// Loss for one prediction against its label.
    fn loss(&self, prediction: T, target: T) -> T;

    /// Derivative of the loss w.r.t. the prediction: ∂L/∂pred.
    fn grad_wrt_prediction(&self, prediction: T, target: T) -> T;
}

/// Half squared error: `L = (target - pred)^2 / 2`.
///
/// Gradient w.r.t. prediction: `∂L/∂pred = pred - target`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfSquaredError;

impl<T: ScalarOps> Loss<T> for HalfSquaredError {
    fn loss(&self, prediction: T, target: T) -> T {
        let diff = target - prediction;
        diff * diff / T::from_f64(2.0)
    }

    fn grad_wrt_prediction(&self, prediction: T, target: T) -> T {
        prediction - target
    }
}

/// Half squared error of the model `weight * x + bias` on one sample.
pub fn cost<T: ScalarOps>(x: T, label: T, weight: T, bias: T) -> T {
    HalfSquaredError.loss(predict(x, weight, bias), label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_matches_formula() {
        let cases: [(f64, f64, f64, f64); 4] = [
            (2.0, 20.0, 0.0, 0.0),
            (4.0, 40.0, 10.0, 0.0),
            (-1.5, 3.0, 2.0, -0.5),
            (8.0, 80.0, 9.8, 0.9),
        ];
        for (x, y, w, b) in cases {
            let expected = (y - (w * x + b)) * (y - (w * x + b)) / 2.0;
            assert!((cost(x, y, w, b) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cost_is_non_negative() {
        for w in [-20.0f64, -1.0, 0.0, 3.0, 10.0, 50.0] {
            for b in [-5.0, 0.0, 5.0] {
                assert!(cost(6.0, 60.0, w, b) >= 0.0);
            }
        }
    }

    #[test]
    fn test_cost_zero_on_perfect_fit() {
        assert_eq!(cost(6.0f32, 60.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_initial_cost_on_demo_sample() {
        // (20 - 0)^2 / 2
        assert_eq!(cost(2.0f32, 20.0, 0.0, 0.0), 200.0);
    }

    #[test]
    fn test_half_squared_error_grad() {
        let loss = HalfSquaredError;
        assert_eq!(Loss::<f64>::grad_wrt_prediction(&loss, 3.0, 1.0), 2.0);
        assert_eq!(Loss::<f64>::grad_wrt_prediction(&loss, -1.0, 2.0), -3.0);
    }
}
