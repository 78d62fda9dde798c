//! Dataset abstractions.
//!
//! A [`Dataset`] is an ordered source of `(x, y)` pairs. The trainer visits the
//! samples in [`Dataset::samples`] order every epoch, so iteration order is part of
//! the contract: it must be the same on every call.
//!
//! ```rust
//! use linreg_fd::dataset::{Dataset, InMemoryDataset};
//!
//! let dataset = InMemoryDataset::new(vec![1.0f64, 2.0], vec![2.0, 4.0]).unwrap();
//! assert_eq!(dataset.len(), 2);
//! let pairs: Vec<_> = dataset.samples().collect();
//! assert_eq!(pairs, vec![(1.0, 2.0), (2.0, 4.0)]);
//! ```

use crate::scalar::ScalarOps;

pub mod memory;
pub use self::memory::InMemoryDataset;

/// Ordered collection of `(input, label)` samples.
pub trait Dataset<T: ScalarOps> {
    /// Total number of samples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the samples in their fixed order.
    fn samples(&self) -> Box<dyn Iterator<Item = (T, T)> + '_>;
}
