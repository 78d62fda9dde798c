use crate::config;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::scalar::ScalarOps;

/// Dataset held in two index-paired vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryDataset<T> {
    inputs: Vec<T>,
    labels: Vec<T>,
}

impl<T: ScalarOps> InMemoryDataset<T> {
    /// Pairs `inputs[i]` with `labels[i]`.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] if the vectors differ in length,
    /// [`Error::EmptyDataset`] if both are empty.
    pub fn new(inputs: Vec<T>, labels: Vec<T>) -> Result<Self> {
        if inputs.len() != labels.len() {
            return Err(Error::LengthMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        if inputs.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(Self { inputs, labels })
    }

    /// The fixed four-sample demo set, y = 10x.
    pub fn demo() -> Self {
        let (inputs, labels) = config::demo_samples();
        Self { inputs, labels }
    }

    pub fn inputs(&self) -> &[T] {
        &self.inputs
    }

    pub fn labels(&self) -> &[T] {
        &self.labels
    }
}

impl<T: ScalarOps> Dataset<T> for InMemoryDataset<T> {
    fn len(&self) -> usize {
        self.inputs.len()
    }

    fn samples(&self) -> Box<dyn Iterator<Item = (T, T)> + '_> {
        Box::new(self.inputs.iter().copied().zip(self.labels.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = InMemoryDataset::new(vec![1.0f64, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                inputs: 2,
                labels: 1
            }
        ));
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = InMemoryDataset::<f32>::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn test_samples_keep_order() {
        let ds = InMemoryDataset::new(vec![3.0f64, 1.0, 2.0], vec![30.0, 10.0, 20.0]).unwrap();
        let pairs: Vec<_> = ds.samples().collect();
        assert_eq!(pairs, vec![(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
        // a second pass yields the same order
        let again: Vec<_> = ds.samples().collect();
        assert_eq!(pairs, again);
    }

    #[test]
    fn test_demo_dataset() {
        let ds = InMemoryDataset::<f32>::demo();
        assert_eq!(ds.len(), 4);
        assert!(!ds.is_empty());
        assert_eq!(ds.inputs(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(ds.labels(), &[20.0, 40.0, 60.0, 80.0]);
    }
}
