//! Trainer: one-shot Hebbian learning of the weight matrix.
//!
//! For each pair `(x, y)` the trainer builds an update matrix `ΔM` that is
//! zero everywhere except on the active row(s) of `y`. On an active row,
//! present features (`x[j] = 1`) get `+ε` and absent features (`x[j] = 0`)
//! get `-ε`. The weight matrix is the plain sum of all updates:
//!
//! ```text
//! M = ΔM_1 + ΔM_2 + ... + ΔM_k
//! ```
//!
//! Matrix addition commutes, so the final `M` does not depend on the order
//! of the training set.
//!
//! # Example
//!
//! ```rust
//! use lernmatrix::{train, TrainingSet};
//!
//! let set = TrainingSet::reference().unwrap();
//! let m = train(&set).unwrap();
//! assert_eq!(m.row(0), &[1, -1, 1, -1, 1]);
//! ```

use tracing::{debug, info};

use crate::error::{LernmatrixError, Result};
use crate::matrix::{UpdateMatrix, WeightMatrix};
use crate::observer::{NoopObserver, Observer, TrainStep};
use crate::pattern::{PatternPair, TrainingSet};

/// Fixed Hebbian step ε.
pub const LEARNING_RATE: i64 = 1;

/// Builds a [`WeightMatrix`] from a [`TrainingSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trainer {
    learning_rate: i64,
}

impl Trainer {
    /// Trainer with the standard step ε = [`LEARNING_RATE`].
    pub fn new() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
        }
    }

    /// Trainer with a custom positive step multiplier.
    pub fn with_learning_rate(learning_rate: i64) -> Result<Self> {
        if learning_rate <= 0 {
            return Err(LernmatrixError::InvalidLearningRate(learning_rate));
        }
        Ok(Self { learning_rate })
    }

    pub fn learning_rate(&self) -> i64 {
        self.learning_rate
    }

    /// Update matrix `ΔM` for one pair, sized `rows × cols`.
    ///
    /// `index` is only used to report which pair carried an empty label.
    pub fn update_matrix(
        &self,
        index: usize,
        pair: &PatternPair,
        rows: usize,
        cols: usize,
    ) -> Result<UpdateMatrix> {
        check_dimension(cols, pair.input.dimensions())?;
        check_dimension(rows, pair.output.dimensions())?;

        let active_rows = pair.output.active_indices();
        if active_rows.is_empty() {
            return Err(LernmatrixError::InvalidLabel { pair: index });
        }

        let mut update = UpdateMatrix::zeros(rows, cols);
        for h in active_rows {
            for j in 0..cols {
                let step = if pair.input.is_active(j) {
                    self.learning_rate
                } else {
                    -self.learning_rate
                };
                update.set(h, j, step);
            }
        }
        Ok(update)
    }

    /// Train on a full set, discarding intermediate snapshots.
    pub fn train(&self, set: &TrainingSet) -> Result<WeightMatrix> {
        self.train_observed(set, &mut NoopObserver)
    }

    /// Train on a full set, reporting every step to `observer`.
    ///
    /// Pairs are folded strictly in input order.
    pub fn train_observed(
        &self,
        set: &TrainingSet,
        observer: &mut dyn Observer,
    ) -> Result<WeightMatrix> {
        let rows = set.output_dimensions();
        let cols = set.input_dimensions();
        let mut m = WeightMatrix::zeros(rows, cols);

        for (index, pair) in set.iter().enumerate() {
            let update = self.update_matrix(index, pair, rows, cols)?;
            let before = m.clone();
            m.accumulate(&update)?;

            let active_rows = pair.output.active_indices();
            debug!(index, ?active_rows, "folded update matrix");

            observer.on_train_step(&TrainStep {
                index,
                active_rows,
                update,
                before,
                after: m.clone(),
            });
        }

        info!(
            pairs = set.len(),
            rows,
            cols,
            learning_rate = self.learning_rate,
            "training complete"
        );
        Ok(m)
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Train with ε = [`LEARNING_RATE`].
pub fn train(set: &TrainingSet) -> Result<WeightMatrix> {
    Trainer::new().train(set)
}

fn check_dimension(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(LernmatrixError::InputDimension { expected, got });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;

    #[test]
    fn test_reference_training() {
        let set = TrainingSet::reference().unwrap();
        let m = train(&set).unwrap();
        assert_eq!(
            m.to_rows(),
            vec![
                vec![1, -1, 1, -1, 1],
                vec![1, 1, -1, -1, 1],
                vec![1, -1, 1, 1, -1],
            ]
        );
    }

    #[test]
    fn test_update_matrix_touches_only_active_row() {
        let pair = PatternPair::from_raw(&[1, 1, 0, 0, 1], &[0, 1, 0]).unwrap();
        let dm = Trainer::new().update_matrix(0, &pair, 3, 5).unwrap();
        assert_eq!(dm.row(0), &[0, 0, 0, 0, 0]);
        assert_eq!(dm.row(1), &[1, 1, -1, -1, 1]);
        assert_eq!(dm.row(2), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_all_zero_input_inhibits_whole_row() {
        let pair = PatternPair::from_raw(&[0, 0, 0, 0], &[0, 0, 1]).unwrap();
        let dm = Trainer::new().update_matrix(0, &pair, 3, 4).unwrap();
        assert_eq!(dm.row(2), &[-1, -1, -1, -1]);
        assert!(dm.row(0).iter().chain(dm.row(1)).all(|&v| v == 0));
    }

    #[test]
    fn test_all_ones_input_reinforces_whole_row() {
        let pair = PatternPair::from_raw(&[1, 1, 1, 1], &[1, 0, 0]).unwrap();
        let dm = Trainer::new().update_matrix(0, &pair, 3, 4).unwrap();
        assert_eq!(dm.row(0), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_multiple_active_rows_each_updated() {
        let pair = PatternPair::from_raw(&[1, 0], &[1, 0, 1]).unwrap();
        let dm = Trainer::new().update_matrix(0, &pair, 3, 2).unwrap();
        assert_eq!(dm.to_rows(), vec![vec![1, -1], vec![0, 0], vec![1, -1]]);
    }

    #[test]
    fn test_invalid_label() {
        let set = TrainingSet::new(vec![
            PatternPair::from_raw(&[1, 0, 1], &[1, 0]).unwrap(),
            PatternPair::from_raw(&[0, 1, 1], &[0, 0]).unwrap(),
        ])
        .unwrap();
        assert!(matches!(
            train(&set),
            Err(LernmatrixError::InvalidLabel { pair: 1 })
        ));
    }

    #[test]
    fn test_order_independence() {
        let set = TrainingSet::reference().unwrap();
        let expected = train(&set).unwrap();
        for seed in 0..16 {
            assert_eq!(train(&set.permuted(seed)).unwrap(), expected);
        }
    }

    #[test]
    fn test_learning_rate_scales_updates() {
        let set = TrainingSet::reference().unwrap();
        let m = Trainer::with_learning_rate(3).unwrap().train(&set).unwrap();
        assert_eq!(m.row(0), &[3, -3, 3, -3, 3]);

        assert!(matches!(
            Trainer::with_learning_rate(0),
            Err(LernmatrixError::InvalidLearningRate(0))
        ));
    }

    #[test]
    fn test_huge_learning_rate_overflows_without_panic() {
        let set = TrainingSet::new(vec![
            PatternPair::from_raw(&[1, 0], &[1, 0]).unwrap(),
            PatternPair::from_raw(&[1, 1], &[1, 0]).unwrap(),
        ])
        .unwrap();
        let trainer = Trainer::with_learning_rate(i64::MAX).unwrap();
        assert!(matches!(
            trainer.train(&set),
            Err(LernmatrixError::Overflow(_))
        ));
    }

    #[test]
    fn test_observer_sees_every_step() {
        let set = TrainingSet::reference().unwrap();
        let mut recorder = RecordingObserver::new();
        let m = Trainer::new().train_observed(&set, &mut recorder).unwrap();

        assert_eq!(recorder.steps.len(), 3);
        assert_eq!(recorder.steps[0].before, WeightMatrix::zeros(3, 5));
        assert_eq!(recorder.steps[0].active_rows, vec![0]);
        assert_eq!(recorder.steps[1].before, recorder.steps[0].after);
        assert_eq!(recorder.steps[2].after, m);
    }
}
