//! High-level Lernmatrix handle.

use crate::config::LernmatrixConfig;
use crate::error::{LernmatrixError, Result};
use crate::evaluate::{evaluate_observed, Evaluation};
use crate::matrix::WeightMatrix;
use crate::observer::{NoopObserver, Observer};
use crate::pattern::{PatternPair, TrainingSet};
use crate::recall::{recall, Recall};
use crate::trainer::Trainer;
use crate::vector::BinaryVector;

/// A trainable associative memory.
///
/// Owns the trainer settings and, after [`fit`](Lernmatrix::fit), the learned
/// weight matrix. The matrix is only exposed by shared reference.
///
/// # Example
///
/// ```rust
/// use lernmatrix::{Lernmatrix, TrainingSet};
///
/// let set = TrainingSet::reference().unwrap();
/// let mut memory = Lernmatrix::new();
/// memory.fit(&set).unwrap();
///
/// let recalled = memory.recall(&set.pairs()[0].input).unwrap();
/// assert_eq!(recalled.winners(), vec![0]);
/// ```
#[derive(Clone, Debug)]
pub struct Lernmatrix {
    trainer: Trainer,
    record_items: bool,
    weights: Option<WeightMatrix>,
}

impl Lernmatrix {
    /// Untrained memory with ε = 1.
    pub fn new() -> Self {
        Self::with_trainer(Trainer::new())
    }

    pub fn with_trainer(trainer: Trainer) -> Self {
        Self {
            trainer,
            record_items: true,
            weights: None,
        }
    }

    pub fn from_config(config: &LernmatrixConfig) -> Result<Self> {
        Ok(Self {
            trainer: config.trainer()?,
            record_items: config.evaluate.record_items,
            weights: None,
        })
    }

    pub fn trainer(&self) -> &Trainer {
        &self.trainer
    }

    /// Train from scratch, replacing any previously learned matrix.
    pub fn fit(&mut self, set: &TrainingSet) -> Result<&WeightMatrix> {
        self.fit_observed(set, &mut NoopObserver)
    }

    pub fn fit_observed(
        &mut self,
        set: &TrainingSet,
        observer: &mut dyn Observer,
    ) -> Result<&WeightMatrix> {
        let weights = self.trainer.train_observed(set, observer)?;
        Ok(&*self.weights.insert(weights))
    }

    pub fn is_trained(&self) -> bool {
        self.weights.is_some()
    }

    /// The learned matrix, if trained.
    pub fn weights(&self) -> Option<&WeightMatrix> {
        self.weights.as_ref()
    }

    pub fn recall(&self, x: &BinaryVector) -> Result<Recall> {
        recall(self.trained()?, x)
    }

    pub fn evaluate(&self, test_set: &[PatternPair]) -> Result<Evaluation> {
        self.evaluate_observed(test_set, &mut NoopObserver)
    }

    /// Per-item results are dropped from the report when `record_items` is off;
    /// the observer still sees every item.
    pub fn evaluate_observed(
        &self,
        test_set: &[PatternPair],
        observer: &mut dyn Observer,
    ) -> Result<Evaluation> {
        let mut evaluation = evaluate_observed(self.trained()?, test_set, observer)?;
        if !self.record_items {
            evaluation.items.clear();
        }
        Ok(evaluation)
    }

    fn trained(&self) -> Result<&WeightMatrix> {
        self.weights.as_ref().ok_or(LernmatrixError::Untrained)
    }
}

impl Default for Lernmatrix {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;

    #[test]
    fn test_untrained_errors() {
        let memory = Lernmatrix::new();
        let x = BinaryVector::ones(5).unwrap();
        assert!(!memory.is_trained());
        assert!(matches!(memory.recall(&x), Err(LernmatrixError::Untrained)));
        assert!(matches!(memory.evaluate(&[]), Err(LernmatrixError::Untrained)));
    }

    #[test]
    fn test_fit_recall_evaluate() {
        let set = TrainingSet::reference().unwrap();
        let mut memory = Lernmatrix::new();
        let m = memory.fit(&set).unwrap().clone();

        assert_eq!(memory.weights(), Some(&m));
        let r = memory.recall(&set.pairs()[1].input).unwrap();
        assert_eq!(r.decision.data(), &[0, 1, 0]);

        let evaluation = memory.evaluate(set.pairs()).unwrap();
        assert_eq!(evaluation.accuracy.to_string(), "100.00%");
        assert_eq!(evaluation.items.len(), 3);
    }

    #[test]
    fn test_refit_replaces_weights() {
        let set = TrainingSet::reference().unwrap();
        let mut memory = Lernmatrix::new();
        memory.fit(&set).unwrap();
        let first = memory.weights().cloned();
        memory.fit(&set).unwrap();
        assert_eq!(memory.weights().cloned(), first);
    }

    #[test]
    fn test_from_config() {
        let toml = "[train]\nlearning_rate = 2\n[evaluate]\nrecord_items = false";
        let config = LernmatrixConfig::from_str(toml).unwrap();
        let set = TrainingSet::reference().unwrap();
        let mut memory = Lernmatrix::from_config(&config).unwrap();
        assert_eq!(memory.fit(&set).unwrap().row(1), &[2, 2, -2, -2, 2]);

        let mut recorder = RecordingObserver::new();
        let evaluation = memory.evaluate_observed(set.pairs(), &mut recorder).unwrap();
        assert!(evaluation.items.is_empty());
        assert_eq!(evaluation.tested(), 3);
        assert_eq!(recorder.items.len(), 3);
    }
}
