//! Evaluator: recall accuracy over a test set.
//!
//! Each test pair is recalled and the decision `y_ω` compared to the label
//! `y` for exact equality. A tied decision only counts as correct when it is
//! identical to the label, which never happens for one-hot labels.
//!
//! Evaluating a model on its own training set gives the resubstitution
//! accuracy:
//!
//! ```rust
//! use lernmatrix::{resubstitution, TrainingSet};
//!
//! let set = TrainingSet::reference().unwrap();
//! let (_m, evaluation) = resubstitution(&set).unwrap();
//! assert_eq!(evaluation.accuracy.to_string(), "100.00%");
//! ```

use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::error::{LernmatrixError, Result};
use crate::matrix::{Activation, WeightMatrix};
use crate::observer::{NoopObserver, Observer};
use crate::pattern::{PatternPair, TrainingSet};
use crate::recall::recall;
use crate::trainer::train;
use crate::vector::BinaryVector;

/// Running counters of one evaluation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Accuracy {
    /// Patterns recalled correctly.
    pub correct: usize,
    /// Patterns tested.
    pub tested: usize,
}

impl Accuracy {
    /// `correct / tested`, or 0.0 before anything was tested.
    pub fn fraction(&self) -> f64 {
        if self.tested == 0 {
            return 0.0;
        }
        self.correct as f64 / self.tested as f64
    }

    /// `1 - fraction`.
    pub fn error_rate(&self) -> f64 {
        1.0 - self.fraction()
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    fn record(&mut self, is_correct: bool) {
        self.tested += 1;
        if is_correct {
            self.correct += 1;
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percent())
    }
}

/// Outcome of recalling one test pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemResult {
    pub index: usize,
    pub activation: Activation,
    pub decision: BinaryVector,
    pub expected: BinaryVector,
    pub is_correct: bool,
}

/// Full evaluation report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub accuracy: Accuracy,
    pub items: Vec<ItemResult>,
}

impl Evaluation {
    pub fn correct(&self) -> usize {
        self.accuracy.correct
    }

    pub fn tested(&self) -> usize {
        self.accuracy.tested
    }

    /// Serialize the report as pretty JSON for presentation layers.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Evaluate `M` on `test_set`, in order.
pub fn evaluate(m: &WeightMatrix, test_set: &[PatternPair]) -> Result<Evaluation> {
    evaluate_observed(m, test_set, &mut NoopObserver)
}

/// Evaluate `M` on `test_set`, reporting each recall to `observer`.
pub fn evaluate_observed(
    m: &WeightMatrix,
    test_set: &[PatternPair],
    observer: &mut dyn Observer,
) -> Result<Evaluation> {
    if test_set.is_empty() {
        return Err(LernmatrixError::EmptyTestSet);
    }

    let mut accuracy = Accuracy::default();
    let mut items = Vec::with_capacity(test_set.len());

    for (index, pair) in test_set.iter().enumerate() {
        if pair.output.dimensions() != m.rows() {
            return Err(LernmatrixError::InputDimension {
                expected: m.rows(),
                got: pair.output.dimensions(),
            });
        }
        let result = recall(m, &pair.input)?;
        let is_correct = result.decision == pair.output;
        accuracy.record(is_correct);

        let item = ItemResult {
            index,
            activation: result.activation,
            decision: result.decision,
            expected: pair.output.clone(),
            is_correct,
        };
        debug!(
            index,
            is_correct,
            tested = accuracy.tested,
            correct = accuracy.correct,
            "recalled pattern"
        );
        observer.on_recall(&item);
        items.push(item);
    }

    info!(
        correct = accuracy.correct,
        tested = accuracy.tested,
        accuracy = %accuracy,
        "evaluation complete"
    );
    Ok(Evaluation { accuracy, items })
}

/// Train on `set` and evaluate on the same set.
pub fn resubstitution(set: &TrainingSet) -> Result<(WeightMatrix, Evaluation)> {
    let m = train(set)?;
    let evaluation = evaluate(&m, set.pairs())?;
    Ok((m, evaluation))
}
