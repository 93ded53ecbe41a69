//! Observers for intermediate model states.
//!
//! Training and evaluation emit read-only snapshots: one [`TrainStep`] per
//! folded pattern pair and one [`ItemResult`] per recalled test pattern.
//! A presentation layer subscribes by implementing [`Observer`]; it only
//! ever sees shared references, so it cannot alter the model.

use serde::Serialize;

use crate::evaluate::ItemResult;
use crate::matrix::{UpdateMatrix, WeightMatrix};

/// Snapshot of one training step `M ← M + ΔM_i`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrainStep {
    /// Zero-based position of the pair in the training set.
    pub index: usize,
    /// Output rows that received the update.
    pub active_rows: Vec<usize>,
    /// The update matrix `ΔM_i`.
    pub update: UpdateMatrix,
    /// `M` before the update.
    pub before: WeightMatrix,
    /// `M` after the update.
    pub after: WeightMatrix,
}

/// Receives snapshots from training and evaluation.
///
/// Both hooks default to no-ops, so implementors override only what they need.
pub trait Observer {
    fn on_train_step(&mut self, _step: &TrainStep) {}

    fn on_recall(&mut self, _item: &ItemResult) {}
}

/// Ignores every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Keeps every snapshot, in emission order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RecordingObserver {
    pub steps: Vec<TrainStep>,
    pub items: Vec<ItemResult>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for RecordingObserver {
    fn on_train_step(&mut self, step: &TrainStep) {
        self.steps.push(step.clone());
    }

    fn on_recall(&mut self, item: &ItemResult) {
        self.items.push(item.clone());
    }
}
