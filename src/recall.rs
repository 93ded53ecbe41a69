//! Recaller: winner-take-all retrieval.
//!
//! Recall computes `ŷ = M · x`, then marks every output row whose activation
//! reaches `max(ŷ)`. Ties are left unresolved: with two equal maxima the
//! decision vector carries two 1-entries.

use serde::Serialize;

use crate::error::Result;
use crate::matrix::{Activation, WeightMatrix};
use crate::vector::BinaryVector;

/// Result of recalling one input pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recall {
    /// Raw activation `ŷ`.
    pub activation: Activation,
    /// Thresholded decision `y_ω`.
    pub decision: BinaryVector,
}

impl Recall {
    /// Indices of the winning rows.
    pub fn winners(&self) -> Vec<usize> {
        self.decision.active_indices()
    }

    /// More than one row reached the maximum.
    pub fn is_tied(&self) -> bool {
        self.decision.count_ones() > 1
    }
}

/// Recall the label associated with `x`. `M` is never modified.
pub fn recall(m: &WeightMatrix, x: &BinaryVector) -> Result<Recall> {
    let activation = m.apply(x)?;
    let decision = winner_take_all(&activation);
    Ok(Recall {
        activation,
        decision,
    })
}

/// `y_ω[h] = 1` iff `ŷ[h] = max(ŷ)`.
pub fn winner_take_all(activation: &Activation) -> BinaryVector {
    let max = activation.max().unwrap_or(0);
    BinaryVector::from_mask(activation.values().iter().map(|&v| v == max))
}
