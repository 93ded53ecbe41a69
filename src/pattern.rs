//! Pattern pairs and training sets.
//!
//! A training set is an ordered, non-empty sequence of `(x, y)` pairs with a
//! constant input dimension n and output dimension p. Order only affects the
//! sequence of intermediate training snapshots, never the learned matrix.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LernmatrixError, Result};
use crate::vector::BinaryVector;

/// An associated stimulus/response pair `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternPair {
    /// Input pattern `x` (length n).
    pub input: BinaryVector,
    /// Output label `y` (length p), expected to be one-hot.
    pub output: BinaryVector,
}

impl PatternPair {
    pub fn new(input: BinaryVector, output: BinaryVector) -> Self {
        Self { input, output }
    }

    /// Build a pair from raw 0/1 entries.
    pub fn from_raw(input: &[u8], output: &[u8]) -> Result<Self> {
        Ok(Self {
            input: BinaryVector::new(input.to_vec())?,
            output: BinaryVector::new(output.to_vec())?,
        })
    }
}

/// An ordered training set with consistent dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrainingSet {
    pairs: Vec<PatternPair>,
    input_dimensions: usize,
    output_dimensions: usize,
}

impl TrainingSet {
    /// Validate and wrap a list of pairs.
    ///
    /// The first pair fixes n and p; every later pair must match them.
    pub fn new(pairs: Vec<PatternPair>) -> Result<Self> {
        let first = pairs.first().ok_or(LernmatrixError::EmptyTrainingSet)?;
        let input_dimensions = first.input.dimensions();
        let output_dimensions = first.output.dimensions();

        for pair in &pairs {
            check_dimension(input_dimensions, pair.input.dimensions())?;
            check_dimension(output_dimensions, pair.output.dimensions())?;
        }

        Ok(Self {
            pairs,
            input_dimensions,
            output_dimensions,
        })
    }

    /// The three-pair example used throughout the documentation.
    ///
    /// `x¹=(1,0,1,0,1) → y¹=(1,0,0)`, `x²=(1,1,0,0,1) → y²=(0,1,0)`,
    /// `x³=(1,0,1,1,0) → y³=(0,0,1)`.
    pub fn reference() -> Result<Self> {
        Self::new(vec![
            PatternPair::from_raw(&[1, 0, 1, 0, 1], &[1, 0, 0])?,
            PatternPair::from_raw(&[1, 1, 0, 0, 1], &[0, 1, 0])?,
            PatternPair::from_raw(&[1, 0, 1, 1, 0], &[0, 0, 1])?,
        ])
    }

    /// Input dimension n.
    pub fn input_dimensions(&self) -> usize {
        self.input_dimensions
    }

    /// Output dimension p.
    pub fn output_dimensions(&self) -> usize {
        self.output_dimensions
    }

    /// Number of pairs k.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[PatternPair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternPair> {
        self.pairs.iter()
    }

    /// Same pairs in a seeded, reproducible order.
    pub fn permuted(&self, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pairs = self.pairs.clone();
        pairs.shuffle(&mut rng);
        Self {
            pairs,
            input_dimensions: self.input_dimensions,
            output_dimensions: self.output_dimensions,
        }
    }
}

impl<'a> IntoIterator for &'a TrainingSet {
    type Item = &'a PatternPair;
    type IntoIter = std::slice::Iter<'a, PatternPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

fn check_dimension(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(LernmatrixError::InputDimension { expected, got });
    }
    Ok(())
}
