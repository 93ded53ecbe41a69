//! Binary pattern vectors.
//!
//! Stimulus vectors `x` and response vectors `y` are dense vectors with
//! entries in {0, 1}. Internally stored as u8.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{LernmatrixError, Result};

/// A dense binary vector with elements in {0, 1}.
///
/// Used both for input patterns (length n) and for one-hot output labels
/// (length p).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct BinaryVector {
    data: Vec<u8>,
}

impl BinaryVector {
    /// Create a vector from raw entries, rejecting anything outside {0, 1}.
    pub fn new(data: Vec<u8>) -> Result<Self> {
        if data.is_empty() {
            return Err(LernmatrixError::EmptyVector);
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| **v > 1) {
            return Err(LernmatrixError::NonBinary { index, value });
        }
        Ok(Self { data })
    }

    /// Create a vector from booleans.
    pub fn from_bits(bits: &[bool]) -> Result<Self> {
        Self::new(bits.iter().map(|&b| u8::from(b)).collect())
    }

    /// All-zero vector of the given dimensionality.
    pub fn zeros(dimensions: usize) -> Result<Self> {
        Self::new(vec![0; dimensions])
    }

    /// All-ones vector of the given dimensionality.
    pub fn ones(dimensions: usize) -> Result<Self> {
        Self::new(vec![1; dimensions])
    }

    /// One-hot label with the single active entry at `active`.
    pub fn one_hot(dimensions: usize, active: usize) -> Result<Self> {
        if active >= dimensions {
            return Err(LernmatrixError::InputDimension {
                expected: dimensions,
                got: active + 1,
            });
        }
        let mut data = vec![0; dimensions];
        data[active] = 1;
        Self::new(data)
    }

    /// Built from already-thresholded entries.
    pub(crate) fn from_mask(mask: impl Iterator<Item = bool>) -> Self {
        Self {
            data: mask.map(u8::from).collect(),
        }
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    /// Get the raw data as a slice.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether entry `index` is 1.
    pub fn is_active(&self, index: usize) -> bool {
        self.data[index] == 1
    }

    /// Indices of the 1-valued entries, ascending.
    pub fn active_indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 1)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count 1-valued entries.
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    /// Exactly one active entry.
    pub fn is_one_hot(&self) -> bool {
        self.count_ones() == 1
    }
}

impl Index<usize> for BinaryVector {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl TryFrom<Vec<u8>> for BinaryVector {
    type Error = LernmatrixError;

    fn try_from(data: Vec<u8>) -> Result<Self> {
        Self::new(data)
    }
}

impl From<BinaryVector> for Vec<u8> {
    fn from(vector: BinaryVector) -> Self {
        vector.data
    }
}

impl std::fmt::Display for BinaryVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self.data.iter().map(|v| v.to_string()).collect();
        write!(f, "({})", entries.join(", "))
    }
}
