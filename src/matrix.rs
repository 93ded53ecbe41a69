//! Dense integer matrices and activation vectors.
//!
//! The weight matrix `M` of a Lernmatrix is a p×n integer matrix: one row
//! per output class, one column per input feature. Update matrices ΔM share
//! the same representation.

use serde::Serialize;
use std::fmt;
use std::ops::Index;

use crate::error::{LernmatrixError, Result};
use crate::vector::BinaryVector;

/// A dense p×n integer matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Flat row-major: data[h * cols + j] = entry (h, j).
    data: Vec<i64>,
}

/// The learned weight matrix `M`.
pub type WeightMatrix = Matrix;

/// A per-pattern update matrix `ΔM_i`.
pub type UpdateMatrix = Matrix;

impl Matrix {
    /// Create a zero matrix with `rows` output rows and `cols` input columns.
    ///
    /// Callers pass dimensions taken from a validated [`TrainingSet`], so
    /// both are at least 1.
    ///
    /// [`TrainingSet`]: crate::pattern::TrainingSet
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build a matrix from row vectors. All rows must share one length.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).ok_or(LernmatrixError::EmptyVector)?;
        if cols == 0 {
            return Err(LernmatrixError::EmptyVector);
        }
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for row in rows {
            if row.len() != cols {
                return Err(LernmatrixError::InputDimension {
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Number of rows (p, output dimension).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (n, input dimension).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at row `h`, column `j`.
    pub fn get(&self, h: usize, j: usize) -> i64 {
        self.data[h * self.cols + j]
    }

    pub(crate) fn set(&mut self, h: usize, j: usize, value: i64) {
        self.data[h * self.cols + j] = value;
    }

    /// Row `h` as a slice.
    pub fn row(&self, h: usize) -> &[i64] {
        &self.data[h * self.cols..(h + 1) * self.cols]
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Rows as owned vectors.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.iter_rows().map(<[i64]>::to_vec).collect()
    }

    /// Fold an update matrix into this one: `M ← M + ΔM`.
    ///
    /// Only the trainer accumulates; callers outside the crate see `M` read-only.
    /// On overflow `M` is left unchanged.
    pub(crate) fn accumulate(&mut self, update: &Matrix) -> Result<()> {
        if update.rows != self.rows {
            return Err(LernmatrixError::InputDimension {
                expected: self.rows,
                got: update.rows,
            });
        }
        if update.cols != self.cols {
            return Err(LernmatrixError::InputDimension {
                expected: self.cols,
                got: update.cols,
            });
        }

        let summed = self
            .data
            .iter()
            .zip(&update.data)
            .map(|(&m, &dm)| m.checked_add(dm))
            .collect::<Option<Vec<i64>>>()
            .ok_or(LernmatrixError::Overflow("weight accumulation"))?;
        self.data = summed;
        Ok(())
    }

    /// Integer matrix-vector product `M · x`.
    pub fn apply(&self, x: &BinaryVector) -> Result<Activation> {
        if x.dimensions() != self.cols {
            return Err(LernmatrixError::InputDimension {
                expected: self.cols,
                got: x.dimensions(),
            });
        }

        let values = self
            .iter_rows()
            .map(|row| {
                row.iter()
                    .zip(x.data())
                    .filter(|(_, xj)| **xj == 1)
                    .try_fold(0i64, |acc, (&m, _)| acc.checked_add(m))
            })
            .collect::<Option<Vec<i64>>>()
            .ok_or(LernmatrixError::Overflow("activation"))?;

        Ok(Activation { values })
    }

    /// Render as a LaTeX `pmatrix*` block with right-aligned columns.
    ///
    /// ```rust
    /// use lernmatrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, -1], vec![0, 2]]).unwrap();
    /// assert_eq!(
    ///     m.to_pmatrix(),
    ///     "\\begin{pmatrix*}[r]\n 1 & -1\\\\\n 0 & 2\\\\\n\\end{pmatrix*}"
    /// );
    /// ```
    pub fn to_pmatrix(&self) -> String {
        let mut lines = vec![r"\begin{pmatrix*}[r]".to_string()];
        for row in self.iter_rows() {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            lines.push(format!(" {}\\\\", cells.join(" & ")));
        }
        lines.push(r"\end{pmatrix*}".to_string());
        lines.join("\n")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for (h, row) in self.iter_rows().enumerate() {
            if h > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
            write!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Raw activation vector `ŷ = M · x`, one entry per output row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Activation {
    values: Vec<i64>,
}

impl Activation {
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Largest activation, `None` for an empty vector.
    pub fn max(&self) -> Option<i64> {
        self.values.iter().copied().max()
    }
}

impl Index<usize> for Activation {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}
