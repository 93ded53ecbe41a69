//! # Lernmatrix: one-shot Hebbian associative memory
//!
//! The Lernmatrix pairs binary stimulus vectors with one-hot response
//! vectors through a signed integer weight matrix.
//!
//! ## Quick Start
//!
//! ```rust
//! use lernmatrix::{evaluate, recall, train, TrainingSet};
//!
//! let set = TrainingSet::reference()?;
//!
//! // Training: M = ΔM_1 + ΔM_2 + ΔM_3
//! let m = train(&set)?;
//! println!("{m}");
//!
//! // Recall: winner-take-all over ŷ = M · x
//! let r = recall(&m, &set.pairs()[0].input)?;
//! assert_eq!(r.activation.values(), &[3, 1, 1]);
//! assert_eq!(r.decision.data(), &[1, 0, 0]);
//!
//! // Resubstitution accuracy
//! let evaluation = evaluate(&m, set.pairs())?;
//! assert_eq!(evaluation.accuracy.to_string(), "100.00%");
//! # Ok::<(), lernmatrix::LernmatrixError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Training**: each pair adds `+ε` (feature present) or `-ε` (feature
//!   absent) to the active row of its label
//! - **Recall**: every row reaching `max(M · x)` fires; ties are not broken
//! - **Evaluation**: exact match of decision and label, counted per pattern
//! - **Observers**: read-only snapshots of every training step and recall

pub mod config;
pub mod error;
pub mod evaluate;
pub mod matrix;
pub mod memory;
pub mod observer;
pub mod pattern;
pub mod recall;
pub mod trainer;
pub mod vector;

// Re-exports for convenience
pub use config::LernmatrixConfig;
pub use error::{LernmatrixError, Result};
pub use evaluate::{evaluate, evaluate_observed, resubstitution, Accuracy, Evaluation, ItemResult};
pub use matrix::{Activation, Matrix, UpdateMatrix, WeightMatrix};
pub use memory::Lernmatrix;
pub use observer::{NoopObserver, Observer, RecordingObserver, TrainStep};
pub use pattern::{PatternPair, TrainingSet};
pub use recall::{recall, winner_take_all, Recall};
pub use trainer::{train, Trainer, LEARNING_RATE};
pub use vector::BinaryVector;
