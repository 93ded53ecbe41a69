//! Reference Example: Training, Recall and Resubstitution Accuracy
//!
//! Three associated pairs, five input features, three classes. Prints every
//! training step as LaTeX, then recalls each training input and reports the
//! resubstitution accuracy.
//!
//! Run: RUST_LOG=debug cargo run --example reference_example

use lernmatrix::{
    evaluate_observed, ItemResult, Observer, Trainer, TrainStep, TrainingSet, LEARNING_RATE,
};
use tracing_subscriber::EnvFilter;

// =============================================================================
// Console observer
// =============================================================================

struct Console;

impl Observer for Console {
    fn on_train_step(&mut self, step: &TrainStep) {
        println!("Pattern pair {} (rows {:?})", step.index + 1, step.active_rows);
        println!(
            "M = M + \\Delta M_{{{}}} = {} + {} = {}",
            step.index + 1,
            step.before.to_pmatrix(),
            step.update.to_pmatrix(),
            step.after.to_pmatrix()
        );
        println!();
    }

    fn on_recall(&mut self, item: &ItemResult) {
        let verdict = if item.is_correct { "correct" } else { "wrong" };
        println!(
            "x^{}: y_hat = {:?}  y_omega = {}  y = {}  [{}]",
            item.index + 1,
            item.activation.values(),
            item.decision,
            item.expected,
            verdict
        );
    }
}

fn main() -> lernmatrix::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let set = TrainingSet::reference()?;
    println!("Training set (epsilon = {LEARNING_RATE}):");
    for (i, pair) in set.iter().enumerate() {
        println!("  x^{} = {}  y^{} = {}", i + 1, pair.input, i + 1, pair.output);
    }
    println!();

    let m = Trainer::new().train_observed(&set, &mut Console)?;
    println!("Final M:\n{m}\n");

    let evaluation = evaluate_observed(&m, set.pairs(), &mut Console)?;
    println!();
    println!(
        "Resubstitution: {}/{} = {}",
        evaluation.correct(),
        evaluation.tested(),
        evaluation.accuracy
    );
    Ok(())
}
