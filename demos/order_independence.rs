//! Order Independence: the learned matrix ignores training order
//!
//! Trains on a handful of seeded permutations of the reference set and
//! checks every run lands on the same weight matrix.
//!
//! Run: cargo run --example order_independence

use lernmatrix::{train, TrainingSet};

fn main() -> lernmatrix::Result<()> {
    let set = TrainingSet::reference()?;
    let baseline = train(&set)?;
    println!("Baseline M:\n{baseline}\n");

    for seed in 0..5u64 {
        let permuted = set.permuted(seed);
        let m = train(&permuted)?;
        let order: Vec<String> = permuted
            .iter()
            .map(|pair| format!("{:?}", pair.output.active_indices()))
            .collect();
        println!(
            "seed {seed}: label order {}  identical = {}",
            order.join(" "),
            m == baseline
        );
    }
    Ok(())
}
