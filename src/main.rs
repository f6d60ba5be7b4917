//! Bill Payer CLI
//!
//! Without arguments, runs a few demonstration cases. With a CSV file of
//! `a,b,c,amount` cases, writes one result row per case to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- cases.csv > results.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bill_payer::{solve, BatchRunner, BillSupply, PaymentError, Result};
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

/// Demonstration cases as `(a, b, c, amount)`.
const DEMO_CASES: [(u64, u64, u64, u64); 3] = [
    (10, 10, 10, 27), // 2 x 10 + 1 x 5 + 1 x 2
    (10, 0, 10, 16),  // no fives, even amount
    (1, 10, 1, 62),   // tens run out, fives cover in pairs
];

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => {
            run_demo();
            Ok(())
        }
        2 => run_batch(&args[1]),
        _ => Err(PaymentError::Usage),
    }
}

fn run_demo() {
    for (a, b, c, amount) in DEMO_CASES {
        println!("Input: a={}, b={}, c={}, amount={}", a, b, c, amount);
        match solve(BillSupply::new(a, b, c), amount) {
            Ok(payment) => println!("Output: {} = {}", payment, amount),
            Err(e) => println!("Output: Cannot pay the exact amount, err={}", e),
        }
        println!();
    }
}

fn run_batch(input_path: &str) -> Result<()> {
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let handle = stdout.lock();

    let mut runner = BatchRunner::new();
    let summary = runner.run(reader, handle)?;
    info!(
        "{}: {} solved, {} unpayable, {} skipped, {} ragged",
        input_path, summary.solved, summary.unpayable, summary.skipped, summary.ragged
    );

    Ok(())
}
