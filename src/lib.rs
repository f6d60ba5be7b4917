//! # Bill Payer
//!
//! Pays an exact amount from a limited supply of 10, 5 and 2 unit bills,
//! without giving change.
//!
//! ## Design Principles
//!
//! - **Closed-form greedy**: parity first, then tens, paired fives, twos
//! - **Constant time**: a fixed number of arithmetic steps per call
//! - **Strict invariants**: a payment always sums to the amount and fits the supply
//! - **Zeroed failures**: the flat interface reports `(0, 0, 0)` on every error
//!
//! ## Example
//!
//! ```
//! use bill_payer::{find_solution, solve, BillSupply, PaymentError};
//!
//! let payment = solve(BillSupply::new(10, 0, 10), 16).unwrap();
//! assert_eq!((payment.tens, payment.fives, payment.twos), (1, 0, 3));
//!
//! let (x, y, z, outcome) = find_solution(0, 1, 0, 3);
//! assert_eq!((x, y, z), (0, 0, 0));
//! assert!(matches!(outcome, Err(PaymentError::CannotMakeExact { .. })));
//! ```

pub mod batch;
pub mod bills;
pub mod error;
pub mod solver;

pub use batch::{BatchRunner, BatchSummary, CaseRecord};
pub use bills::{BillSupply, Denomination, Payment};
pub use error::{PaymentError, Result};
pub use solver::{find_solution, solve};
