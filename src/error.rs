//! Error types for the bill payer.

use thiserror::Error;

/// Result type alias for solver and batch operations
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Errors that can occur while paying an amount or running a batch.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The whole supply is worth less than the amount
    #[error("not enough money: supply is worth {available}, amount is {amount}")]
    InsufficientFunds { available: u128, amount: u64 },

    /// The supply is worth enough but its bills cannot add up to the amount
    #[error("can not pay {amount} exactly with the available bills")]
    CannotMakeExact { amount: u64 },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A case row that parsed but cannot be used
    #[error("Invalid case at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Too many command line arguments
    #[error("Unexpected arguments. Usage: bill-payer [cases.csv]")]
    Usage,
}

impl PaymentError {
    /// Batch status tag for the two failures the solver reports.
    ///
    /// Returns `None` for I/O, CSV and usage errors, which abort a run
    /// instead of producing a result row.
    pub fn status(&self) -> Option<&'static str> {
        match self {
            PaymentError::InsufficientFunds { .. } => Some("insufficient_funds"),
            PaymentError::CannotMakeExact { .. } => Some("cannot_make_exact"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags() {
        let insufficient = PaymentError::InsufficientFunds {
            available: 0,
            amount: 1,
        };
        assert_eq!(insufficient.status(), Some("insufficient_funds"));
        assert_eq!(
            PaymentError::CannotMakeExact { amount: 3 }.status(),
            Some("cannot_make_exact")
        );
    }

    #[test]
    fn test_non_solver_errors_have_no_status() {
        assert_eq!(PaymentError::Usage.status(), None);
        let invalid = PaymentError::InvalidRecord {
            row: 2,
            message: "bad".to_string(),
        };
        assert_eq!(invalid.status(), None);
    }

    #[test]
    fn test_messages() {
        let err = PaymentError::InsufficientFunds {
            available: 62,
            amount: 70,
        };
        assert_eq!(
            err.to_string(),
            "not enough money: supply is worth 62, amount is 70"
        );
        assert_eq!(
            PaymentError::CannotMakeExact { amount: 3 }.to_string(),
            "can not pay 3 exactly with the available bills"
        );
    }
}
