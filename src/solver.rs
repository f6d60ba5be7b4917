//! Exact payment solver for 10, 5 and 2 unit bills.
//!
//! The solver is a closed-form greedy procedure. Parity is settled first by
//! spending at most one 5; the remainder is then even and is covered by tens,
//! pairs of fives standing in for tens, and finally twos. This order never
//! needs backtracking for this particular denomination set.

use crate::bills::{BillSupply, Payment};
use crate::error::{PaymentError, Result};
use log::debug;
use std::cmp::min;

/// Finds bills from `supply` that add up to exactly `amount`.
///
/// # Errors
///
/// - [`PaymentError::InsufficientFunds`] if the supply is worth less than `amount`
/// - [`PaymentError::CannotMakeExact`] if the bills cannot form `amount` exactly
///
/// # Examples
///
/// ```
/// use bill_payer::{solve, BillSupply, Payment};
///
/// let payment = solve(BillSupply::new(10, 10, 10), 27).unwrap();
/// assert_eq!(payment, Payment::new(2, 1, 1));
/// ```
pub fn solve(supply: BillSupply, amount: u64) -> Result<Payment> {
    if amount == 0 {
        return Ok(Payment::ZERO);
    }

    let available = supply.total_value();
    if available < amount as u128 {
        debug!(
            "Supply worth {} cannot cover amount {}",
            available, amount
        );
        return Err(PaymentError::InsufficientFunds { available, amount });
    }

    let mut left = supply;
    let mut remaining = amount;
    let mut payment = Payment::ZERO;

    // An odd amount needs an odd number of fives; one is enough.
    if remaining % 2 != 0 {
        if remaining < 5 || left.fives == 0 {
            debug!("Odd amount {} needs a 5 that is not available", amount);
            return Err(PaymentError::CannotMakeExact { amount });
        }
        remaining -= 5;
        left.fives -= 1;
        payment.fives += 1;
    }

    let tens = min(left.tens, remaining / 10);
    remaining -= tens * 10;
    left.tens -= tens;
    payment.tens += tens;

    let pairs = min(left.fives / 2, remaining / 10);
    remaining -= pairs * 10;
    left.fives -= pairs * 2;
    payment.fives += pairs * 2;

    let twos = remaining / 2;
    if left.twos >= twos {
        remaining -= twos * 2;
        left.twos -= twos;
        payment.twos += twos;
    }

    if remaining > 0 {
        debug!(
            "Amount {} left {} unpaid after greedy allocation",
            amount, remaining
        );
        return Err(PaymentError::CannotMakeExact { amount });
    }

    debug_assert!(payment.value() == amount as u128 && payment.fits_within(&supply));
    debug!("Paid {} as {}", amount, payment);
    Ok(payment)
}

/// Flat form of [`solve`] taking counts of 10, 5 and 2 unit bills.
///
/// Returns the counts used alongside the outcome. Counts are all zero
/// whenever the outcome is an error.
pub fn find_solution(a: u64, b: u64, c: u64, amount: u64) -> (u64, u64, u64, Result<()>) {
    match solve(BillSupply::new(a, b, c), amount) {
        Ok(p) => (p.tens, p.fives, p.twos, Ok(())),
        Err(e) => (0, 0, 0, Err(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pay(a: u64, b: u64, c: u64, amount: u64) -> Result<Payment> {
        solve(BillSupply::new(a, b, c), amount)
    }

    #[test]
    fn test_mixed_bills_odd_amount() {
        assert_eq!(pay(10, 10, 10, 27).unwrap(), Payment::new(2, 1, 1));
    }

    #[test]
    fn test_no_fives_even_amount() {
        assert_eq!(pay(10, 0, 10, 16).unwrap(), Payment::new(1, 0, 3));
    }

    #[test]
    fn test_pairs_of_fives_replace_missing_tens() {
        // Worth exactly 62: one ten, ten fives paired up, one two.
        assert_eq!(pay(1, 10, 1, 62).unwrap(), Payment::new(1, 10, 1));
    }

    #[test]
    fn test_zero_amount_with_empty_supply() {
        assert_eq!(pay(0, 0, 0, 0).unwrap(), Payment::ZERO);
    }

    #[test]
    fn test_insufficient_funds() {
        let err = pay(0, 0, 0, 1).unwrap_err();
        assert!(matches!(
            err,
            PaymentError::InsufficientFunds {
                available: 0,
                amount: 1
            }
        ));
    }

    #[test]
    fn test_odd_amount_below_five() {
        let err = pay(0, 1, 0, 3).unwrap_err();
        assert!(matches!(err, PaymentError::CannotMakeExact { amount: 3 }));
    }

    #[test]
    fn test_odd_amount_without_fives() {
        let err = pay(10, 0, 10, 7).unwrap_err();
        assert!(matches!(err, PaymentError::CannotMakeExact { amount: 7 }));
    }

    #[test]
    fn test_not_enough_twos_for_remainder() {
        // 10 + 10 covers 20 in value but 4 needs two 2s.
        let err = pay(2, 0, 1, 14).unwrap_err();
        assert!(matches!(err, PaymentError::CannotMakeExact { amount: 14 }));
    }

    #[test]
    fn test_single_five_cannot_stand_in_for_ten() {
        let err = pay(0, 1, 8, 20).unwrap_err();
        assert!(matches!(err, PaymentError::CannotMakeExact { amount: 20 }));
    }

    #[test]
    fn test_twos_only() {
        assert_eq!(pay(0, 0, 50, 88).unwrap(), Payment::new(0, 0, 44));
    }

    #[test]
    fn test_large_counts_do_not_overflow() {
        let payment = pay(u64::MAX, u64::MAX, u64::MAX, u64::MAX).unwrap();
        assert_eq!(payment.value(), u64::MAX as u128);
        assert!(payment.fits_within(&BillSupply::new(u64::MAX, u64::MAX, u64::MAX)));
    }

    #[test]
    fn test_find_solution_zeroes_on_failure() {
        let (x, y, z, outcome) = find_solution(0, 1, 0, 3);
        assert_eq!((x, y, z), (0, 0, 0));
        assert!(outcome.is_err());

        let (x, y, z, outcome) = find_solution(10, 10, 10, 27);
        assert_eq!((x, y, z), (2, 1, 1));
        assert!(outcome.is_ok());
    }
}
