//! Bill denominations, supplies and payments.
//!
//! All values here are plain `Copy` data. Monetary totals are widened to
//! `u128` so `10 * tens + 5 * fives + 2 * twos` never overflows for `u64` counts.

use std::fmt;

/// One of the three fixed bill values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    Ten,
    Five,
    Two,
}

impl Denomination {
    /// Denominations in the order the solver spends them.
    pub const ALL: [Denomination; 3] = [Denomination::Ten, Denomination::Five, Denomination::Two];

    /// Face value of the bill.
    pub fn value(self) -> u64 {
        match self {
            Denomination::Ten => 10,
            Denomination::Five => 5,
            Denomination::Two => 2,
        }
    }
}

/// Bills available to pay with.
///
/// Field order follows the `(a, b, c)` convention: tens, fives, twos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BillSupply {
    pub tens: u64,
    pub fives: u64,
    pub twos: u64,
}

impl BillSupply {
    /// Creates a supply from counts of 10, 5 and 2 unit bills.
    pub fn new(tens: u64, fives: u64, twos: u64) -> Self {
        BillSupply { tens, fives, twos }
    }

    /// Number of bills of the given denomination.
    pub fn count(&self, denomination: Denomination) -> u64 {
        match denomination {
            Denomination::Ten => self.tens,
            Denomination::Five => self.fives,
            Denomination::Two => self.twos,
        }
    }

    /// Combined value of every bill in the supply.
    pub fn total_value(&self) -> u128 {
        weighted_sum(self.tens, self.fives, self.twos)
    }
}

/// Bills handed over for one payment.
///
/// # Invariants
///
/// A `Payment` returned by the solver always has `value() == amount` and
/// fits within the supply it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Payment {
    pub tens: u64,
    pub fives: u64,
    pub twos: u64,
}

impl Payment {
    /// The empty payment, also reported for every failed solve.
    pub const ZERO: Self = Payment {
        tens: 0,
        fives: 0,
        twos: 0,
    };

    pub fn new(tens: u64, fives: u64, twos: u64) -> Self {
        Payment { tens, fives, twos }
    }

    /// Number of bills of the given denomination.
    pub fn count(&self, denomination: Denomination) -> u64 {
        match denomination {
            Denomination::Ten => self.tens,
            Denomination::Five => self.fives,
            Denomination::Two => self.twos,
        }
    }

    /// Value paid.
    pub fn value(&self) -> u128 {
        weighted_sum(self.tens, self.fives, self.twos)
    }

    /// Returns `true` if no denomination uses more bills than `supply` holds.
    pub fn fits_within(&self, supply: &BillSupply) -> bool {
        Denomination::ALL
            .iter()
            .all(|&d| self.count(d) <= supply.count(d))
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x 10 + {} x 5 + {} x 2",
            self.tens, self.fives, self.twos
        )
    }
}

fn weighted_sum(tens: u64, fives: u64, twos: u64) -> u128 {
    Denomination::Ten.value() as u128 * tens as u128
        + Denomination::Five.value() as u128 * fives as u128
        + Denomination::Two.value() as u128 * twos as u128
}
