//! CSV batch runner.
//!
//! Reads payment cases (`a,b,c,amount`) one row at a time, solves each and
//! writes one result row per valid case. Rows that cannot be parsed are
//! logged at warn level and skipped.

use crate::bills::{BillSupply, Payment};
use crate::error::{PaymentError, Result};
use crate::solver::solve;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Raw case record as read from CSV.
#[derive(Debug, Deserialize)]
pub struct CaseRecord {
    /// Number of 10 unit bills
    pub a: u64,

    /// Number of 5 unit bills
    pub b: u64,

    /// Number of 2 unit bills
    pub c: u64,

    /// Amount to pay
    pub amount: u64,
}

impl CaseRecord {
    /// Bills described by this record.
    pub fn supply(&self) -> BillSupply {
        BillSupply::new(self.a, self.b, self.c)
    }
}

/// One output row: the case, the bills used and the outcome.
#[derive(Debug, Serialize)]
struct ResultRecord {
    a: u64,
    b: u64,
    c: u64,
    amount: u64,
    tens: u64,
    fives: u64,
    twos: u64,
    status: &'static str,
}

/// Counts of what happened during a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Cases paid exactly
    pub solved: usize,

    /// Cases the solver rejected
    pub unpayable: usize,

    /// Rows skipped because they could not be parsed
    pub skipped: usize,

    /// Rows whose field count differs from the header
    pub ragged: usize,
}

/// Streams cases from a CSV reader to a CSV writer.
///
/// The summary accumulates across calls to [`BatchRunner::run`].
#[derive(Debug, Default)]
pub struct BatchRunner {
    summary: BatchSummary,
}

impl BatchRunner {
    pub fn new() -> Self {
        BatchRunner::default()
    }

    /// Solves every case in `reader` and writes results to `writer`.
    ///
    /// Output rows keep input order. Failed cases are written with zero
    /// counts and a status naming the failure. Rows with missing or extra
    /// fields are read by header name and counted as ragged.
    pub fn run<R: Read, W: Write>(&mut self, reader: R, writer: W) -> Result<BatchSummary> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut csv_writer = csv::Writer::from_writer(writer);

        for (row_idx, result) in csv_reader.records().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    self.skip(row_num, e.to_string());
                    continue;
                }
            };

            if record.len() != headers.len() {
                debug!(
                    "Row {}: {} fields, header has {}",
                    row_num,
                    record.len(),
                    headers.len()
                );
                self.summary.ragged += 1;
            }

            match record.deserialize::<CaseRecord>(Some(&headers)) {
                Ok(case) => {
                    let row = self.process_case(&case, row_num)?;
                    csv_writer.serialize(row)?;
                }
                Err(e) => self.skip(row_num, e.to_string()),
            }
        }

        csv_writer.flush()?;
        Ok(self.summary)
    }

    fn skip(&mut self, row: usize, message: String) {
        warn!("{}", PaymentError::InvalidRecord { row, message });
        self.summary.skipped += 1;
    }

    fn process_case(&mut self, record: &CaseRecord, row: usize) -> Result<ResultRecord> {
        let (payment, status) = match solve(record.supply(), record.amount) {
            Ok(payment) => {
                self.summary.solved += 1;
                (payment, "ok")
            }
            Err(e) => {
                let status = match e.status() {
                    Some(status) => status,
                    None => return Err(e),
                };
                debug!("Row {}: {}", row, e);
                self.summary.unpayable += 1;
                (Payment::ZERO, status)
            }
        };

        Ok(ResultRecord {
            a: record.a,
            b: record.b,
            c: record.c,
            amount: record.amount,
            tens: payment.tens,
            fives: payment.fives,
            twos: payment.twos,
            status,
        })
    }
}
