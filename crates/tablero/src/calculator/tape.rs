//! The calculation tape: a bounded, append-only log of completed operations.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::{format_value, Operator};

/// One completed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// The operator that was applied
    pub operator: Operator,
    /// Left operand
    pub first: f64,
    /// Right operand
    pub second: f64,
    /// The computed result
    pub result: f64,
    /// When the calculation completed (Unix epoch millis)
    pub timestamp: u64,
}

impl CalculationRecord {
    /// Creates a record stamped with the current time
    #[must_use]
    pub fn new(operator: Operator, first: f64, second: f64, result: f64) -> Self {
        Self {
            operator,
            first,
            second,
            result,
            timestamp: current_timestamp(),
        }
    }

    /// Creates a record with a specific timestamp (for testing)
    #[must_use]
    pub fn with_timestamp(
        operator: Operator,
        first: f64,
        second: f64,
        result: f64,
        timestamp: u64,
    ) -> Self {
        Self {
            operator,
            first,
            second,
            result,
            timestamp,
        }
    }

    /// Returns the record as a display line, e.g. `3 + 4 = 7`
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {} {} = {}",
            format_value(self.first),
            self.operator.symbol(),
            format_value(self.second),
            format_value(self.result)
        )
    }
}

/// Returns the current timestamp in milliseconds
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// The calculator's tape.
///
/// Records are appended as calculations complete and survive everything
/// except a hard reset. A bounded queue caps memory in long-lived sessions;
/// within the cap the tape is strictly append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Tape {
    /// The recorded calculations, oldest first
    entries: VecDeque<CalculationRecord>,
    /// Maximum number of records to keep
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty tape with the default cap
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates an empty tape with a custom cap
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries: max_entries.max(1),
        }
    }

    /// Appends a record, evicting the oldest when full
    pub fn push(&mut self, record: CalculationRecord) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    /// Records a completed calculation stamped with the current time
    pub fn record(&mut self, operator: Operator, first: f64, second: f64, result: f64) {
        self.push(CalculationRecord::new(operator, first, second, result));
    }

    /// Returns the number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of records kept
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Empties the tape
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the records (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.entries.iter()
    }

    /// Returns an iterator over the records (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.entries.iter().rev()
    }

    /// Returns the most recent record
    #[must_use]
    pub fn last(&self) -> Option<&CalculationRecord> {
        self.entries.back()
    }

    /// Returns the oldest record
    #[must_use]
    pub fn first(&self) -> Option<&CalculationRecord> {
        self.entries.front()
    }

    /// Returns the record at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CalculationRecord> {
        self.entries.get(index)
    }

    /// Returns the last n records (newest first)
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&CalculationRecord> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Serializes the tape to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Deserializes a tape from JSON, applying the default cap
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<CalculationRecord> = serde_json::from_str(json)?;
        let mut tape = Self::new();
        for record in entries {
            tape.push(record);
        }
        Ok(tape)
    }

    /// Exports the tape as display lines, oldest first
    #[must_use]
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(CalculationRecord::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
