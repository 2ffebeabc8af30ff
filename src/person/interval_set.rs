use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{DateInterval, DaysOff};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval starts on {start} after it ends on {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("interval {interval} is {length} days long, the limit is {max}")]
    TooLong { interval: DateInterval, length: i64, max: u32 },

    #[error("interval {0} is not in the days-off list")]
    NotFound(DateInterval),
}

/// Editing buffer for a resource's days off.
///
/// Entries are kept sorted by start date and never overlap or sit directly
/// next to each other: every insertion coalesces whatever it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSetModel {
    intervals: Vec<DateInterval>,
    max_interval_length: Option<u32>,
}

impl IntervalSetModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_interval_length(max_interval_length: Option<u32>) -> Self {
        Self {
            intervals: Vec::new(),
            max_interval_length,
        }
    }

    /// Builds the model from persisted records.
    ///
    /// Records are merged like any other insertion but are not held to the
    /// length limit, which only applies to new edits.
    pub fn from_days_off(records: &[DaysOff], max_interval_length: Option<u32>) -> Result<Self, IntervalError> {
        let mut model = Self::with_max_interval_length(max_interval_length);
        for record in records {
            let interval = DateInterval::try_from(record)?;
            model.insert_merged(interval);
        }
        debug!(records = records.len(), intervals = model.len(), "loaded days off");
        Ok(model)
    }

    pub fn max_interval_length(&self) -> Option<u32> {
        self.max_interval_length
    }

    pub fn intervals(&self) -> &[DateInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let pos = self.intervals.partition_point(|interval| interval.end() < date);
        self.intervals.get(pos).is_some_and(|interval| interval.contains(date))
    }

    pub fn add(&mut self, interval: DateInterval) -> Result<(), IntervalError> {
        if let Some(max) = self.max_interval_length {
            let length = interval.length();
            if length > i64::from(max) {
                warn!(%interval, length, max, "rejected days-off interval");
                return Err(IntervalError::TooLong { interval, length, max });
            }
        }
        self.insert_merged(interval);
        Ok(())
    }

    pub fn add_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<(), IntervalError> {
        let interval = DateInterval::new(start, end).inspect_err(|e| warn!("{e}"))?;
        self.add(interval)
    }

    /// Removes an entry that matches `interval` exactly.
    pub fn remove(&mut self, interval: &DateInterval) -> Result<(), IntervalError> {
        let pos = self.intervals
            .binary_search(interval)
            .map_err(|_| IntervalError::NotFound(*interval))?;
        self.intervals.remove(pos);
        debug!(%interval, "removed days-off interval");
        Ok(())
    }

    pub fn to_days_off(&self) -> Vec<DaysOff> {
        self.intervals.iter().copied().map(DaysOff::from).collect()
    }

    fn insert_merged(&mut self, interval: DateInterval) {
        let first = self.intervals
            .partition_point(|existing| existing.end() < interval.start() && !existing.touches(&interval));

        let mut merged = interval;
        let mut last = first;
        while last < self.intervals.len() && self.intervals[last].touches(&merged) {
            merged = merged.span(&self.intervals[last]);
            last += 1;
        }

        self.intervals.splice(first..last, std::iter::once(merged));
        debug!(%interval, %merged, absorbed = last - first, "added days-off interval");
    }
}
