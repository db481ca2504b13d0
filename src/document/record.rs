//! One data line of an SJON document
//!
//! A record keeps the raw, untrimmed values of its line. Typed getters trim
//! and convert on demand; they know nothing about the schema, so callers that
//! need type guarantees check conformance first.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::errors::{RecordError, RecordResult};
use crate::schema::{self, DATE_FORMAT};
use crate::syntax;

/// Ordered raw values of one data line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    /// Parses the values between the first `{` and the first `}` of a line.
    pub fn parse(raw_line: &str) -> RecordResult<Self> {
        let body = syntax::record_body(raw_line).ok_or_else(|| RecordError::MalformedBoundary {
            line: raw_line.to_string(),
        })?;

        Ok(Self {
            values: syntax::split_values(body)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    /// Trimmed value at `index`, no conversion
    pub fn get_string(&self, index: usize) -> RecordResult<&str> {
        self.values
            .get(index)
            .map(|value| syntax::trim_value(value))
            .ok_or(RecordError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
    }

    /// Value at `index` as a base-10 integer
    pub fn get_int(&self, index: usize) -> RecordResult<i64> {
        let value = self.get_string(index)?;
        value.parse().map_err(|source| RecordError::InvalidInteger {
            index,
            value: value.to_string(),
            source,
        })
    }

    /// Value at `index` as a floating point number.
    ///
    /// Accepts the same spellings as a `Double` column.
    pub fn get_double(&self, index: usize) -> RecordResult<f64> {
        let value = self.get_string(index)?;
        schema::parse_double(value).ok_or_else(|| RecordError::InvalidDouble {
            index,
            value: value.to_string(),
        })
    }

    /// Value at `index` as a `YYYY-MM-DD` calendar date
    pub fn get_date(&self, index: usize) -> RecordResult<NaiveDate> {
        let value = self.get_string(index)?;
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| RecordError::InvalidDate {
            index,
            value: value.to_string(),
            source,
        })
    }

    /// All values, untrimmed
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values in the record
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
