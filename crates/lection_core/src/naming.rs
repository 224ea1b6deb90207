//! Lection table naming conventions.
//!
//! # Responsibility
//! - Build `lection_<N>` table names from lection numbers.
//! - Recover lection numbers from raw catalog table names.
//!
//! # Invariants
//! - Every catalog table is expected to carry a digit run; one that does not
//!   fails the whole extraction instead of being skipped.
//! - Output order equals input order.
//! - Only ASCII digits form a lection number.

use crate::model::entry::LectionNumber;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prefix shared by every lection table.
pub const LECTION_TABLE_PREFIX: &str = "lection_";

static DIGIT_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

pub type NamingResult<T> = Result<T, NamingError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// Table name contains no ASCII digits; aborts the whole listing.
    MissingNumber(String),
    /// Digit run does not fit a `u32` lection number; aborts the whole
    /// listing just like `MissingNumber`.
    NumberOutOfRange(String),
}

impl Display for NamingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingNumber(name) => {
                write!(f, "table name `{name}` carries no lection number")
            }
            Self::NumberOutOfRange(name) => {
                write!(f, "lection number in table name `{name}` is out of range")
            }
        }
    }
}

impl Error for NamingError {}

/// Returns the table name holding the entries of `lection`.
pub fn lection_table_name(lection: LectionNumber) -> String {
    format!("{LECTION_TABLE_PREFIX}{lection}")
}

/// Parses the first ASCII digit run of `name` as a lection number.
pub fn parse_lection_number(name: &str) -> NamingResult<LectionNumber> {
    let digits = DIGIT_RUN_RE
        .find(name)
        .ok_or_else(|| NamingError::MissingNumber(name.to_string()))?;
    digits
        .as_str()
        .parse()
        .map_err(|_| NamingError::NumberOutOfRange(name.to_string()))
}

/// Maps raw catalog table names to lection numbers, preserving order.
pub fn extract_lection_numbers<I, S>(names: I) -> NamingResult<Vec<LectionNumber>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| parse_lection_number(name.as_ref()))
        .collect()
}
