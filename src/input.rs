// 🛂 Input Boundary - strict value types for raw form input
// Raw strings from forms or JSON are coerced here before reaching the engine

use crate::error::{NumerologyError, Result};
use crate::letters::normalize_name;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// BIRTH DATE
// ============================================================================

/// A validated calendar date in the year range 1..=9999.
///
/// Always renders as `YYYY-MM-DD`, so its digit string is exactly 8 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Parse a `YYYY-MM-DD` string, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NumerologyError::EmptyDate);
        }

        let date = NaiveDate::parse_from_str(trimmed, Self::FORMAT)
            .map_err(|_| NumerologyError::invalid_date(input))?;

        Self::from_date(date).ok_or_else(|| NumerologyError::invalid_date(input))
    }

    /// Wrap a date, rejecting years that would not render as four digits.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        (1..=9999).contains(&date.year()).then_some(BirthDate(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The 8 digits of year, month and day, separators removed.
    pub fn digits(&self) -> Vec<u32> {
        self.0
            .format("%Y%m%d")
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        BirthDate::parse(s)
    }
}

impl TryFrom<String> for BirthDate {
    type Error = NumerologyError;

    fn try_from(value: String) -> Result<Self> {
        BirthDate::parse(&value)
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> Self {
        date.to_string()
    }
}

// ============================================================================
// FULL NAME
// ============================================================================

/// A name that contains at least one letter a-z.
///
/// The original spelling is kept for display; calculators normalize it again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullName(String);

impl FullName {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if normalize_name(trimmed).is_empty() {
            return Err(NumerologyError::NoLetters {
                input: input.to_string(),
            });
        }
        Ok(FullName(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn normalized(&self) -> String {
        normalize_name(&self.0)
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FullName {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        FullName::parse(s)
    }
}

impl TryFrom<String> for FullName {
    type Error = NumerologyError;

    fn try_from(value: String) -> Result<Self> {
        FullName::parse(&value)
    }
}

impl From<FullName> for String {
    fn from(name: FullName) -> Self {
        name.0
    }
}
