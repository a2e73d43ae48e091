//! Fixed-point decimals with two fractional digits.
//!
//! Legend interval arithmetic must be exact: `19.99 + 0.01 == 20.00` has to
//! hold without binary-float rounding. Values are stored as scaled `i64`
//! hundredths and parsed directly from the cell text, accepting either `.`
//! or `,` as the decimal separator.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

/// A decimal number with exactly two fractional digits, stored as hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed2(i64);

/// Why a cell failed to parse as a [`Fixed2`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFixedError {
    /// The text is not a decimal number at all.
    NotNumeric,
    /// The text is numeric but carries more than two decimal places.
    TooManyDecimals { places: usize },
}

impl Display for ParseFixedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseFixedError::NotNumeric => write!(f, "not a number"),
            ParseFixedError::TooManyDecimals { places } => {
                write!(f, "{} decimal places (at most 2 allowed)", places)
            }
        }
    }
}

impl Fixed2 {
    /// The smallest representable step: `0.01`.
    pub const STEP: Fixed2 = Fixed2(1);

    /// Construct from a count of hundredths.
    pub fn from_hundredths(n: i64) -> Self {
        Fixed2(n)
    }

    /// The raw count of hundredths.
    pub fn hundredths(self) -> i64 {
        self.0
    }

    /// Parse a cell value into a fixed-point decimal.
    ///
    /// Accepts an optional leading sign, digits, and an optional fractional
    /// part separated by `.` or `,`. More than two fractional digits is an
    /// error even when the trailing digits are zero: the source data is
    /// required to be written at two decimal places.
    pub fn parse(text: &str) -> Result<Self, ParseFixedError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseFixedError::NotNumeric);
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = digits.splitn(2, |c| c == '.' || c == ',');
        let int_part = parts.next().unwrap_or("");
        let frac_part = parts.next().unwrap_or("");

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseFixedError::NotNumeric);
        }
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseFixedError::NotNumeric);
        }
        if frac_part.len() > 2 {
            return Err(ParseFixedError::TooManyDecimals {
                places: frac_part.len(),
            });
        }

        let int_value: i64 = int_part.parse().map_err(|_| ParseFixedError::NotNumeric)?;
        let frac_value: i64 = if frac_part.is_empty() {
            0
        } else {
            // "5" means 50 hundredths, "05" means 5
            let raw: i64 = frac_part.parse().map_err(|_| ParseFixedError::NotNumeric)?;
            if frac_part.len() == 1 {
                raw * 10
            } else {
                raw
            }
        };

        let magnitude = int_value * 100 + frac_value;
        Ok(Fixed2(if negative { -magnitude } else { magnitude }))
    }
}

impl Add for Fixed2 {
    type Output = Fixed2;

    fn add(self, rhs: Fixed2) -> Fixed2 {
        Fixed2(self.0 + rhs.0)
    }
}

impl Sub for Fixed2 {
    type Output = Fixed2;

    fn sub(self, rhs: Fixed2) -> Fixed2 {
        Fixed2(self.0 - rhs.0)
    }
}

impl Display for Fixed2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
