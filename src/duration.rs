//! Minute-precision durations with the human-readable wire form used by the
//! stats cards ("2 hrs 30 mins", "1,234 hrs", "45 mins").
//!
//! Persisted documents always hold the string form, so `Duration` serializes
//! through `Display`/`FromStr`. Formatting normalizes ("1 hrs 0 mins" comes
//! back as "1 hrs"), but `format` then `parse` always returns the original
//! minute count.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A non-negative amount of coding time, stored as whole minutes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(u64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub fn from_minutes(minutes: u64) -> Self {
        Duration(minutes)
    }

    pub fn minutes(self) -> u64 {
        self.0
    }

    /// Total hours, rounding any started hour up. The score engine compares
    /// cycles at this granularity.
    pub fn hours_ceil(self) -> u64 {
        self.0.div_ceil(60)
    }
}

impl FromStr for Duration {
    type Err = Error;

    /// Accepts whitespace-separated `<value> <unit>` pairs. Units containing
    /// "hr" count as hours, units containing "min" as minutes; anything else
    /// contributes nothing. Values may carry thousands separators.
    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let mut minutes = 0u64;

        for pair in tokens.chunks(2) {
            let (value, unit) = match pair {
                [value, unit] => (*value, *unit),
                _ => {
                    return Err(Error::Format(format!(
                        "dangling token {:?} in {s:?}",
                        pair[0]
                    )))
                }
            };

            let value: u64 = value
                .replace(',', "")
                .parse()
                .map_err(|_| Error::Format(format!("non-numeric value {value:?} in {s:?}")))?;

            if unit.contains("hr") {
                minutes += value * 60;
            } else if unit.contains("min") {
                minutes += value;
            }
        }

        Ok(Duration(minutes))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let mins = self.0 % 60;

        if hours > 0 && mins > 0 {
            write!(f, "{} hrs {} mins", group_thousands(hours), mins)
        } else if hours > 0 {
            write!(f, "{} hrs", group_thousands(hours))
        } else {
            write!(f, "{} mins", mins)
        }
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        Duration(iter.map(|d| d.0).sum())
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);

    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }

    out
}
