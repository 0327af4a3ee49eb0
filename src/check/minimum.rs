use std::{fmt, str::FromStr};

use serde_json::Number;

use crate::foundation::error::{CheckError, CheckResult};

/// The threshold every feature's `count` must meet or exceed.
///
/// The argument is parsed once, up front. Integer text is kept exact so that
/// large counts compare without going through `f64`. The original text is kept
/// for diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct Minimum {
    text: String,
    value: Threshold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Threshold {
    Int(i64),
    Float(f64),
}

impl Minimum {
    /// Parse a threshold argument. Rejects empty, non-numeric and non-finite text.
    pub fn parse(text: &str) -> CheckResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CheckError::minimum("value is empty"));
        }

        let value = match trimmed.parse::<i64>() {
            Ok(i) => Threshold::Int(i),
            Err(_) => {
                let f = trimmed
                    .parse::<f64>()
                    .map_err(|_| CheckError::minimum(format!("'{text}' is not a number")))?;
                if !f.is_finite() {
                    return Err(CheckError::minimum(format!("'{text}' is not finite")));
                }
                Threshold::Float(f)
            }
        };

        Ok(Self {
            text: text.to_string(),
            value,
        })
    }

    /// The argument exactly as provided.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether `count` meets the threshold (`count >= minimum`).
    pub fn admits(&self, count: &Number) -> bool {
        match self.value {
            Threshold::Int(min) => {
                if let Some(c) = count.as_i64() {
                    c >= min
                } else if count.is_u64() {
                    // Above i64::MAX.
                    true
                } else {
                    count.as_f64().is_some_and(|c| c >= min as f64)
                }
            }
            Threshold::Float(min) => count.as_f64().is_some_and(|c| c >= min),
        }
    }
}

impl FromStr for Minimum {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Minimum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/check/minimum.rs"]
mod tests;
