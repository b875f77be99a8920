//! Gregory-Leibniz series estimator
//!
//! π = 4/1 - 4/3 + 4/5 - 4/7 + ...
//!
//! The partial sum is computed naively in a single `f64` accumulator. There is
//! no acceleration and no precision control beyond native doubles.

use std::fmt;
use std::str::FromStr;

/// Number of series terms to sum.
///
/// Any `i64` is accepted; zero and negative counts sum no terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IterationCount(pub i64);

impl IterationCount {
    pub fn get(self) -> i64 {
        self.0
    }

    /// Sum the series for this many terms.
    pub fn estimate(self) -> PiEstimate {
        PiEstimate(estimate(self.0))
    }
}

impl FromStr for IterationCount {
    type Err = ParseIterationsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(IterationCount)
            .map_err(|_| ParseIterationsError {
                input: s.to_string(),
            })
    }
}

/// Raised when the textual iteration count is not a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a base-10 integer: {input:?}")]
pub struct ParseIterationsError {
    pub input: String,
}

/// Partial sum of the series. Displays with exactly 10 fractional digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiEstimate(pub f64);

impl fmt::Display for PiEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.10}", self.0)
    }
}

/// Sum the first `iterations` terms of the series.
///
/// Returns `0.0` when `iterations <= 0`. Runs in time linear in `iterations`.
pub fn estimate(iterations: i64) -> f64 {
    let mut result = 0.0_f64;
    let mut sign = 1.0_f64;
    let mut denominator = 1.0_f64;

    for _ in 0..iterations.max(0) {
        result += sign * 4.0 / denominator;
        denominator += 2.0;
        sign = -sign;
    }

    result
}

/// Magnitude of the term at `index`, i.e. `4 / (2 * index + 1)`.
///
/// Also an upper bound on `|π - estimate(index)|`.
pub fn term_magnitude(index: u64) -> f64 {
    4.0 / (2.0 * index as f64 + 1.0)
}
