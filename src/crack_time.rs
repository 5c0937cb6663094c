//! Brute-force crack time estimate.
//!
//! Model: an attacker who knows which character
//! classes the password uses tries `GUESSES_PER_SECOND` candidates per second
//! and, on average, hits the password after searching half the keyspace.
//! The result is a heuristic for display, not a security metric.

use std::fmt;

use crate::sections::Criterion;

/// Assumed attacker throughput.
pub const GUESSES_PER_SECOND: f64 = 1e9;

/// On average the password is found after half the keyspace.
const AVERAGE_CASE_DIVISOR: f64 = 2.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
/// Above this, years are shown in scientific notation.
const FIXED_YEARS_LIMIT: f64 = 1_000.0 * YEAR;

/// Sums the alphabet sizes of the criteria a password satisfied.
pub fn keyspace_size<'a>(passed: impl IntoIterator<Item = &'a Criterion>) -> u32 {
    passed.into_iter().map(|c| c.pool_size).sum()
}

/// Estimates the time to crack a password of `length` characters drawn from
/// an alphabet of `keyspace` characters.
///
/// Returns [`CrackTime::Instantly`] for an empty keyspace. When
/// `keyspace ^ length` overflows `f64` the estimate is carried out in
/// logarithm space, so arbitrarily long passwords still get a finite answer.
pub fn estimate(keyspace: u32, length: usize) -> CrackTime {
    if keyspace == 0 {
        return CrackTime::Instantly;
    }

    let divisor = AVERAGE_CASE_DIVISOR * GUESSES_PER_SECOND;
    let combinations = f64::from(keyspace).powf(length as f64);

    if combinations.is_finite() {
        CrackTime::from_seconds(combinations / divisor)
    } else {
        let log10_seconds = length as f64 * f64::from(keyspace).log10() - divisor.log10();
        CrackTime::from_log10_seconds(log10_seconds)
    }
}

/// Unit of a [`CrackTime::Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Year,
}

impl TimeUnit {
    pub fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Hour => HOUR,
            TimeUnit::Day => DAY,
            TimeUnit::Year => YEAR,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Year => "year",
        }
    }
}

/// Estimated time to crack, bucketed into the coarsest fitting unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrackTime {
    /// No recognised character class, nothing to search.
    Instantly,
    UnderOneSecond,
    /// `value` is expressed in `unit`s and rounded only when displayed.
    Span { value: f64, unit: TimeUnit },
    /// `mantissa`e`exponent` years, for a thousand years and beyond.
    /// Displayed with a signed two-digit exponent, e.g. `5e+04 years`.
    Scientific { mantissa: u8, exponent: i32 },
}

impl CrackTime {
    pub fn from_seconds(seconds: f64) -> Self {
        let unit = if !(seconds >= 1.0) {
            return CrackTime::UnderOneSecond;
        } else if seconds < MINUTE {
            TimeUnit::Second
        } else if seconds < HOUR {
            TimeUnit::Minute
        } else if seconds < DAY {
            TimeUnit::Hour
        } else if seconds < YEAR {
            TimeUnit::Day
        } else if seconds < FIXED_YEARS_LIMIT {
            TimeUnit::Year
        } else {
            return Self::scientific_years(seconds / YEAR);
        };

        CrackTime::Span {
            value: seconds / unit.seconds(),
            unit,
        }
    }

    fn from_log10_seconds(log10_seconds: f64) -> Self {
        if log10_seconds < FIXED_YEARS_LIMIT.log10() {
            Self::from_seconds(10f64.powf(log10_seconds))
        } else {
            Self::scientific_log10_years(log10_seconds - YEAR.log10())
        }
    }

    /// One-digit mantissa, rounded half to even on the value itself.
    fn scientific_years(years: f64) -> Self {
        let exponent = years.log10().floor() as i32;
        Self::normalized(years / 10f64.powi(exponent), exponent)
    }

    /// Same as [`Self::scientific_years`] for values past `f64::MAX`.
    fn scientific_log10_years(log10_years: f64) -> Self {
        let exponent = log10_years.floor();
        Self::normalized(10f64.powf(log10_years - exponent), exponent as i32)
    }

    /// `raw` may land just outside `1..10` when `log10` is off by an ulp.
    fn normalized(raw: f64, exponent: i32) -> Self {
        let (raw, exponent) = if raw >= 10.0 {
            (raw / 10.0, exponent + 1)
        } else if raw < 1.0 {
            (raw * 10.0, exponent - 1)
        } else {
            (raw, exponent)
        };
        let mantissa = raw.round_ties_even();
        let (mantissa, exponent) = if mantissa >= 10.0 {
            (1.0, exponent + 1)
        } else {
            (mantissa, exponent)
        };
        CrackTime::Scientific {
            mantissa: mantissa as u8,
            exponent,
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::Instantly => f.write_str("Instantly"),
            CrackTime::UnderOneSecond => f.write_str("< 1 second"),
            CrackTime::Span { value, unit } => write!(f, "{value:.0} {}s", unit.name()),
            CrackTime::Scientific { mantissa, exponent } => {
                let sign = if *exponent < 0 { '-' } else { '+' };
                write!(f, "{mantissa}e{sign}{:02} years", exponent.abs())
            }
        }
    }
}
