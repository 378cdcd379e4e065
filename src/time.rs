//! Time-delta expressions between two timestamps.
//!
//! Emitted as the vendor `TIMESTAMPDIFF` function. Each operand is either a
//! raw expression reference (a column, a parameter placeholder) or a
//! structured timestamp, which renders as a quoted `Y-m-d H:i:s` literal.
//!
//! Directionality matters: `*_from_a_to_b` computes forward elapsed time
//! from A to B, while `*_a_minus_b` computes the reverse — the same
//! primitive with its arguments swapped.
//!
//! ```rust
//! use dqlkit::time::{seconds_from_a_to_b, seconds_a_minus_b};
//!
//! let fwd = seconds_from_a_to_b("e.started_at", "e.finished_at");
//! assert_eq!(
//!     fwd.to_string(),
//!     "TIMESTAMPDIFF(SECOND, e.started_at, e.finished_at)"
//! );
//!
//! let rev = seconds_a_minus_b("e.started_at", "e.finished_at");
//! assert_eq!(
//!     rev.to_string(),
//!     "TIMESTAMPDIFF(SECOND, e.finished_at, e.started_at)"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DqlError;
use crate::expr::Expr;
use crate::value::ParamValue;

/// Unit of a time difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl DiffUnit {
    /// Get the DQL keyword for this unit.
    pub fn as_dql(&self) -> &'static str {
        match self {
            Self::Second => "SECOND",
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Quarter => "QUARTER",
            Self::Year => "YEAR",
        }
    }
}

impl fmt::Display for DiffUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_dql())
    }
}

impl FromStr for DiffUnit {
    type Err = DqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SECOND" => Ok(Self::Second),
            "MINUTE" => Ok(Self::Minute),
            "HOUR" => Ok(Self::Hour),
            "DAY" => Ok(Self::Day),
            "WEEK" => Ok(Self::Week),
            "MONTH" => Ok(Self::Month),
            "QUARTER" => Ok(Self::Quarter),
            "YEAR" => Ok(Self::Year),
            other => Err(DqlError::UnknownDiffUnit(other.to_string())),
        }
    }
}

/// A timestamp operand: a raw expression reference or a literal moment.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeRef {
    /// Raw expression text, passed through verbatim.
    Expr(String),
    /// Literal timestamp, rendered quoted in `Y-m-d H:i:s` form.
    At(NaiveDateTime),
}

impl TimeRef {
    fn into_expr(self) -> Expr {
        match self {
            Self::Expr(s) => Expr::Raw(s),
            Self::At(t) => Expr::Literal(ParamValue::DateTime(t)),
        }
    }
}

impl From<&str> for TimeRef {
    fn from(s: &str) -> Self {
        Self::Expr(s.to_string())
    }
}

impl From<String> for TimeRef {
    fn from(s: String) -> Self {
        Self::Expr(s)
    }
}

impl From<NaiveDateTime> for TimeRef {
    fn from(t: NaiveDateTime) -> Self {
        Self::At(t)
    }
}

impl From<DateTime<Utc>> for TimeRef {
    fn from(t: DateTime<Utc>) -> Self {
        Self::At(t.naive_utc())
    }
}

impl From<Expr> for TimeRef {
    fn from(e: Expr) -> Self {
        Self::Expr(e.to_string())
    }
}

/// Elapsed `unit`s from moment `a` to moment `b`.
pub fn from_a_to_b(unit: DiffUnit, a: impl Into<TimeRef>, b: impl Into<TimeRef>) -> Expr {
    Expr::func(
        "TIMESTAMPDIFF",
        [
            Expr::raw(unit.as_dql()),
            a.into().into_expr(),
            b.into().into_expr(),
        ],
    )
}

/// Moment `a` minus moment `b`, in `unit`s — [`from_a_to_b`] with the
/// arguments swapped.
pub fn a_minus_b(unit: DiffUnit, a: impl Into<TimeRef>, b: impl Into<TimeRef>) -> Expr {
    from_a_to_b(unit, b, a)
}

macro_rules! diff_helpers {
    ($(($unit:ident, $fwd:ident, $rev:ident)),+ $(,)?) => {
        $(
            /// Forward elapsed time from `a` to `b`, in this unit.
            pub fn $fwd(a: impl Into<TimeRef>, b: impl Into<TimeRef>) -> Expr {
                from_a_to_b(DiffUnit::$unit, a, b)
            }

            /// `a` minus `b`, in this unit.
            pub fn $rev(a: impl Into<TimeRef>, b: impl Into<TimeRef>) -> Expr {
                a_minus_b(DiffUnit::$unit, a, b)
            }
        )+
    };
}

diff_helpers!(
    (Second, seconds_from_a_to_b, seconds_a_minus_b),
    (Minute, minutes_from_a_to_b, minutes_a_minus_b),
    (Hour, hours_from_a_to_b, hours_a_minus_b),
    (Day, days_from_a_to_b, days_a_minus_b),
    (Week, weeks_from_a_to_b, weeks_a_minus_b),
    (Month, months_from_a_to_b, months_a_minus_b),
    (Quarter, quarters_from_a_to_b, quarters_a_minus_b),
    (Year, years_from_a_to_b, years_a_minus_b),
);
