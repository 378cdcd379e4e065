//! Scalar and aggregate function constructors.
//!
//! Pure forwarding: these register no parameters and touch no builder,
//! they only wrap their operand in the corresponding DQL function call.
//! Operands accept anything convertible to [`Expr`], so plain strings work:
//!
//! ```rust
//! use dqlkit::functions::{count, upper};
//!
//! assert_eq!(count("u.id").to_string(), "COUNT(u.id)");
//! assert_eq!(upper("u.name").to_string(), "UPPER(u.name)");
//! ```

use crate::expr::Expr;
use crate::value::ParamValue;

fn unary(name: &str, value: impl Into<Expr>) -> Expr {
    Expr::func(name, [value.into()])
}

/// `COUNT(value)`.
pub fn count(value: impl Into<Expr>) -> Expr {
    unary("COUNT", value)
}

/// `COUNT(DISTINCT value)`.
pub fn count_distinct(value: impl Into<Expr>) -> Expr {
    Expr::Func {
        name: "COUNT".to_string(),
        args: vec![value.into()],
        distinct: true,
    }
}

/// `AVG(value)`.
pub fn avg(value: impl Into<Expr>) -> Expr {
    unary("AVG", value)
}

/// `MIN(value)`.
pub fn min(value: impl Into<Expr>) -> Expr {
    unary("MIN", value)
}

/// `MAX(value)`.
pub fn max(value: impl Into<Expr>) -> Expr {
    unary("MAX", value)
}

/// `UPPER(value)`.
pub fn upper(value: impl Into<Expr>) -> Expr {
    unary("UPPER", value)
}

/// `LOWER(value)`.
pub fn lower(value: impl Into<Expr>) -> Expr {
    unary("LOWER", value)
}

/// `TRIM(value)`.
pub fn trim(value: impl Into<Expr>) -> Expr {
    unary("TRIM", value)
}

/// `LENGTH(value)`.
pub fn length(value: impl Into<Expr>) -> Expr {
    unary("LENGTH", value)
}

/// `ABS(value)`.
pub fn abs(value: impl Into<Expr>) -> Expr {
    unary("ABS", value)
}

/// Render a value as an inline DQL literal expression.
pub fn literal(value: impl Into<ParamValue>) -> Expr {
    Expr::Literal(value.into())
}
