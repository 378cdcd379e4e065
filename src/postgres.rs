//! Containment and similarity predicates over PostgreSQL DQL extensions.
//!
//! These wrap a named extension function (registered with the ORM
//! separately) in fixed-form boolean-comparison text: DQL has no bare
//! boolean expressions, so `CONTAINS(l, r)` becomes usable as a predicate
//! only as `CONTAINS(l, r) = TRUE`. Operands are inlined verbatim; no
//! parameters are registered.
//!
//! ```rust
//! use dqlkit::postgres::{contains, ilike};
//!
//! assert_eq!(
//!     contains("u.tags", ":tags").to_string(),
//!     "CONTAINS(u.tags, :tags) = TRUE"
//! );
//! assert_eq!(
//!     ilike("u.name", ":pattern").to_string(),
//!     "ILIKE(u.name, :pattern) = TRUE"
//! );
//! ```

use crate::expr::{CompareOp, Expr};
use crate::value::ParamValue;

fn extension_predicate(
    name: &str,
    left: impl Into<Expr>,
    right: impl Into<Expr>,
    truth: bool,
) -> Expr {
    Expr::comparison(
        Expr::func(name, [left.into(), right.into()]),
        CompareOp::Eq,
        Expr::Literal(ParamValue::Bool(truth)),
    )
}

/// `CONTAINS(left, right) = TRUE`.
pub fn contains(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    extension_predicate("CONTAINS", left, right, true)
}

/// `CONTAINS(left, right) = FALSE`.
pub fn not_contains(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    extension_predicate("CONTAINS", left, right, false)
}

/// `IS_CONTAINED_BY(left, right) = TRUE`.
pub fn is_contained_by(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    extension_predicate("IS_CONTAINED_BY", left, right, true)
}

/// `IS_CONTAINED_BY(left, right) = FALSE`.
pub fn is_not_contained_by(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    extension_predicate("IS_CONTAINED_BY", left, right, false)
}

/// `ILIKE(left, right) = TRUE` — case-insensitive pattern match with both
/// operands inlined.
pub fn ilike(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    extension_predicate("ILIKE", left, right, true)
}

/// `ILIKE(left, right) = FALSE`.
pub fn not_ilike(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    extension_predicate("ILIKE", left, right, false)
}
