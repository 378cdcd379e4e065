//! Typed DQL expression fragments.
//!
//! Every helper in this crate returns an [`Expr`]: a composable predicate
//! or value-producing fragment rendered to DQL text via `Display`. Raw
//! hand-authored fragments convert with `From<&str>`, so callers can mix
//! both forms uniformly when assembling clauses.
//!
//! ```rust
//! use dqlkit::{Cond, Expr};
//!
//! let e = Expr::and([
//!     Cond::from("u.active = TRUE"),
//!     Cond::from(Expr::is_null("u.deleted_at")),
//! ]);
//! assert_eq!(e.to_string(), "u.active = TRUE AND u.deleted_at IS NULL");
//! ```

use std::fmt;

use crate::value::ParamValue;

/// DQL has no NULL literal, so this is a hacky replacement.
pub const NULL: &str = "CASE WHEN 1=1 THEN :null ELSE :null END";

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<>`
    Neq,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `INSTANCE OF`
    InstanceOf,
}

impl CompareOp {
    /// Get the DQL token for this operator.
    pub fn as_dql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "<>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::InstanceOf => "INSTANCE OF",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_dql())
    }
}

/// A composable DQL expression fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column or alias reference (`u.name`).
    Path(String),
    /// Parameter placeholder, rendered as `:name`.
    Param(String),
    /// Inline literal value.
    Literal(ParamValue),
    /// Hand-authored raw fragment, passed through verbatim.
    Raw(String),
    /// Binary comparison (`left op right`).
    Comparison {
        left: Box<Expr>,
        op: CompareOp,
        right: Box<Expr>,
    },
    /// Range check (`expr BETWEEN min AND max`).
    Between {
        expr: Box<Expr>,
        min: Box<Expr>,
        max: Box<Expr>,
    },
    /// Membership check (`expr IN (...)` / `expr NOT IN (...)`).
    In {
        expr: Box<Expr>,
        values: Vec<Expr>,
        negated: bool,
    },
    /// Null check (`expr IS NULL` / `expr IS NOT NULL`).
    Null { expr: Box<Expr>, negated: bool },
    /// Pattern match (`expr LIKE pattern` / `expr NOT LIKE pattern`).
    Like {
        expr: Box<Expr>,
        pattern: Box<Expr>,
        negated: bool,
    },
    /// Conjunction of zero or more expressions.
    And(Vec<Expr>),
    /// Disjunction of zero or more expressions.
    Or(Vec<Expr>),
    /// Logical negation, rendered as `NOT(expr)`.
    Not(Box<Expr>),
    /// Function application (`NAME(args)`), aggregates included.
    Func {
        name: String,
        args: Vec<Expr>,
        distinct: bool,
    },
    /// Subquery existence over the subquery's rendered text.
    Exists { dql: String },
}

impl Expr {
    /// Column or alias reference.
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Parameter placeholder for `name` (without the leading colon).
    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(name.into())
    }

    /// Inline literal value.
    pub fn literal(value: impl Into<ParamValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Raw fragment, passed through verbatim.
    pub fn raw(fragment: impl Into<String>) -> Self {
        Self::Raw(fragment.into())
    }

    /// Binary comparison between two sub-expressions.
    pub fn comparison(left: impl Into<Expr>, op: CompareOp, right: impl Into<Expr>) -> Self {
        Self::Comparison {
            left: Box::new(left.into()),
            op,
            right: Box::new(right.into()),
        }
    }

    /// `IS NULL` check on a path.
    pub fn is_null(path: impl Into<String>) -> Self {
        Self::Null {
            expr: Box::new(Self::Path(path.into())),
            negated: false,
        }
    }

    /// `IS NOT NULL` check on a path.
    pub fn is_not_null(path: impl Into<String>) -> Self {
        Self::Null {
            expr: Box::new(Self::Path(path.into())),
            negated: true,
        }
    }

    /// Conjunction over a nested condition list.
    ///
    /// The list is normalized first: arbitrarily nested sub-lists flatten
    /// in order and [`Cond::None`] entries are dropped.
    pub fn and(conds: impl IntoIterator<Item = Cond>) -> Self {
        Self::And(normalize(conds))
    }

    /// Disjunction over a nested condition list, normalized like [`Expr::and`].
    pub fn or(conds: impl IntoIterator<Item = Cond>) -> Self {
        Self::Or(normalize(conds))
    }

    /// Logical negation.
    pub fn not(expr: impl Into<Expr>) -> Self {
        Self::Not(Box::new(expr.into()))
    }

    /// Function application.
    pub fn func(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::Func {
            name: name.into(),
            args: args.into_iter().collect(),
            distinct: false,
        }
    }

    /// Number of direct members in a conjunction/disjunction; 1 otherwise.
    pub fn count(&self) -> usize {
        match self {
            Self::And(parts) | Self::Or(parts) => parts.len(),
            _ => 1,
        }
    }

    /// Whether this expression renders to nothing.
    ///
    /// Empty conjunctions/disjunctions (and empty raw fragments) are the
    /// degenerate result of all-empty condition input; they are never
    /// installed as a filter clause.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::And(parts) | Self::Or(parts) => parts.iter().all(Expr::is_empty),
            Self::Raw(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Render a combination member, parenthesizing nested combinations.
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(parts) | Self::Or(parts) if parts.len() > 1 => {
                f.write_str("(")?;
                fmt::Display::fmt(self, f)?;
                f.write_str(")")
            }
            _ => fmt::Display::fmt(self, f),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) | Self::Raw(p) => f.write_str(p),
            Self::Param(name) => write!(f, ":{name}"),
            Self::Literal(value) => f.write_str(&value.to_literal()),
            Self::Comparison { left, op, right } => write!(f, "{left} {op} {right}"),
            Self::Between { expr, min, max } => {
                write!(f, "{expr} BETWEEN {min} AND {max}")
            }
            Self::In {
                expr,
                values,
                negated,
            } => {
                let keyword = if *negated { "NOT IN" } else { "IN" };
                write!(f, "{expr} {keyword} (")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
            Self::Null { expr, negated } => {
                if *negated {
                    write!(f, "{expr} IS NOT NULL")
                } else {
                    write!(f, "{expr} IS NULL")
                }
            }
            Self::Like {
                expr,
                pattern,
                negated,
            } => {
                if *negated {
                    write!(f, "{expr} NOT LIKE {pattern}")
                } else {
                    write!(f, "{expr} LIKE {pattern}")
                }
            }
            Self::And(parts) | Self::Or(parts) => {
                let separator = match self {
                    Self::And(_) => " AND ",
                    _ => " OR ",
                };
                let mut first = true;
                for part in parts {
                    if !first {
                        f.write_str(separator)?;
                    }
                    part.fmt_member(f)?;
                    first = false;
                }
                Ok(())
            }
            Self::Not(inner) => write!(f, "NOT({inner})"),
            Self::Func {
                name,
                args,
                distinct,
            } => {
                write!(f, "{name}(")?;
                if *distinct {
                    f.write_str("DISTINCT ")?;
                }
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Self::Exists { dql } => write!(f, "EXISTS({dql})"),
        }
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

/// One node of a nested condition list.
///
/// Condition input to [`Expr::and`]/[`Expr::or`] is an ordered, arbitrarily
/// nested sequence of expressions and sub-sequences; `None` entries are
/// discarded during normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// Absent condition, dropped during normalization.
    None,
    /// A single expression.
    One(Expr),
    /// A nested sub-sequence.
    Many(Vec<Cond>),
}

impl From<Expr> for Cond {
    fn from(e: Expr) -> Self {
        Self::One(e)
    }
}

impl From<Option<Expr>> for Cond {
    fn from(e: Option<Expr>) -> Self {
        match e {
            Some(e) => Self::One(e),
            None => Self::None,
        }
    }
}

impl From<&str> for Cond {
    fn from(s: &str) -> Self {
        Self::One(Expr::from(s))
    }
}

impl From<String> for Cond {
    fn from(s: String) -> Self {
        Self::One(Expr::from(s))
    }
}

impl From<Vec<Cond>> for Cond {
    fn from(conds: Vec<Cond>) -> Self {
        Self::Many(conds)
    }
}

impl From<Vec<Expr>> for Cond {
    fn from(exprs: Vec<Expr>) -> Self {
        Self::Many(exprs.into_iter().map(Cond::One).collect())
    }
}

/// Flatten a nested condition list into a single ordered sequence.
///
/// Depth-unlimited, order-preserving; `None` entries anywhere in the input
/// never survive. Flattening is associative: `[[a, b], [c]]` normalizes
/// equal to `[a, b, c]`.
pub fn normalize(conds: impl IntoIterator<Item = Cond>) -> Vec<Expr> {
    let mut out = Vec::new();
    for cond in conds {
        flatten_into(cond, &mut out);
    }
    out
}

fn flatten_into(cond: Cond, out: &mut Vec<Expr>) {
    match cond {
        Cond::None => {}
        Cond::One(expr) => out.push(expr),
        Cond::Many(conds) => {
            for cond in conds {
                flatten_into(cond, out);
            }
        }
    }
}
