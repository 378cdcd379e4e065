//! Binding helpers: expression constructors that register parameters.
//!
//! Free functions over `&mut impl QueryBuilder`. Each comparison generates
//! a unique parameter name, registers the `(name, value, type)` triple with
//! the builder, and returns an expression referencing the placeholder; the
//! caller composes the returned fragments into clauses however it likes.
//!
//! ```rust
//! use dqlkit::{eq, gt, require_all, Cond, DqlBuilder, QueryBuilder};
//!
//! let mut qb = DqlBuilder::new();
//! let by_name = eq(&mut qb, "u.name", "Alice");
//! let adult = gt(&mut qb, "u.age", 18);
//! require_all(&mut qb, [Cond::from(by_name), Cond::from(adult)]);
//!
//! assert_eq!(qb.parameters().len(), 2);
//! assert!(qb.where_clause().unwrap().to_string().contains(" AND "));
//! ```

use tracing::debug;

use crate::builder::QueryBuilder;
use crate::expr::{CompareOp, Cond, Expr};
use crate::param::{BindValue, Parameter};
use crate::value::ParamValue;

/// Register `value` under a freshly generated name and return the name.
pub fn bind(qb: &mut impl QueryBuilder, hint: &str, value: impl Into<BindValue>) -> String {
    let name = qb.param_name(hint);
    qb.set_parameter(value.into().into_parameter(name.clone()));
    name
}

fn compare(
    qb: &mut impl QueryBuilder,
    var: &str,
    op: CompareOp,
    value: impl Into<BindValue>,
) -> Expr {
    let name = bind(qb, var, value);
    Expr::comparison(Expr::path(var), op, Expr::param(name))
}

/// `var = :param`, binding `value`.
pub fn eq(qb: &mut impl QueryBuilder, var: &str, value: impl Into<BindValue>) -> Expr {
    compare(qb, var, CompareOp::Eq, value)
}

/// `var <> :param`, binding `value`.
pub fn neq(qb: &mut impl QueryBuilder, var: &str, value: impl Into<BindValue>) -> Expr {
    compare(qb, var, CompareOp::Neq, value)
}

/// `var < :param`, binding `value`.
pub fn lt(qb: &mut impl QueryBuilder, var: &str, value: impl Into<BindValue>) -> Expr {
    compare(qb, var, CompareOp::Lt, value)
}

/// `var <= :param`, binding `value`.
pub fn lte(qb: &mut impl QueryBuilder, var: &str, value: impl Into<BindValue>) -> Expr {
    compare(qb, var, CompareOp::Lte, value)
}

/// `var > :param`, binding `value`.
pub fn gt(qb: &mut impl QueryBuilder, var: &str, value: impl Into<BindValue>) -> Expr {
    compare(qb, var, CompareOp::Gt, value)
}

/// `var >= :param`, binding `value`.
pub fn gte(qb: &mut impl QueryBuilder, var: &str, value: impl Into<BindValue>) -> Expr {
    compare(qb, var, CompareOp::Gte, value)
}

/// `var INSTANCE OF :param`, binding `value`.
pub fn instance_of(qb: &mut impl QueryBuilder, var: &str, value: impl Into<BindValue>) -> Expr {
    compare(qb, var, CompareOp::InstanceOf, value)
}

/// `var BETWEEN :min AND :max`, binding both bounds.
///
/// Equivalent to `var >= min AND var <= max`.
pub fn between(
    qb: &mut impl QueryBuilder,
    var: &str,
    min: impl Into<BindValue>,
    max: impl Into<BindValue>,
) -> Expr {
    let lo = bind(qb, "min", min);
    let hi = bind(qb, "max", max);
    Expr::Between {
        expr: Box::new(Expr::path(var)),
        min: Box::new(Expr::param(lo)),
        max: Box::new(Expr::param(hi)),
    }
}

fn membership(var: &str, values: impl Into<ParamValue>, negated: bool) -> Expr {
    let values = values
        .into()
        .into_list()
        .into_iter()
        .map(Expr::Literal)
        .collect();
    Expr::In {
        expr: Box::new(Expr::path(var)),
        values,
        negated,
    }
}

/// `var IN (...)` against the raw values.
///
/// The operand is coerced to a list; a scalar becomes a one-element list.
/// Values are inlined as quoted literals, not bound as parameters, so
/// large or variable membership lists bypass parameterization.
pub fn in_list(var: &str, values: impl Into<ParamValue>) -> Expr {
    membership(var, values, false)
}

/// `var NOT IN (...)` against the raw values. See [`in_list`] for the
/// inlining caveat.
pub fn not_in_list(var: &str, values: impl Into<ParamValue>) -> Expr {
    membership(var, values, true)
}

/// `var IS NULL`. No parameters.
pub fn is_null(var: &str) -> Expr {
    Expr::is_null(var)
}

/// `var IS NOT NULL`. No parameters.
pub fn is_not_null(var: &str) -> Expr {
    Expr::is_not_null(var)
}

/// `var LIKE :param`, binding the pattern.
pub fn like(qb: &mut impl QueryBuilder, var: &str, pattern: impl Into<BindValue>) -> Expr {
    let name = bind(qb, var, pattern);
    Expr::Like {
        expr: Box::new(Expr::path(var)),
        pattern: Box::new(Expr::param(name)),
        negated: false,
    }
}

/// `var NOT LIKE :param`, binding the pattern.
pub fn not_like(qb: &mut impl QueryBuilder, var: &str, pattern: impl Into<BindValue>) -> Expr {
    let name = bind(qb, var, pattern);
    Expr::Like {
        expr: Box::new(Expr::path(var)),
        pattern: Box::new(Expr::param(name)),
        negated: true,
    }
}

/// Combine a nested condition list into one conjunction.
pub fn all_of(conds: impl IntoIterator<Item = Cond>) -> Expr {
    Expr::and(conds)
}

/// Combine a nested condition list into one disjunction.
pub fn any_of(conds: impl IntoIterator<Item = Cond>) -> Expr {
    Expr::or(conds)
}

/// Combine into a conjunction and, when non-empty, install it as the
/// builder's filter clause.
pub fn require_all(qb: &mut impl QueryBuilder, conds: impl IntoIterator<Item = Cond>) -> Expr {
    let combined = Expr::and(conds);
    if !combined.is_empty() {
        qb.set_where(combined.clone());
    }
    combined
}

/// Combine into a disjunction and, when non-empty, install it as the
/// builder's filter clause.
pub fn require_any(qb: &mut impl QueryBuilder, conds: impl IntoIterator<Item = Cond>) -> Expr {
    let combined = Expr::or(conds);
    if !combined.is_empty() {
        qb.set_where(combined.clone());
    }
    combined
}

/// Logical negation of an expression.
pub fn not(expr: impl Into<Expr>) -> Expr {
    Expr::not(expr)
}

/// Bind `value` and append `var = :param` as an update assignment.
pub fn set(qb: &mut impl QueryBuilder, var: &str, value: impl Into<BindValue>) -> Expr {
    let name = bind(qb, var, value);
    let assignment = Expr::comparison(Expr::path(var), CompareOp::Eq, Expr::param(name));
    qb.add_set(assignment.clone());
    assignment
}

/// Copy every registered parameter from `source` into `target`.
///
/// Used after embedding a subquery so the parent query does not fail on
/// unknown parameters at execution time.
pub fn import_parameters<T, S>(target: &mut T, source: &S)
where
    T: QueryBuilder + ?Sized,
    S: QueryBuilder + ?Sized,
{
    let params = source.parameters();
    debug!(count = params.len(), "importing subquery parameters");
    for param in params {
        target.set_parameter(param);
    }
}

/// `EXISTS(subquery)` over the nested builder's rendered text.
///
/// With `import`, the subquery's registered parameters are copied into
/// `qb` as well.
pub fn exists<T, S>(qb: &mut T, subquery: &S, import: bool) -> Expr
where
    T: QueryBuilder + ?Sized,
    S: QueryBuilder + ?Sized,
{
    let result = Expr::Exists {
        dql: subquery.dql(),
    };
    if import {
        import_parameters(qb, subquery);
    }
    result
}

/// `NOT(EXISTS(subquery))`. See [`exists`].
pub fn not_exists<T, S>(qb: &mut T, subquery: &S, import: bool) -> Expr
where
    T: QueryBuilder + ?Sized,
    S: QueryBuilder + ?Sized,
{
    Expr::not(exists(qb, subquery, import))
}

/// Register a set of named parameters and pass a hand-authored fragment
/// through unchanged.
pub fn raw(
    qb: &mut impl QueryBuilder,
    expression: impl Into<String>,
    params: impl IntoIterator<Item = Parameter>,
) -> Expr {
    for param in params {
        qb.set_parameter(param);
    }
    Expr::Raw(expression.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DqlBuilder;
    use crate::param::{typed, ParamType};

    #[test]
    fn test_eq_binds_and_references_param() {
        let mut qb = DqlBuilder::new();
        let e = eq(&mut qb, "u.name", "Alice");

        let params = qb.parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].value, ParamValue::String("Alice".into()));
        assert_eq!(e.to_string(), format!("u.name = :{}", params[0].name));
    }

    #[test]
    fn test_typed_bind_carries_type() {
        let mut qb = DqlBuilder::new();
        eq(&mut qb, "u.age", typed(30i64, ParamType::Integer));
        assert_eq!(qb.parameters()[0].ty, Some(ParamType::Integer));
    }

    #[test]
    fn test_between_binds_both_bounds() {
        let mut qb = DqlBuilder::new();
        let e = between(&mut qb, "o.total", 10i64, 20i64);

        let params = qb.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].value, ParamValue::Int(10));
        assert_eq!(params[1].value, ParamValue::Int(20));
        assert_eq!(
            e.to_string(),
            format!("o.total BETWEEN :{} AND :{}", params[0].name, params[1].name)
        );
    }

    #[test]
    fn test_in_list_coerces_scalar_and_inlines() {
        let e = in_list("u.role", "admin");
        assert_eq!(e.to_string(), "u.role IN ('admin')");

        let e = not_in_list("u.id", vec![1i64, 2]);
        assert_eq!(e.to_string(), "u.id NOT IN (1, 2)");
    }

    #[test]
    fn test_null_checks_bind_nothing() {
        assert_eq!(is_null("u.deleted_at").to_string(), "u.deleted_at IS NULL");
        assert_eq!(
            is_not_null("u.deleted_at").to_string(),
            "u.deleted_at IS NOT NULL"
        );
    }

    #[test]
    fn test_like_binds_pattern() {
        let mut qb = DqlBuilder::new();
        let e = like(&mut qb, "u.email", "%@example.com");
        assert!(e.to_string().contains("LIKE :"));
        assert_eq!(
            qb.parameters()[0].value,
            ParamValue::String("%@example.com".into())
        );
    }

    #[test]
    fn test_require_all_installs_when_non_empty() {
        let mut qb = DqlBuilder::new();
        require_all(&mut qb, [Cond::from("a = 1"), Cond::from("b = 2")]);
        assert_eq!(qb.where_clause().unwrap().to_string(), "a = 1 AND b = 2");
    }

    #[test]
    fn test_require_all_skips_empty_combination() {
        let mut qb = DqlBuilder::new();
        require_all(&mut qb, [Cond::None, Cond::from(vec![Cond::None])]);
        assert!(qb.where_clause().is_none());
    }

    #[test]
    fn test_require_any_installs_disjunction() {
        let mut qb = DqlBuilder::new();
        require_any(&mut qb, [Cond::from("a = 1"), Cond::from("b = 2")]);
        assert_eq!(qb.where_clause().unwrap().to_string(), "a = 1 OR b = 2");
    }

    #[test]
    fn test_set_records_assignment() {
        let mut qb = DqlBuilder::new();
        set(&mut qb, "u.name", "Bob");
        assert_eq!(qb.set_clauses().len(), 1);
        assert!(qb.set_clauses()[0].to_string().starts_with("u.name = :"));
        assert_eq!(qb.parameters().len(), 1);
    }

    #[test]
    fn test_exists_wraps_subquery_text() {
        let mut qb = DqlBuilder::new();
        let sub = DqlBuilder::with_dql("SELECT o FROM Order o WHERE o.user = u");
        let e = exists(&mut qb, &sub, false);
        assert_eq!(
            e.to_string(),
            "EXISTS(SELECT o FROM Order o WHERE o.user = u)"
        );
        assert!(qb.parameters().is_empty());
    }

    #[test]
    fn test_exists_imports_subquery_parameters() {
        let mut qb = DqlBuilder::new();
        let mut sub = DqlBuilder::with_dql("SELECT o FROM Order o WHERE o.total > :t");
        sub.set_parameter(Parameter::new("t", 100i64));

        exists(&mut qb, &sub, true);
        assert_eq!(qb.parameters().len(), 1);
        assert_eq!(qb.parameters()[0].name, "t");
    }

    #[test]
    fn test_not_exists_negates() {
        let mut qb = DqlBuilder::new();
        let sub = DqlBuilder::with_dql("SELECT 1");
        let e = not_exists(&mut qb, &sub, false);
        assert_eq!(e.to_string(), "NOT(EXISTS(SELECT 1))");
    }

    #[test]
    fn test_raw_registers_params_and_passes_through() {
        let mut qb = DqlBuilder::new();
        let e = raw(
            &mut qb,
            "u.score > :floor",
            [Parameter::new("floor", 50i64)],
        );
        assert_eq!(e.to_string(), "u.score > :floor");
        assert_eq!(qb.parameters()[0].name, "floor");
    }
}
