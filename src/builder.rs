//! The query-builder contract consumed by the helpers.
//!
//! The builder is caller-owned: helpers receive it by reference on every
//! call and retain nothing. The trait is the minimum surface the wrapped
//! ORM's builder must expose — parameter registration and enumeration,
//! clause assembly, a pagination window, and the rendered query text (used
//! to embed subqueries). Query generation and execution stay with the ORM.

use indexmap::IndexMap;
use tracing::debug;

use crate::expr::Expr;
use crate::param::{ParamNames, Parameter};

/// Contract for an externally-supplied query builder.
pub trait QueryBuilder {
    /// Register a parameter. Re-registering a name replaces the binding.
    fn set_parameter(&mut self, param: Parameter);

    /// Snapshot of the currently registered parameters, in registration
    /// order, for cross-query copying.
    fn parameters(&self) -> Vec<Parameter>;

    /// Install `expr` as the filter clause, replacing any previous one.
    fn set_where(&mut self, expr: Expr);

    /// Append an update assignment.
    fn add_set(&mut self, assignment: Expr);

    /// Set the offset of the result window.
    fn set_first_result(&mut self, offset: u64);

    /// Set the size of the result window.
    fn set_max_results(&mut self, limit: u64);

    /// The builder's current query text.
    fn dql(&self) -> String;

    /// Generate a unique parameter name, optionally slugged from `hint`.
    ///
    /// Defaults to the process-wide sequence; builders may override with a
    /// sequence of their own.
    fn param_name(&mut self, hint: &str) -> String {
        ParamNames::global().next(hint)
    }
}

/// A minimal [`QueryBuilder`] that records everything it is handed.
///
/// It performs no I/O and generates no queries: the query text is whatever
/// the caller supplies via [`DqlBuilder::with_dql`]. Useful as a stand-in
/// where no live ORM builder is available, and as the test double for
/// everything in this crate.
///
/// ```rust
/// use dqlkit::{eq, DqlBuilder, QueryBuilder};
///
/// let mut qb = DqlBuilder::new();
/// let cond = eq(&mut qb, "u.name", "Alice");
/// assert_eq!(qb.parameters().len(), 1);
/// assert!(cond.to_string().starts_with("u.name = :var_u_name_"));
/// ```
#[derive(Debug, Default)]
pub struct DqlBuilder {
    query: String,
    params: IndexMap<String, Parameter>,
    where_clause: Option<Expr>,
    set_clauses: Vec<Expr>,
    first_result: Option<u64>,
    max_results: Option<u64>,
    names: ParamNames,
}

impl DqlBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder carrying the given query text.
    pub fn with_dql(dql: impl Into<String>) -> Self {
        Self {
            query: dql.into(),
            ..Self::default()
        }
    }

    /// Replace the query text.
    pub fn set_dql(&mut self, dql: impl Into<String>) {
        self.query = dql.into();
    }

    /// Look up a registered parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.params.get(name)
    }

    /// The installed filter clause, if any.
    pub fn where_clause(&self) -> Option<&Expr> {
        self.where_clause.as_ref()
    }

    /// The recorded update assignments, in order.
    pub fn set_clauses(&self) -> &[Expr] {
        &self.set_clauses
    }

    /// The result-window offset, if set.
    pub fn first_result(&self) -> Option<u64> {
        self.first_result
    }

    /// The result-window size, if set.
    pub fn max_results(&self) -> Option<u64> {
        self.max_results
    }
}

impl QueryBuilder for DqlBuilder {
    fn set_parameter(&mut self, param: Parameter) {
        debug!(name = %param.name, ty = ?param.ty, "registering parameter");
        self.params.insert(param.name.clone(), param);
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.params.values().cloned().collect()
    }

    fn set_where(&mut self, expr: Expr) {
        self.where_clause = Some(expr);
    }

    fn add_set(&mut self, assignment: Expr) {
        self.set_clauses.push(assignment);
    }

    fn set_first_result(&mut self, offset: u64) {
        self.first_result = Some(offset);
    }

    fn set_max_results(&mut self, limit: u64) {
        self.max_results = Some(limit);
    }

    fn dql(&self) -> String {
        self.query.clone()
    }

    // Builder-scoped sequence instead of the process-wide one.
    fn param_name(&mut self, hint: &str) -> String {
        self.names.next(hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ParamValue;

    #[test]
    fn test_set_parameter_replaces_same_name() {
        let mut qb = DqlBuilder::new();
        qb.set_parameter(Parameter::new("p", 1i64));
        qb.set_parameter(Parameter::new("p", 2i64));

        let params = qb.parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].value, ParamValue::Int(2));
    }

    #[test]
    fn test_parameters_preserve_registration_order() {
        let mut qb = DqlBuilder::new();
        qb.set_parameter(Parameter::new("b", 1i64));
        qb.set_parameter(Parameter::new("a", 2i64));

        let names: Vec<_> = qb.parameters().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_where_clause_replaces() {
        let mut qb = DqlBuilder::new();
        qb.set_where(Expr::raw("a = 1"));
        qb.set_where(Expr::raw("b = 2"));
        assert_eq!(qb.where_clause().unwrap().to_string(), "b = 2");
    }

    #[test]
    fn test_dql_round_trip() {
        let qb = DqlBuilder::with_dql("SELECT u FROM User u");
        assert_eq!(qb.dql(), "SELECT u FROM User u");
    }

    #[test]
    fn test_scoped_param_names_are_distinct() {
        let mut qb = DqlBuilder::new();
        let a = qb.param_name("u.id");
        let b = qb.param_name("u.id");
        assert_ne!(a, b);
        assert!(a.starts_with("var_u_id_"));
    }
}
