//! # dqlkit
//!
//! Expression fragments and parameter-binding helpers for DQL query
//! builders.
//!
//! This crate is a static helper layer on top of an externally-supplied
//! query builder: it generates collision-resistant parameter names,
//! normalizes nested condition lists, and assembles derived expressions
//! (time-delta helpers, a geo-distance formula, containment/similarity
//! predicates) the builder does not expose natively. It is not a query
//! engine: generation and execution stay with the wrapped ORM, reached
//! through the [`QueryBuilder`] trait.
//!
//! ## Binding comparisons
//!
//! Each comparison registers a uniquely named parameter with the builder
//! and returns an expression referencing the placeholder:
//!
//! ```rust
//! use dqlkit::{eq, gt, require_all, Cond, DqlBuilder, QueryBuilder};
//!
//! let mut qb = DqlBuilder::new();
//! let by_name = eq(&mut qb, "u.name", "Alice");
//! let adult = gt(&mut qb, "u.age", 18);
//!
//! require_all(&mut qb, [Cond::from(by_name), Cond::from(adult)]);
//! assert_eq!(qb.parameters().len(), 2);
//! ```
//!
//! ## Nested condition lists
//!
//! Condition input flattens depth-unlimited and order-preserving; absent
//! entries are dropped. Expressions and hand-authored fragments mix
//! uniformly:
//!
//! ```rust
//! use dqlkit::{all_of, Cond};
//!
//! let combined = all_of([
//!     Cond::from(vec![Cond::from("u.active = TRUE"), Cond::None]),
//!     Cond::from("u.age > 18"),
//! ]);
//! assert_eq!(combined.to_string(), "u.active = TRUE AND u.age > 18");
//! ```
//!
//! ## Derived expressions
//!
//! ```rust
//! use dqlkit::geo::earth_distance;
//! use dqlkit::time::days_from_a_to_b;
//!
//! let age = days_from_a_to_b("u.created_at", "CURRENT_TIMESTAMP()");
//! assert_eq!(
//!     age.to_string(),
//!     "TIMESTAMPDIFF(DAY, u.created_at, CURRENT_TIMESTAMP())"
//! );
//!
//! let dist = earth_distance("a.lat", "a.lon", "b.lat", "b.lon");
//! assert!(dist.to_string().starts_with("EARTH_DISTANCE("));
//! ```
//!
//! ## Pagination
//!
//! ```rust
//! use dqlkit::{paginate, DqlBuilder};
//!
//! let mut qb = DqlBuilder::new();
//! paginate(&mut qb, 25, 50);
//! assert_eq!(qb.max_results(), Some(25));
//!
//! // Non-positive limit: unbounded result set.
//! let mut qb = DqlBuilder::new();
//! paginate(&mut qb, 0, 50);
//! assert_eq!(qb.max_results(), None);
//! ```

pub mod builder;
pub mod error;
pub mod expr;
pub mod functions;
pub mod geo;
pub mod helpers;
pub mod logging;
pub mod pagination;
pub mod param;
pub mod postgres;
pub mod time;
pub mod value;

pub use builder::{DqlBuilder, QueryBuilder};
pub use error::{DqlError, DqlResult};
pub use expr::{normalize, CompareOp, Cond, Expr, NULL};
pub use helpers::{
    all_of, any_of, between, bind, eq, exists, gt, gte, import_parameters, in_list, instance_of,
    is_not_null, is_null, like, lt, lte, neq, not, not_exists, not_in_list, not_like, raw,
    require_all, require_any, set,
};
pub use pagination::{paginate, Pagination};
pub use param::{typed, BindValue, ParamNames, ParamType, Parameter};
pub use value::{ParamValue, DATETIME_FORMAT};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{DqlBuilder, QueryBuilder};
    pub use crate::error::{DqlError, DqlResult};
    pub use crate::expr::{normalize, CompareOp, Cond, Expr};
    pub use crate::functions::*;
    pub use crate::geo::{earth_distance, format_coord, CoordRef};
    pub use crate::helpers::*;
    pub use crate::pagination::{paginate, Pagination};
    pub use crate::param::{typed, BindValue, ParamNames, ParamType, Parameter};
    pub use crate::postgres::*;
    pub use crate::time::*;
    pub use crate::value::ParamValue;
}
