//! Parameter registration types and collision-resistant name generation.
//!
//! A parameter is a `(name, value, optional type)` triple registered
//! against a builder. Names are generated from a monotonically increasing
//! counter combined with a process-local unique token and an optional
//! human-readable slug derived from the target variable name; the slug is
//! for debuggability only.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::DqlError;
use crate::value::ParamValue;

/// Binding type tag for a parameter, when the driver needs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    /// Boolean binding.
    Boolean,
    /// Integer binding.
    Integer,
    /// Float binding.
    Float,
    /// String binding.
    String,
    /// Date/time binding.
    DateTime,
    /// JSON binding.
    Json,
}

impl ParamType {
    /// Get the canonical name of this binding type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::DateTime => "datetime",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = DqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boolean" | "bool" => Ok(Self::Boolean),
            "integer" | "int" => Ok(Self::Integer),
            "float" | "double" => Ok(Self::Float),
            "string" | "text" => Ok(Self::String),
            "datetime" => Ok(Self::DateTime),
            "json" => Ok(Self::Json),
            other => Err(DqlError::UnknownParamType(other.to_string())),
        }
    }
}

/// A named parameter registered against a builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Placeholder name, referenced in expressions as `:name`.
    pub name: String,
    /// The bound value.
    pub value: ParamValue,
    /// Optional binding type tag.
    pub ty: Option<ParamType>,
}

impl Parameter {
    /// Create an untyped parameter.
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
        }
    }

    /// Attach a binding type.
    pub fn with_type(mut self, ty: ParamType) -> Self {
        self.ty = Some(ty);
        self
    }
}

/// A value on its way into a parameter, with an optional binding type.
///
/// Every binding helper accepts `impl Into<BindValue>`, so plain Rust
/// values convert with no type tag and [`typed`] attaches one:
///
/// ```rust
/// use dqlkit::{typed, BindValue, ParamType, ParamValue};
///
/// let plain: BindValue = 42.into();
/// assert_eq!(plain.ty, None);
///
/// let tagged = typed("2021-01-01 00:00:00", ParamType::DateTime);
/// assert_eq!(tagged.ty, Some(ParamType::DateTime));
/// assert!(matches!(tagged.value, ParamValue::String(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BindValue {
    /// The value to bind.
    pub value: ParamValue,
    /// Optional binding type tag.
    pub ty: Option<ParamType>,
}

impl BindValue {
    /// Create a typed bind value.
    pub fn typed(value: impl Into<ParamValue>, ty: ParamType) -> Self {
        Self {
            value: value.into(),
            ty: Some(ty),
        }
    }

    /// Turn this bind value into a named [`Parameter`].
    pub fn into_parameter(self, name: impl Into<String>) -> Parameter {
        Parameter {
            name: name.into(),
            value: self.value,
            ty: self.ty,
        }
    }
}

/// Attach a binding type to a value. Shorthand for [`BindValue::typed`].
pub fn typed(value: impl Into<ParamValue>, ty: ParamType) -> BindValue {
    BindValue::typed(value, ty)
}

macro_rules! bind_value_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for BindValue {
                fn from(v: $ty) -> Self {
                    Self { value: v.into(), ty: None }
                }
            }
        )+
    };
}

bind_value_from!(
    bool,
    i32,
    i64,
    f64,
    &str,
    String,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    serde_json::Value,
    ParamValue,
);

impl<T: Into<ParamValue>> From<Vec<T>> for BindValue {
    fn from(v: Vec<T>) -> Self {
        Self {
            value: v.into(),
            ty: None,
        }
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        Self {
            value: v.into(),
            ty: None,
        }
    }
}

/// Collision-resistant parameter-name sequence.
///
/// Each instance is its own sequence: an atomic counter plus a unique token
/// minted at construction, so names never collide across instances or
/// across concurrent calls within one instance. A generated name has the
/// form `var[_slug]_<token><n>`, where the slug comes from the hinted
/// variable name (dots become underscores, other non-word characters are
/// dropped).
///
/// ```rust
/// use dqlkit::ParamNames;
///
/// let names = ParamNames::new();
/// let a = names.next("u.id");
/// let b = names.next("u.id");
/// assert!(a.starts_with("var_u_id_"));
/// assert_ne!(a, b);
/// ```
#[derive(Debug)]
pub struct ParamNames {
    token: String,
    counter: AtomicU64,
}

static GLOBAL_NAMES: LazyLock<ParamNames> = LazyLock::new(ParamNames::new);

impl ParamNames {
    /// Create a fresh sequence with its own unique token.
    pub fn new() -> Self {
        let mut token = uuid::Uuid::new_v4().simple().to_string();
        token.truncate(12);
        Self {
            token,
            counter: AtomicU64::new(0),
        }
    }

    /// The process-wide sequence, for callers without a scoped one.
    pub fn global() -> &'static ParamNames {
        &GLOBAL_NAMES
    }

    /// Generate the next name, optionally slugged from a variable name.
    pub fn next(&self, hint: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let slug = slugify(hint);
        if slug.is_empty() {
            format!("var_{}{}", self.token, n)
        } else {
            format!("var_{}_{}{}", slug, self.token, n)
        }
    }

    /// How many names this sequence has handed out.
    pub fn generated(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl Default for ParamNames {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce a variable name to a placeholder-safe slug.
fn slugify(hint: &str) -> String {
    hint.replace('.', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
