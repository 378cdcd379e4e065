//! Great-circle distance expression.
//!
//! Emits the fixed `EARTH_DISTANCE(LL_TO_EARTH(..), LL_TO_EARTH(..))`
//! formula (distance in meters). Coordinates given as numbers are formatted
//! to 6 decimal places as inline literals; anything else passes through
//! verbatim as a column or expression reference. No parameters are
//! registered — bind coordinates yourself when they come from user input.
//!
//! ```rust
//! use dqlkit::geo::earth_distance;
//!
//! let e = earth_distance(55.75396, 37.620393, "b.lat", "b.lon");
//! assert_eq!(
//!     e.to_string(),
//!     "EARTH_DISTANCE(LL_TO_EARTH(55.753960, 37.620393), LL_TO_EARTH(b.lat, b.lon))"
//! );
//! ```

use crate::expr::Expr;

/// A coordinate operand: a numeric value or a raw expression reference.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordRef {
    /// Numeric coordinate, formatted to 6 decimal places.
    Value(f64),
    /// Raw expression text, passed through verbatim.
    Expr(String),
}

impl CoordRef {
    fn into_expr(self) -> Expr {
        match self {
            Self::Value(v) => Expr::Raw(format_coord(v)),
            Self::Expr(s) => Expr::Raw(s),
        }
    }
}

impl From<f64> for CoordRef {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl From<f32> for CoordRef {
    fn from(v: f32) -> Self {
        Self::Value(v as f64)
    }
}

// Numeric strings format like numbers, anything else is an expression.
impl From<&str> for CoordRef {
    fn from(s: &str) -> Self {
        match s.trim().parse::<f64>() {
            Ok(v) => Self::Value(v),
            Err(_) => Self::Expr(s.to_string()),
        }
    }
}

impl From<String> for CoordRef {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Format a coordinate to 6 decimal places.
pub fn format_coord(coord: f64) -> String {
    format!("{coord:.6}")
}

/// Distance in meters between two coordinate pairs.
pub fn earth_distance(
    lat_a: impl Into<CoordRef>,
    lon_a: impl Into<CoordRef>,
    lat_b: impl Into<CoordRef>,
    lon_b: impl Into<CoordRef>,
) -> Expr {
    let point = |lat: CoordRef, lon: CoordRef| {
        Expr::func("LL_TO_EARTH", [lat.into_expr(), lon.into_expr()])
    };
    Expr::func(
        "EARTH_DISTANCE",
        [
            point(lat_a.into(), lon_a.into()),
            point(lat_b.into(), lon_b.into()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coord_six_decimals() {
        assert_eq!(format_coord(55.75396), "55.753960");
        assert_eq!(format_coord(0.0), "0.000000");
        assert_eq!(format_coord(-37.62039312), "-37.620393");
    }

    #[test]
    fn test_numeric_strings_are_formatted() {
        let e = earth_distance("55.5", "37.25", "b.lat", "b.lon");
        assert_eq!(
            e.to_string(),
            "EARTH_DISTANCE(LL_TO_EARTH(55.500000, 37.250000), LL_TO_EARTH(b.lat, b.lon))"
        );
    }

    #[test]
    fn test_column_references_pass_through() {
        let e = earth_distance("a.lat", "a.lon", "b.lat", "b.lon");
        assert_eq!(
            e.to_string(),
            "EARTH_DISTANCE(LL_TO_EARTH(a.lat, a.lon), LL_TO_EARTH(b.lat, b.lon))"
        );
    }
}
