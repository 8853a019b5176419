//! Curve-geometry: numerical geometry for Bezier segments and elliptical arcs, with adaptive flattening
#[cfg(test)]
pub(crate) mod compare;

mod arc_length;
mod bezier;
mod consts;
mod ellipse;
mod quadrature;
mod sink;
mod utils;

pub use arc_length::ArcLengthMap;
pub use bezier::*;
pub use consts::{DEFAULT_MIN_STEP, DEFAULT_TOLERANCE};
pub use ellipse::*;
pub use quadrature::{bisection, GaussLegendre};
pub use sink::{PathCommand, PathSink};
pub use utils::{angle_between, angle_norm, f64_compare, solve_quadratic_in_unit_interval, TValue, UnitIntervalRoots};
