//! Comparison helpers used by the unit tests.

use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
use glam::DVec2;

/// Compare two `f64`s within the default test tolerance.
pub fn compare_f64s(f1: f64, f2: f64) -> bool {
	(f1 - f2).abs() < MAX_ABSOLUTE_DIFFERENCE
}

/// Compare two points component-wise within the default test tolerance.
pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}

/// Compare two lists of points pair-wise.
pub fn compare_vec_of_points(a: Vec<DVec2>, b: Vec<DVec2>) -> bool {
	a.len() == b.len() && a.into_iter().zip(b).all(|(p1, p2)| compare_points(p1, p2))
}
