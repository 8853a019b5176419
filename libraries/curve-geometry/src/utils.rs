use crate::consts::EPSILON;

use glam::DVec2;
use std::f64::consts::TAU;

#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A structure which can be used to reference a particular point along a `Bezier`.
/// - The `Parametric` variant is the argument `t` of the curve's parametric equation. Speed along the curve is not constant. `t` must lie in the range `[0, 1]`.
/// - The `Euclidean` variant is a distance ratio `t` along the arc length of the curve in the range `[0, 1]`.
///   It is converted to a parametric `t`-value through an approximate inverse arc-length polynomial, which is accurate to roughly 1%.
pub enum TValue {
	Parametric(f64),
	Euclidean(f64),
}

/// The roots of a quadratic equation which fall within the half-open interval `[0, 1)`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum UnitIntervalRoots {
	/// All coefficients vanish, so every `x` satisfies the equation.
	Infinite,
	/// Up to two roots. Present roots are sorted ascending; a root outside of `[0, 1)` is `None`.
	Roots([Option<f64>; 2]),
}

impl UnitIntervalRoots {
	const NONE: Self = Self::Roots([None, None]);

	fn single(x: f64) -> Self {
		Self::Roots([unit_interval(x), None])
	}

	pub fn is_infinite(&self) -> bool {
		matches!(self, Self::Infinite)
	}

	/// Iterate over the present roots in ascending order. Yields nothing for [UnitIntervalRoots::Infinite].
	pub fn iter(&self) -> impl Iterator<Item = f64> {
		let roots = match *self {
			Self::Infinite => [None, None],
			Self::Roots(roots) => roots,
		};
		roots.into_iter().flatten()
	}
}

fn unit_interval(x: f64) -> Option<f64> {
	(0. ..1.).contains(&x).then_some(x)
}

/// Solve `ax^2 + bx + c = 0`, reporting only the roots within `[0, 1)`.
/// The general case uses the sign-matched (citardauq) form of the quadratic formula, which avoids the catastrophic cancellation
/// of `-b + sqrt(b^2 - 4ac)` when `4ac` is small compared to `b^2`.
pub fn solve_quadratic_in_unit_interval(a: f64, b: f64, c: f64) -> UnitIntervalRoots {
	if a == 0. {
		if b == 0. {
			if c == 0. {
				return UnitIntervalRoots::Infinite;
			}
			return UnitIntervalRoots::NONE;
		}
		return UnitIntervalRoots::single(-c / b);
	}

	// One root sits exactly at zero, the other follows from the remaining linear factor
	if c == 0. {
		return UnitIntervalRoots::Roots([Some(0.), unit_interval(-b / a)]);
	}

	let discriminant = b * b - 4. * a * c;
	if discriminant < 0. {
		return UnitIntervalRoots::NONE;
	}
	if discriminant == 0. {
		return UnitIntervalRoots::single(-b / (2. * a));
	}

	let q = -0.5 * (b + discriminant.sqrt().copysign(b));
	let (mut x1, mut x2) = (q / a, c / q);
	if x1 > x2 {
		std::mem::swap(&mut x1, &mut x2);
	}
	match (unit_interval(x1), unit_interval(x2)) {
		(None, Some(x2)) => UnitIntervalRoots::Roots([Some(x2), None]),
		(x1, x2) => UnitIntervalRoots::Roots([x1, x2]),
	}
}

/// Compare two `f64` numbers with a provided max absolute value difference.
pub fn f64_compare(a: f64, b: f64, max_abs_diff: f64) -> bool {
	(a - b).abs() < max_abs_diff
}

/// Normalize an angle in radians into the range `[0, 2π)`.
pub fn angle_norm(theta: f64) -> f64 {
	let theta = theta.rem_euclid(TAU);
	// `rem_euclid` rounds tiny negative angles up to exactly `TAU`
	if theta >= TAU {
		0.
	} else {
		theta
	}
}

/// Returns `true` when `theta` lies strictly inside the arc that runs from `lower` to `upper`.
/// The bounds may be given in either order and outside of `[0, 2π)`, and `theta` is compared modulo a full turn, so arcs which wrap around zero are handled.
pub fn angle_between(theta: f64, lower: f64, upper: f64) -> bool {
	let (lower, upper) = if lower <= upper { (lower, upper) } else { (upper, lower) };
	let offset = angle_norm(theta - lower);
	EPSILON < offset && offset < upper - lower - EPSILON
}

/// Rotate a vector by 90° clockwise (in a y-up coordinate system), which turns a tangent into its right-hand normal.
pub(crate) fn rotate_90_cw(vector: DVec2) -> DVec2 {
	DVec2::new(vector.y, -vector.x)
}

/// Scale a vector to the given length. The zero vector stays zero.
pub(crate) fn with_length(vector: DVec2, length: f64) -> DVec2 {
	vector.normalize_or_zero() * length
}
