use super::*;
use crate::utils::{rotate_90_cw, solve_quadratic_in_unit_interval, with_length, UnitIntervalRoots};

/// Functionality that solve for various curve information such as curvature, normals and inflections.
impl Bezier {
	/// Returns the signed radius of curvature at the parametric `t`-value.
	/// The radius is negative where the curve bends clockwise while following increasing `t`, and `None` where the curvature vanishes, such as at inflections and along straight lines.
	pub fn curvature_radius(&self, t: f64) -> Option<f64> {
		let derivative = self.derivative_at(t);
		let cross = derivative.perp_dot(self.second_derivative_at(t));
		if cross.abs() < EPSILON {
			return None;
		}
		Some(derivative.length_squared().powf(1.5) / cross)
	}

	/// Returns the normal on the right-hand side of the curve at one of its end points, scaled to the length `distance`.
	/// At the start the tangent is taken from the first control point that differs from the start point, and likewise backwards from the end point,
	/// so coinciding handles do not produce a degenerate normal. A segment whose points all coincide gives the zero vector.
	///
	/// Panics if `t` is not exactly `0` or `1`.
	pub fn endpoint_normal(&self, t: f64, distance: f64) -> DVec2 {
		let [p0, p1, p2, p3] = self.cubic_points();
		let candidates = if t == 0. {
			[p1 - p0, p2 - p0, p3 - p0]
		} else if t == 1. {
			[p3 - p2, p3 - p1, p3 - p0]
		} else {
			panic!("Endpoint normals are only defined at t = 0 and t = 1, got {t}");
		};

		candidates
			.into_iter()
			.find(|tangent| *tangent != DVec2::ZERO)
			.map_or(DVec2::ZERO, |tangent| with_length(rotate_90_cw(tangent), distance))
	}

	/// Returns the parametric `t`-values of the inflection points of the curve within `[0, 1)`, in ascending order.
	/// These are the roots of the cross product of the first and second derivatives, following <https://www.caffeineowl.com/graphics/2d/vectorial/cubic-inflexion.html>.
	/// Quadratic segments have no inflections. A straight line, where that cross product vanishes everywhere, reports a single inflection at `t = 0`.
	pub fn inflections(&self) -> [Option<f64>; 2] {
		let (p0, p1, p2, p3) = match self.handles {
			BezierHandles::Linear => return [Some(0.), None],
			BezierHandles::Quadratic { handle } => {
				let straight = (handle - self.start).perp_dot(self.end - self.start) == 0.;
				return if straight { [Some(0.), None] } else { [None, None] };
			}
			BezierHandles::Cubic { handle_start, handle_end } => (self.start, handle_start, handle_end, self.end),
		};

		// Power basis coefficients of `B(t) = a*t^3 + 3b*t^2 + 3c*t + p0`
		let a = -p0 + 3. * p1 - 3. * p2 + p3;
		let b = p0 - 2. * p1 + p2;
		let c = p1 - p0;

		let quadratic = a.y * b.x - a.x * b.y;
		let linear = a.y * c.x - a.x * c.y;
		let constant = b.y * c.x - b.x * c.y;

		match solve_quadratic_in_unit_interval(quadratic, linear, constant) {
			UnitIntervalRoots::Infinite => [Some(0.), None],
			UnitIntervalRoots::Roots(roots) => roots,
		}
	}
}
