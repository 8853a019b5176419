use super::*;

/// Functionality relating to core `Bezier` operations, such as constructors, degree elevation and `abs_diff_eq`.
impl Bezier {
	/// Create a straight segment from `(x1, y1)` to `(x2, y2)`.
	pub fn from_linear_coordinates(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
		Self::from_linear_dvec2(DVec2::new(x1, y1), DVec2::new(x2, y2))
	}

	/// Create a straight segment from `start` to `end`.
	pub fn from_linear_dvec2(start: DVec2, end: DVec2) -> Self {
		Bezier { start, end, handles: BezierHandles::Linear }
	}

	/// Create a quadratic segment from `(x1, y1)` to `(x3, y3)` with its control point at `(x2, y2)`.
	pub fn from_quadratic_coordinates(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
		Self::from_quadratic_dvec2(DVec2::new(x1, y1), DVec2::new(x2, y2), DVec2::new(x3, y3))
	}

	/// Create a quadratic segment from `start` to `end` with the control point `handle`.
	pub fn from_quadratic_dvec2(start: DVec2, handle: DVec2, end: DVec2) -> Self {
		Bezier {
			start,
			end,
			handles: BezierHandles::Quadratic { handle },
		}
	}

	/// Create a cubic segment from `(x1, y1)` to `(x4, y4)` with its control points at `(x2, y2)` and `(x3, y3)`.
	#[allow(clippy::too_many_arguments)]
	pub fn from_cubic_coordinates(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) -> Self {
		Self::from_cubic_dvec2(DVec2::new(x1, y1), DVec2::new(x2, y2), DVec2::new(x3, y3), DVec2::new(x4, y4))
	}

	/// Create a cubic segment from `start` to `end`, leaving along `handle_start` and arriving along `handle_end`.
	pub fn from_cubic_dvec2(start: DVec2, handle_start: DVec2, handle_end: DVec2, end: DVec2) -> Self {
		Bezier {
			start,
			end,
			handles: BezierHandles::Cubic { handle_start, handle_end },
		}
	}

	/// Returns the same curve expressed as a cubic.
	/// A quadratic's handles are placed two thirds of the way from each end point towards its control point, which is exact.
	/// A line's handles are placed at a third and two thirds of its length, so the speed along it stays constant.
	pub fn to_cubic(&self) -> Bezier {
		match self.handles {
			BezierHandles::Linear => Bezier::from_cubic_dvec2(self.start, self.start.lerp(self.end, 1. / 3.), self.start.lerp(self.end, 2. / 3.), self.end),
			BezierHandles::Quadratic { handle } => Bezier::from_cubic_dvec2(self.start, self.start.lerp(handle, 2. / 3.), self.end.lerp(handle, 2. / 3.), self.end),
			BezierHandles::Cubic { .. } => *self,
		}
	}

	/// Returns the four control points of the curve once elevated to a cubic.
	pub(crate) fn cubic_points(&self) -> [DVec2; 4] {
		match self.to_cubic().handles {
			BezierHandles::Cubic { handle_start, handle_end } => [self.start, handle_start, handle_end, self.end],
			_ => unreachable!("to_cubic always returns a cubic"),
		}
	}

	/// Returns an iterator over the control points of the curve, from the start point through the handles to the end point.
	pub fn get_points(&self) -> impl Iterator<Item = DVec2> {
		match self.handles {
			BezierHandles::Linear => [Some(self.start), Some(self.end), None, None],
			BezierHandles::Quadratic { handle } => [Some(self.start), Some(handle), Some(self.end), None],
			BezierHandles::Cubic { handle_start, handle_end } => [Some(self.start), Some(handle_start), Some(handle_end), Some(self.end)],
		}
		.into_iter()
		.flatten()
	}

	/// Whether both curves have the same degree and each of their control points lies within `max_abs_diff` of its counterpart.
	pub fn abs_diff_eq(&self, other: &Bezier, max_abs_diff: f64) -> bool {
		self.get_points().count() == other.get_points().count()
			&& self.get_points().zip(other.get_points()).all(|(a, b)| a.abs_diff_eq(b, max_abs_diff))
	}

	/// Whether every control point coincides with the start point, so the curve has no extent.
	pub fn is_point(&self) -> bool {
		self.get_points().all(|point| point.abs_diff_eq(self.start, MAX_ABSOLUTE_DIFFERENCE))
	}
}
