use super::*;
use crate::utils::{f64_compare, TValue};

/// Functionality that transform Beziers, such as split, trim and reverse.
impl Bezier {
	/// Returns the pair of Bezier curves that result from splitting the original curve at the point `t` along the curve.
	/// Both halves are exact and keep the degree of the original, following De Casteljau's algorithm.
	pub fn split(&self, t: TValue) -> [Bezier; 2] {
		let t = self.t_value_to_parametric(t);

		match self.handles {
			BezierHandles::Linear => {
				let split_point = self.start.lerp(self.end, t);
				[Bezier::from_linear_dvec2(self.start, split_point), Bezier::from_linear_dvec2(split_point, self.end)]
			}
			BezierHandles::Quadratic { handle } => {
				let first_handle = self.start.lerp(handle, t);
				let second_handle = handle.lerp(self.end, t);
				let split_point = first_handle.lerp(second_handle, t);
				[
					Bezier::from_quadratic_dvec2(self.start, first_handle, split_point),
					Bezier::from_quadratic_dvec2(split_point, second_handle, self.end),
				]
			}
			BezierHandles::Cubic { handle_start, handle_end } => {
				let p01 = self.start.lerp(handle_start, t);
				let p12 = handle_start.lerp(handle_end, t);
				let p23 = handle_end.lerp(self.end, t);
				let p012 = p01.lerp(p12, t);
				let p123 = p12.lerp(p23, t);
				let split_point = p012.lerp(p123, t);
				[
					Bezier::from_cubic_dvec2(self.start, p01, p012, split_point),
					Bezier::from_cubic_dvec2(split_point, p123, p23, self.end),
				]
			}
		}
	}

	/// Returns a reversed version of the Bezier curve.
	pub fn reverse(&self) -> Bezier {
		Bezier {
			start: self.end,
			end: self.start,
			handles: self.handles.reversed(),
		}
	}

	/// Returns the Bezier curve representing the sub-curve starting at the point `t1` and ending at the point `t2` along the curve.
	/// When `t1 > t2`, returns the reversed sub-curve starting at `t1` and ending at `t2`.
	pub fn trim(&self, t1: TValue, t2: TValue) -> Bezier {
		let (t1, t2) = (self.t_value_to_parametric(t1), self.t_value_to_parametric(t2));
		// If t1 is equal to t2, return a bezier comprised entirely of the same point
		if f64_compare(t1, t2, MAX_ABSOLUTE_DIFFERENCE) {
			let point = self.evaluate(TValue::Parametric(t1));
			return match self.handles {
				BezierHandles::Linear => Bezier::from_linear_dvec2(point, point),
				BezierHandles::Quadratic { .. } => Bezier::from_quadratic_dvec2(point, point, point),
				BezierHandles::Cubic { .. } => Bezier::from_cubic_dvec2(point, point, point, point),
			};
		}

		let (low, high) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
		let [_, starting_at_low] = self.split(TValue::Parametric(low));
		// Rescale `high` onto the remaining curve, which starts at `low`
		let [result, _] = starting_at_low.split(TValue::Parametric((high - low) / (1. - low)));
		if t1 > t2 {
			result.reverse()
		} else {
			result
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_points, compare_vec_of_points};

	#[test]
	fn test_split() {
		let line = Bezier::from_linear_coordinates(25., 25., 75., 75.);
		let [part1, part2] = line.split(TValue::Parametric(0.5));

		assert_eq!(part1.start, line.start);
		assert_eq!(part1.end, DVec2::new(50., 50.));
		assert_eq!(part2.start, DVec2::new(50., 50.));
		assert_eq!(part2.end, line.end);

		let quadratic = Bezier::from_quadratic_coordinates(10., 10., 50., 50., 90., 10.);
		let [part1, part2] = quadratic.split(TValue::Parametric(0.5));
		assert_eq!(part1.start, quadratic.start);
		assert_eq!(part1.end, quadratic.evaluate(TValue::Parametric(0.5)));
		assert_eq!(part1.evaluate(TValue::Parametric(0.5)), quadratic.evaluate(TValue::Parametric(0.25)));

		assert_eq!(part2.start, quadratic.evaluate(TValue::Parametric(0.5)));
		assert_eq!(part2.end, quadratic.end);
		assert_eq!(part2.evaluate(TValue::Parametric(0.5)), quadratic.evaluate(TValue::Parametric(0.75)));

		let cubic = Bezier::from_cubic_coordinates(10., 10., 50., 50., 90., 10., 40., 50.);
		let [part1, part2] = cubic.split(TValue::Parametric(0.3));
		assert_eq!(part1.start, cubic.start);
		assert!(compare_points(part1.end, cubic.evaluate(TValue::Parametric(0.3))));
		assert!(compare_points(part1.evaluate(TValue::Parametric(0.5)), cubic.evaluate(TValue::Parametric(0.15))));

		assert!(compare_points(part2.start, cubic.evaluate(TValue::Parametric(0.3))));
		assert_eq!(part2.end, cubic.end);
		assert!(compare_points(part2.evaluate(TValue::Parametric(0.5)), cubic.evaluate(TValue::Parametric(0.65))));
	}

	#[test]
	fn test_split_at_anchors() {
		let cubic = Bezier::from_cubic_coordinates(10., 10., 50., 50., 90., 10., 40., 50.);

		let [part1, part2] = cubic.split(TValue::Parametric(0.));
		assert!(part1.is_point());
		assert_eq!(part2, cubic);

		let [part1, part2] = cubic.split(TValue::Parametric(1.));
		assert_eq!(part1, cubic);
		assert!(part2.is_point());
	}

	#[test]
	fn test_reverse() {
		let cubic = Bezier::from_cubic_coordinates(0., 0., 1., 2., 3., 4., 5., 6.);
		let reversed = cubic.reverse();
		assert!(compare_vec_of_points(
			reversed.get_points().collect(),
			vec![DVec2::new(5., 6.), DVec2::new(3., 4.), DVec2::new(1., 2.), DVec2::new(0., 0.)]
		));
		assert_eq!(reversed.reverse(), cubic);
		assert!(compare_points(reversed.evaluate(TValue::Parametric(0.2)), cubic.evaluate(TValue::Parametric(0.8))));
	}

	#[test]
	fn test_trim() {
		let cubic = Bezier::from_cubic_coordinates(80., 30., 40., 19., 132., 72., 117., 112.);
		let trimmed = cubic.trim(TValue::Parametric(0.25), TValue::Parametric(0.75));
		assert!(compare_points(trimmed.start, cubic.evaluate(TValue::Parametric(0.25))));
		assert!(compare_points(trimmed.end, cubic.evaluate(TValue::Parametric(0.75))));
		assert!(compare_points(trimmed.evaluate(TValue::Parametric(0.5)), cubic.evaluate(TValue::Parametric(0.5))));

		let reversed = cubic.trim(TValue::Parametric(0.75), TValue::Parametric(0.25));
		assert!(reversed.abs_diff_eq(&trimmed.reverse(), MAX_ABSOLUTE_DIFFERENCE));

		let tail = cubic.trim(TValue::Parametric(0.4), TValue::Parametric(1.));
		assert!(tail.abs_diff_eq(&cubic.split(TValue::Parametric(0.4))[1], MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn test_trim_to_point() {
		let quadratic = Bezier::from_quadratic_coordinates(0., 0., 10., 10., 20., 0.);
		let point = quadratic.trim(TValue::Parametric(0.5), TValue::Parametric(0.5));
		assert!(point.is_point());
		assert!(!point.handles.is_cubic());
		assert!(compare_points(point.start, DVec2::new(10., 5.)));
	}
}
