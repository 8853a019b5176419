use super::*;
use crate::consts::{ELLIPSE_QUADRATIC_STEPS, ELLIPSE_SEGMENTS_PER_TURN};
use crate::sink::PathSink;

use std::f64::consts::TAU;

/// Functionality that splits an elliptical arc or approximates it with simpler segments.
impl EllipticalArc {
	/// Returns the length of the arc.
	pub fn length(&self) -> f64 {
		self.to_center().length()
	}

	/// Split the arc at the angle `theta` of its center form.
	/// Returns `None` unless `theta` lies strictly within the arc.
	pub fn split(&self, theta: f64) -> Option<[EllipticalArc; 2]> {
		let center = self.to_center();
		let ArcSplit { point, large_arc, .. } = center.split(theta)?;
		Some([
			EllipticalArc {
				end: point,
				radii: center.radii,
				large_arc: large_arc[0],
				..*self
			},
			EllipticalArc {
				start: point,
				radii: center.radii,
				large_arc: large_arc[1],
				..*self
			},
		])
	}

	/// Approximate the arc with a fixed number of quadratic Bezier segments of equal angular span, appended to `sink`.
	/// Each control point is chosen so that the quadratic passes through the ellipse at the middle of its span.
	/// A zero-length arc appends nothing.
	pub fn to_quadratics(&self, sink: &mut impl PathSink) {
		let center = self.to_center();
		let span = center.end_angle - center.start_angle;
		if span == 0. {
			return;
		}

		let angle = |fraction: f64| center.start_angle + span * fraction;
		let steps = ELLIPSE_QUADRATIC_STEPS as f64;
		for step in 0..ELLIPSE_QUADRATIC_STEPS {
			let (from, to) = (step as f64 / steps, (step + 1) as f64 / steps);
			let start = center.position(angle(from));
			let mid = center.position(angle((from + to) / 2.));
			let end = if step + 1 == ELLIPSE_QUADRATIC_STEPS { self.end } else { center.position(angle(to)) };
			let handle = 2. * mid - 0.5 * start - 0.5 * end;
			sink.quad_to(handle, end);
		}
	}

	/// Approximate the arc with line segments appended to `sink`, using a number of segments proportional to the angular span.
	/// The last segment ends exactly on the end point. A zero-length arc appends nothing.
	pub fn flatten(&self, sink: &mut impl PathSink) {
		let center = self.to_center();
		let span = center.end_angle - center.start_angle;
		if span == 0. {
			return;
		}

		let segments = (span.abs() / TAU * ELLIPSE_SEGMENTS_PER_TURN).ceil().max(1.) as usize;
		for segment in 1..segments {
			sink.line_to(center.position(center.start_angle + span * segment as f64 / segments as f64));
		}
		sink.line_to(self.end);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};
	use crate::sink::PathCommand;
	use crate::utils::f64_compare;
	use std::f64::consts::PI;

	fn half_circle() -> EllipticalArc {
		EllipticalArc::new(DVec2::ZERO, DVec2::splat(5.), 0., false, true, DVec2::new(10., 0.))
	}

	#[test]
	fn test_length() {
		assert!(f64_compare(half_circle().length(), 5. * PI, 1e-9));
		let point = DVec2::new(1., 1.);
		assert_eq!(EllipticalArc::new(point, DVec2::ONE, 0., false, false, point).length(), 0.);
	}

	#[test]
	fn test_split() {
		let arc = EllipticalArc::new(DVec2::ZERO, DVec2::splat(1.), 0., false, true, DVec2::new(10., 0.));
		let center = arc.to_center();
		let [first, second] = arc.split(1.5 * PI).unwrap();

		// Both halves carry the enlarged radii and meet at the bottom of the circle
		assert!(compare_points(first.radii, DVec2::splat(5.)));
		assert!(compare_points(first.end, DVec2::new(5., -5.)));
		assert_eq!(first.end, second.start);
		assert_eq!(first.start, arc.start);
		assert_eq!(second.end, arc.end);
		assert!(!first.large_arc && !second.large_arc);
		assert!(first.sweep && second.sweep);
		assert!(compare_f64s(first.length() + second.length(), center.length()));

		assert_eq!(arc.split(0.5 * PI), None);
	}

	#[test]
	fn test_split_large_arc() {
		let arc = EllipticalArc::new(DVec2::new(5., 0.), DVec2::splat(5.), 0., true, true, DVec2::new(0., -5.));
		let center = arc.to_center();
		assert!(compare_points(center.center, DVec2::ZERO));

		// Three quarters of a turn split after five sixths of it: the first piece still spans more than half a turn
		let [first, second] = arc.split(1.25 * PI).unwrap();
		assert!(first.large_arc);
		assert!(!second.large_arc);
		assert!(compare_points(first.end, DVec2::splat(-5. * 0.5f64.sqrt())));
		let first_center = first.to_center();
		assert!(compare_points(first_center.center, DVec2::ZERO));
	}

	#[test]
	fn test_to_quadratics() {
		let arc = half_circle();
		let center = arc.to_center();
		let mut commands: Vec<PathCommand> = Vec::new();
		arc.to_quadratics(&mut commands);

		assert_eq!(commands.len(), ELLIPSE_QUADRATIC_STEPS);
		assert_eq!(commands.last().map(PathCommand::end), Some(arc.end));
		for command in &commands {
			// Every segment ends on the circle
			assert!(compare_f64s(command.end().distance(center.center), 5.));
		}
		if let PathCommand::QuadTo { handle, end } = commands[0] {
			// The quadratic passes through the middle of its angular span
			let mid = 0.25 * arc.start + 0.5 * handle + 0.25 * end;
			assert!(compare_f64s(mid.distance(center.center), 5.));
		} else {
			panic!("Expected a quadratic segment");
		}
	}

	#[test]
	fn test_flatten() {
		let mut commands: Vec<PathCommand> = Vec::new();
		half_circle().flatten(&mut commands);
		assert_eq!(commands.len(), 32);
		assert_eq!(commands.last(), Some(&PathCommand::LineTo(DVec2::new(10., 0.))));
		assert!(commands.iter().all(|command| matches!(command, PathCommand::LineTo(_))));

		// A tiny arc still gets a single segment
		let mut commands: Vec<PathCommand> = Vec::new();
		EllipticalArc::new(DVec2::ZERO, DVec2::splat(100.), 0., false, true, DVec2::new(0.01, 0.)).flatten(&mut commands);
		assert_eq!(commands, vec![PathCommand::LineTo(DVec2::new(0.01, 0.))]);
	}

	#[test]
	fn test_zero_length_arc_emits_nothing() {
		let point = DVec2::new(2., 3.);
		let arc = EllipticalArc::new(point, DVec2::splat(4.), 0., true, true, point);
		let mut commands: Vec<PathCommand> = Vec::new();
		arc.to_quadratics(&mut commands);
		arc.flatten(&mut commands);
		assert!(commands.is_empty());
	}
}
