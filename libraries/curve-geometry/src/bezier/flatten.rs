//! Adaptive flattening and offsetting of Bezier curves following T. F. Hain, A. L. Ahmad, S. V. R. Racherla, D. D. Langan,
//! "Fast, precise flattening of cubic Bézier path and offset curves", Computers & Graphics 29 (2005).

use super::*;
use crate::sink::PathSink;
use crate::utils::TValue;

use std::ops::Range;

/// Functionality that converts Beziers into polylines.
impl Bezier {
	/// Append a polyline approximating the curve to `sink`, keeping within `options.tolerance` of it.
	/// With a non-zero `options.offset` the polyline instead follows the curve displaced along its right-hand normal, which traces one side of a stroke.
	///
	/// The start point is expected to have been emitted already, so only the following points are appended, in order of increasing `t` and ending exactly at `t = 1`.
	/// Away from inflections the step size adapts to the local curvature, and around each inflection a single chord spans the region where the curve is flat enough.
	/// Segments which collapse onto their start point append nothing.
	pub fn flatten(&self, sink: &mut impl PathSink, options: FlattenOptions) {
		let curve = self.to_cubic();
		if curve.is_collapsed() {
			log::debug!("Skipping flattening of collapsed segment {self:?}");
			return;
		}
		if let BezierHandles::Linear = self.handles {
			sink.line_to(self.end + self.endpoint_normal(1., options.offset));
			return;
		}

		let inflections = self.inflections();
		if inflections.iter().all(Option::is_none) {
			curve.flatten_smooth(sink, options, 1.);
			return;
		}

		// Regions around inflections which are close enough to a straight line to be covered by one chord
		let mut windows: Vec<Range<f64>> = inflections
			.into_iter()
			.flatten()
			.map(|t| {
				let window = curve.inflection_window(t, options.tolerance);
				window.start.max(0.)..window.end.min(1.)
			})
			.collect();
		windows.sort_by(|a, b| a.start.total_cmp(&b.start));

		// Every window end past the cursor becomes a chord vertex, even when windows overlap
		let mut cursor = 0.;
		for window in windows {
			if window.end <= cursor {
				continue;
			}
			if window.start > cursor {
				curve.between(cursor, window.start).flatten_smooth(sink, options, window.start - cursor);
			}
			if window.end >= 1. {
				curve.emit_endpoint(sink, 1., options.offset);
				return;
			}
			let [_, rest] = curve.split(TValue::Parametric(window.end));
			rest.emit_endpoint(sink, 0., options.offset);
			cursor = window.end;
		}
		curve.between(cursor, 1.).flatten_smooth(sink, options, 1. - cursor);
	}

	/// Returns the part of the curve between `t1 < t2`, keeping the original end points bit-exact where the range reaches them.
	fn between(&self, t1: f64, t2: f64) -> Bezier {
		let rest = if t1 > 0. { self.split(TValue::Parametric(t1))[1] } else { *self };
		if t2 < 1. {
			rest.split(TValue::Parametric((t2 - t1) / (1. - t1)))[0]
		} else {
			rest
		}
	}

	/// Whether the cubic ends where it starts with one of its handles also on that point, which leaves nothing to draw.
	fn is_collapsed(&self) -> bool {
		let [p0, p1, p2, p3] = self.cubic_points();
		p0 == p3 && (p0 == p1 || p0 == p2)
	}

	/// Append the point at `t = 0` or `t = 1`, displaced by the endpoint normal.
	fn emit_endpoint(&self, sink: &mut impl PathSink, t: f64, offset: f64) {
		if self.is_collapsed() {
			return;
		}
		let point = if t == 0. { self.start } else { self.end };
		sink.line_to(point + self.endpoint_normal(t, offset));
	}

	/// Flatten a cubic without inflections by repeatedly cutting off the longest parabola-like piece that stays within tolerance.
	/// `span` is the portion of the original curve's parameter range this cubic covers, used to express `min_step` in local terms.
	fn flatten_smooth(&self, sink: &mut impl PathSink, options: FlattenOptions, mut span: f64) {
		let FlattenOptions { tolerance, offset, min_step } = options;
		let mut curve = *self;
		let mut clamped_steps = 0_usize;

		loop {
			let [p0, p1, p2, _] = curve.cubic_points();
			let chord = p1 - p0;
			let handle_distance = chord.length();
			let s2_numerator = (p2 - p0).perp_dot(chord);
			// Already straight
			if s2_numerator * handle_distance == 0. {
				break;
			}

			let s2 = s2_numerator / handle_distance;
			let effective_tolerance = tolerance / (1. + 2. * offset * s2 / (3. * handle_distance * handle_distance)).abs();
			let mut t = 2. * (effective_tolerance / (3. * s2.abs())).sqrt();
			let floor = min_step.max(MIN_STEP_FLOOR) / span;
			if t < floor {
				t = floor;
				clamped_steps += 1;
			}
			if t >= 1. {
				break;
			}

			let [_, rest] = curve.split(TValue::Parametric(t));
			curve = rest;
			span *= 1. - t;
			curve.emit_endpoint(sink, 0., offset);
		}

		if clamped_steps > 0 {
			log::trace!("Flattening clamped {clamped_steps} steps to the minimum step of {min_step}");
		}
		curve.emit_endpoint(sink, 1., offset);
	}

	/// Returns the range of `t` around the inflection at `t` within which the curve deviates from a straight line by less than `tolerance`.
	/// A curve with no usable tangent at the inflection gives the whole range `0..1`.
	fn inflection_window(&self, t: f64, tolerance: f64) -> Range<f64> {
		let curve = if t == 0. { *self } else { self.split(TValue::Parametric(t))[1] };
		let [p0, p1, p2, p3] = curve.cubic_points();

		let tangent = if p1 != p0 { p1 - p0 } else { p2 - p0 };
		if tangent == DVec2::ZERO {
			return 0. ..1.;
		}
		let s3 = (p3 - p0).perp_dot(tangent).abs() / tangent.length();
		if s3 == 0. {
			return 0. ..1.;
		}

		let tf = (tolerance / s3).cbrt();
		(t - tf * (1. - t))..(t + tf * (1. - t))
	}
}
