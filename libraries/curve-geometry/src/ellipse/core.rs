use super::*;
use crate::utils::angle_norm;

use glam::DMat2;
use std::f64::consts::{PI, TAU};

/// Functionality relating to converting between the endpoint and center forms of an elliptical arc.
impl EllipticalArc {
	/// Create an elliptical arc from its endpoint parametrization, with the arguments in the order of the SVG `A` command.
	pub fn new(start: DVec2, radii: DVec2, rotation: f64, large_arc: bool, sweep: bool, end: DVec2) -> Self {
		Self {
			start,
			end,
			radii,
			rotation,
			large_arc,
			sweep,
		}
	}

	/// Convert to center form following the SVG implementation notes, see <https://www.w3.org/TR/SVG/implnote.html#ArcConversionEndpointToCenter>.
	/// Radii too small to span the endpoints are scaled up uniformly until they do, and the returned arc carries the enlarged radii.
	/// Coincident endpoints give a zero-length arc centered on the start point.
	pub fn to_center(&self) -> CenterArc {
		if self.start == self.end {
			return CenterArc {
				center: self.start,
				radii: self.radii,
				rotation: self.rotation,
				sweep: self.sweep,
				start_angle: 0.,
				end_angle: 0.,
			};
		}

		// Work in a frame centered between the endpoints and aligned with the ellipse's axes
		let rotation_matrix = DMat2::from_angle(-self.rotation);
		let half_chord = rotation_matrix * (self.start - self.end) * 0.5;
		let (x1, y1) = (half_chord.x, half_chord.y);

		let mut radii = self.radii.abs();
		let lambda = (x1 * x1) / (radii.x * radii.x) + (y1 * y1) / (radii.y * radii.y);
		if lambda > 1. {
			radii *= lambda.sqrt();
		}
		let (rx2, ry2) = (radii.x * radii.x, radii.y * radii.y);

		let radicand = ((rx2 * ry2 - rx2 * y1 * y1 - ry2 * x1 * x1) / (rx2 * y1 * y1 + ry2 * x1 * x1)).max(0.);
		let sign = if self.large_arc == self.sweep { -1. } else { 1. };
		let center_prime = sign * radicand.sqrt() * DVec2::new(radii.x * y1 / radii.y, -radii.y * x1 / radii.x);
		let center = rotation_matrix.transpose() * center_prime + (self.start + self.end) * 0.5;

		let u = (half_chord - center_prime) / radii;
		let v = (-half_chord - center_prime) / radii;
		let start_angle = angle_norm(vector_angle(DVec2::X, u));
		let mut delta = vector_angle(u, v);
		if !self.sweep && delta > 0. {
			delta -= TAU;
		} else if self.sweep && delta < 0. {
			delta += TAU;
		}

		CenterArc {
			center,
			radii,
			rotation: self.rotation,
			sweep: self.sweep,
			start_angle,
			end_angle: start_angle + delta,
		}
	}
}

impl CenterArc {
	/// Convert back to endpoint form.
	pub fn to_endpoint(&self) -> EllipticalArc {
		EllipticalArc {
			start: self.position(self.start_angle),
			end: self.position(self.end_angle),
			radii: self.radii,
			rotation: self.rotation,
			large_arc: (self.end_angle - self.start_angle).abs() > PI,
			sweep: self.sweep,
		}
	}
}

/// Signed angle in `[-π, π]` rotating `u` onto `v`.
fn vector_angle(u: DVec2, v: DVec2) -> f64 {
	let cos = (u.dot(v) / (u.length() * v.length())).clamp(-1., 1.);
	let angle = cos.acos();
	if u.perp_dot(v) < 0. {
		-angle
	} else {
		angle
	}
}
