use super::*;
use crate::arc_length::ArcLengthMap;
use crate::consts::EPSILON;
use crate::quadrature::GaussLegendre;
use crate::utils::{angle_between, rotate_90_cw, with_length};

use glam::DMat2;
use std::f64::consts::{PI, TAU};

/// Functionality for evaluating points, derivatives and lengths along an elliptical arc.
impl CenterArc {
	fn rotation_matrix(&self) -> DMat2 {
		DMat2::from_angle(self.rotation)
	}

	/// Returns the point on the ellipse at the angle `theta`.
	pub fn position(&self, theta: f64) -> DVec2 {
		let (sin, cos) = theta.sin_cos();
		self.center + self.rotation_matrix() * (self.radii * DVec2::new(cos, sin))
	}

	/// Returns the derivative with respect to `theta`, oriented in the direction of travel.
	pub fn derivative(&self, theta: f64) -> DVec2 {
		let (sin, cos) = theta.sin_cos();
		let derivative = self.rotation_matrix() * (self.radii * DVec2::new(-sin, cos));
		if self.sweep {
			derivative
		} else {
			-derivative
		}
	}

	/// Returns the second derivative with respect to `theta`. Unlike the first derivative it does not depend on the direction of travel.
	pub fn second_derivative(&self, theta: f64) -> DVec2 {
		let (sin, cos) = theta.sin_cos();
		self.rotation_matrix() * (self.radii * DVec2::new(-cos, -sin))
	}

	/// Returns the signed radius of curvature at `theta`: positive when the arc bends counter-clockwise, negative when it bends clockwise.
	/// Returns `None` where the curvature vanishes.
	pub fn curvature_radius(&self, theta: f64) -> Option<f64> {
		let derivative = self.derivative(theta);
		let cross = derivative.perp_dot(self.second_derivative(theta));
		if cross.abs() < EPSILON {
			return None;
		}
		Some(derivative.length_squared().powf(1.5) / cross)
	}

	/// Returns the normal on the right-hand side of the direction of travel at `theta`, scaled to the length `distance`.
	pub fn normal(&self, theta: f64, distance: f64) -> DVec2 {
		with_length(rotate_90_cw(self.derivative(theta)), distance)
	}

	/// Returns the arc length between two angles, in either order, with 5-point Gauss-Legendre quadrature.
	/// The error is well below 1% for spans up to a quarter turn and grows with eccentricity over longer spans.
	pub fn length_between(&self, theta1: f64, theta2: f64) -> f64 {
		let (lower, upper) = if theta1 <= theta2 { (theta1, theta2) } else { (theta2, theta1) };
		// Rotation does not change the speed
		let speed = |theta: f64| (self.radii * DVec2::new(-theta.sin(), theta.cos())).length();
		GaussLegendre::Order5.integrate(speed, lower, upper)
	}

	/// Returns the length of the arc from its start angle to its end angle.
	pub fn length(&self) -> f64 {
		self.length_between(self.start_angle, self.end_angle)
	}

	/// Returns an inverse arc length map converting a distance travelled from the start of the arc to the corresponding angle.
	pub fn arc_length_map(&self) -> ArcLengthMap {
		let radii = self.radii;
		let speed = move |theta: f64| (radii * DVec2::new(-theta.sin(), theta.cos())).length();
		ArcLengthMap::inverse_quartic(GaussLegendre::Order5, speed, self.start_angle, self.end_angle)
	}

	/// Split the arc at the angle `theta`, which may be given modulo a full turn.
	/// Returns `None` unless `theta` lies strictly between the start and end angles, in the direction of travel.
	pub fn split(&self, theta: f64) -> Option<ArcSplit> {
		if !angle_between(theta, self.start_angle, self.end_angle) {
			return None;
		}

		// Bring `theta` into the same turn as the span so both halves keep a consistent direction
		let span = self.end_angle - self.start_angle;
		let turns = ((theta - self.start_angle.min(self.end_angle)) / TAU).floor();
		let theta = theta - turns * TAU;
		debug_assert!((theta - self.start_angle) * span >= 0.);

		let first = CenterArc { end_angle: theta, ..*self };
		let second = CenterArc { start_angle: theta, ..*self };
		Some(ArcSplit {
			point: self.position(theta),
			large_arc: [(theta - self.start_angle).abs() > PI, (self.end_angle - theta).abs() > PI],
			arcs: [first, second],
		})
	}
}
