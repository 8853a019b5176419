//! Approximate arc-length parametrization following M. Walter, A. Fournier, "Approximate Arc Length Parametrization", SIBGRAPI 1996.
//! See <https://www.visgraf.impa.br/sibgrapi96/trabs/pdf/a14.pdf>.

use crate::quadrature::{bisection, GaussLegendre};

/// A polynomial approximation of the mapping between a curve parameter and the cumulative arc length, in either direction.
/// The map is built from a handful of samples of the true integral and is only valid within the domain it was built for.
/// When the speed function is non-negative the map is assumed to be monotonic.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ArcLengthMap {
	/// Coefficients of `s`, `s^2`, `s^3` and `s^4` where `s` is the input normalized to `[0, 1]`. There is no constant term.
	coefficients: [f64; 4],
	input_offset: f64,
	input_scale: f64,
	output_offset: f64,
	output_scale: f64,
	domain: [f64; 2],
	length: f64,
}

impl ArcLengthMap {
	/// Build the forward map `y(x)`, the arc length from `min` to parameter `x`, from the `speed` (the norm of the curve's derivative).
	/// The lengths are signed, negative when `max < min`.
	/// The integral is sampled at a third, two thirds and the whole of the domain and fitted with the unique cubic through those points and the origin.
	pub fn forward(quadrature: GaussLegendre, speed: impl Fn(f64) -> f64, min: f64, max: f64) -> Self {
		let integral = |fraction: f64| quadrature.integrate(&speed, min, min + (max - min) * fraction);
		let [y1, y2, y3] = [integral(1. / 3.), integral(2. / 3.), integral(1.)];

		// With samples y(0) = 0, y(1/3) = y1, y(2/3) = y2 and y(1) = y3 of `y(s) = a*s^3 + b*s^2 + c*s`:
		// [y1; y2; y3] = [1/27, 1/9, 1/3; 8/27, 4/9, 2/3; 1, 1, 1] * [a; b; c]
		// which inverts to
		// [a; b; c] = 0.5 * [27, -27, 9; -45, 36, -9; 18, -9, 2] * [y1; y2; y3]
		let a = 13.5 * y1 - 13.5 * y2 + 4.5 * y3;
		let b = -22.5 * y1 + 18. * y2 - 4.5 * y3;
		let c = 9. * y1 - 4.5 * y2 + y3;

		Self {
			coefficients: [c, b, a, 0.],
			input_offset: min,
			input_scale: reciprocal(max - min),
			output_offset: 0.,
			output_scale: 1.,
			domain: [min, max],
			length: y3.abs(),
		}
	}

	/// Build the inverse map `x(y)` from an arc length `y` to the parameter `x`, using a cubic.
	/// The parameter range may run backwards (`max < min`), the lengths in the domain are always non-negative.
	/// The parameters at a third and two thirds of the total length are located by bisection against the forward integral.
	pub fn inverse_cubic(quadrature: GaussLegendre, speed: impl Fn(f64) -> f64, min: f64, max: f64) -> Self {
		let integral = |fraction: f64| quadrature.integrate(&speed, min, min + (max - min) * fraction);
		let total = integral(1.);
		let x1 = bisection(integral, total / 3., 0., 1.);
		let x2 = bisection(integral, 2. * total / 3., 0., 1.);
		let x3 = 1.;

		// Same system as the forward map, with the roles of `x` and `y` exchanged
		let a = (27. * x1 - 27. * x2 + 9. * x3) / 2.;
		let b = (-45. * x1 + 36. * x2 - 9. * x3) / 2.;
		let c = (18. * x1 - 9. * x2 + 2. * x3) / 2.;

		Self::inverse([c, b, a, 0.], total, min, max)
	}

	/// Build the inverse map `x(y)` from an arc length `y` to the parameter `x`, using a quartic.
	/// More accurate than [ArcLengthMap::inverse_cubic] at the cost of one extra bisection.
	pub fn inverse_quartic(quadrature: GaussLegendre, speed: impl Fn(f64) -> f64, min: f64, max: f64) -> Self {
		let integral = |fraction: f64| quadrature.integrate(&speed, min, min + (max - min) * fraction);
		let total = integral(1.);
		let x1 = bisection(integral, total / 4., 0., 1.);
		let x2 = bisection(integral, total / 2., 0., 1.);
		let x3 = bisection(integral, 3. * total / 4., 0., 1.);
		let x4 = 1.;

		// With samples at s = 1/4, 1/2, 3/4 and 1 of `x(s) = a*s^4 + b*s^3 + c*s^2 + d*s`:
		// [x1; x2; x3; x4] = [1/256, 1/64, 1/16, 1/4; 1/16, 1/8, 1/4, 1/2; 81/256, 27/64, 9/16, 3/4; 1, 1, 1, 1] * [a; b; c; d]
		// which inverts to
		// [a; b; c; d] = 1/3 * [-128, 192, -128, 32; 288, -384, 224, -48; -208, 228, -112, 22; 48, -36, 16, -3] * [x1; x2; x3; x4]
		let a = (-128. * x1 + 192. * x2 - 128. * x3 + 32. * x4) / 3.;
		let b = (288. * x1 - 384. * x2 + 224. * x3 - 48. * x4) / 3.;
		let c = (-208. * x1 + 228. * x2 - 112. * x3 + 22. * x4) / 3.;
		let d = (48. * x1 - 36. * x2 + 16. * x3 - 3. * x4) / 3.;

		Self::inverse([d, c, b, a], total, min, max)
	}

	fn inverse(coefficients: [f64; 4], total: f64, min: f64, max: f64) -> Self {
		Self {
			coefficients,
			input_offset: 0.,
			input_scale: reciprocal(total.abs()),
			output_offset: min,
			output_scale: max - min,
			domain: [0., total.abs()],
			length: total.abs(),
		}
	}

	/// Evaluate the map. Inputs outside of [ArcLengthMap::domain] are extrapolated and not meaningful.
	pub fn evaluate(&self, value: f64) -> f64 {
		let s = (value - self.input_offset) * self.input_scale;
		let [c1, c2, c3, c4] = self.coefficients;
		let polynomial = s * (c1 + s * (c2 + s * (c3 + s * c4)));
		self.output_offset + self.output_scale * polynomial
	}

	/// The input range the map was built for: the parameter range for a forward map, `[0, length]` for an inverse map.
	pub fn domain(&self) -> [f64; 2] {
		self.domain
	}

	/// Total arc length over the domain.
	pub fn length(&self) -> f64 {
		self.length
	}
}

// A zero-width range collapses the normalized input to 0 instead of dividing by zero
fn reciprocal(value: f64) -> f64 {
	if value == 0. {
		0.
	} else {
		value.recip()
	}
}
