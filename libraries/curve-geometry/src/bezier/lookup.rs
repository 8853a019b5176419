use super::*;
use crate::arc_length::ArcLengthMap;
use crate::quadrature::GaussLegendre;
use crate::utils::TValue;

/// Functionality relating to looking up properties of the `Bezier` or points along the `Bezier`.
impl Bezier {
	/// Convert a euclidean distance ratio along the `Bezier` curve to a parametric `t`-value, using the approximate inverse arc length map.
	pub fn euclidean_to_parametric(&self, ratio: f64) -> f64 {
		if ratio <= 0. {
			return 0.;
		}
		if ratio >= 1. {
			return 1.;
		}
		let map = self.arc_length_map();
		map.evaluate(ratio * map.length()).clamp(0., 1.)
	}

	/// Convert a [TValue] to a parametric `t`-value.
	pub(crate) fn t_value_to_parametric(&self, t: TValue) -> f64 {
		match t {
			TValue::Parametric(t) => {
				assert!((0.0..=1.).contains(&t));
				t
			}
			TValue::Euclidean(t) => {
				assert!((0.0..=1.).contains(&t));
				self.euclidean_to_parametric(t)
			}
		}
	}

	/// Calculate the point on the curve based on the `t`-value provided.
	pub(crate) fn unrestricted_parametric_evaluate(&self, t: f64) -> DVec2 {
		// Basis code based off of pseudocode found here: <https://pomax.github.io/bezierinfo/#explanation>.

		let t_squared = t * t;
		let one_minus_t = 1. - t;
		let squared_one_minus_t = one_minus_t * one_minus_t;

		match self.handles {
			BezierHandles::Linear => self.start.lerp(self.end, t),
			BezierHandles::Quadratic { handle } => squared_one_minus_t * self.start + 2. * one_minus_t * t * handle + t_squared * self.end,
			BezierHandles::Cubic { handle_start, handle_end } => {
				let t_cubed = t_squared * t;
				let cubed_one_minus_t = squared_one_minus_t * one_minus_t;
				cubed_one_minus_t * self.start + 3. * squared_one_minus_t * t * handle_start + 3. * one_minus_t * t_squared * handle_end + t_cubed * self.end
			}
		}
	}

	/// Calculate the coordinates of the point `t` along the curve.
	/// Expects `t` to be within the inclusive range `[0, 1]`.
	pub fn evaluate(&self, t: TValue) -> DVec2 {
		let t = self.t_value_to_parametric(t);
		self.unrestricted_parametric_evaluate(t)
	}

	/// Returns the first derivative with respect to the parametric `t`-value.
	pub fn derivative_at(&self, t: f64) -> DVec2 {
		let one_minus_t = 1. - t;
		match self.handles {
			BezierHandles::Linear => self.end - self.start,
			BezierHandles::Quadratic { handle } => 2. * (one_minus_t * (handle - self.start) + t * (self.end - handle)),
			BezierHandles::Cubic { handle_start, handle_end } => {
				3. * (one_minus_t * one_minus_t * (handle_start - self.start) + 2. * one_minus_t * t * (handle_end - handle_start) + t * t * (self.end - handle_end))
			}
		}
	}

	/// Returns the second derivative with respect to the parametric `t`-value.
	pub fn second_derivative_at(&self, t: f64) -> DVec2 {
		match self.handles {
			BezierHandles::Linear => DVec2::ZERO,
			BezierHandles::Quadratic { handle } => 2. * (self.start - 2. * handle + self.end),
			BezierHandles::Cubic { handle_start, handle_end } => 6. * ((1. - t) * (self.start - 2. * handle_start + handle_end) + t * (handle_start - 2. * handle_end + self.end)),
		}
	}

	/// Return the arc length of the curve.
	/// - Linear segments return the distance between their end points.
	/// - Quadratic segments use a closed form, which returns `0` when the curve has no quadratic term.
	/// - Cubic segments are split at their inflection points and each piece is integrated with 5-point Gauss-Legendre quadrature, with an error of about 1% or less.
	pub fn length(&self) -> f64 {
		match self.handles {
			BezierHandles::Linear => self.start.distance(self.end),
			BezierHandles::Quadratic { handle } => quadratic_length(self.start, handle, self.end),
			BezierHandles::Cubic { .. } => {
				let mut pieces = Vec::with_capacity(3);
				let mut remaining = *self;
				let mut consumed = 0.;
				for t in self.inflections().into_iter().flatten().filter(|&t| t > 0. && t < 1.) {
					// Rescale the inflection onto the remaining sub-curve
					let [piece, rest] = remaining.split(TValue::Parametric((t - consumed) / (1. - consumed)));
					pieces.push(piece);
					remaining = rest;
					consumed = t;
				}
				pieces.push(remaining);

				pieces
					.iter()
					.map(|piece| GaussLegendre::Order5.integrate(|t| piece.derivative_at(t).length(), 0., 1.))
					.sum()
			}
		}
	}

	/// Returns an inverse arc length map from a distance travelled from the start of the curve to the parametric `t`-value.
	pub fn arc_length_map(&self) -> ArcLengthMap {
		ArcLengthMap::inverse_quartic(GaussLegendre::Order5, |t| self.derivative_at(t).length(), 0., 1.)
	}
}

/// Closed form length of a quadratic, see <https://malczak.linuxpl.com/blog/quadratic-bezier-curve-length/>.
fn quadratic_length(p0: DVec2, p1: DVec2, p2: DVec2) -> f64 {
	// The speed is `sqrt(a*t^2 + b*t + c)`
	let second = p0 - 2. * p1 + p2;
	let first = 2. * (p1 - p0);
	let a = 4. * second.dot(second);
	let b = 4. * second.dot(first);
	let c = first.dot(first);
	if a < EPSILON {
		return 0.;
	}
	// The handle sits on the start point, so the speed grows linearly from zero
	if c < EPSILON {
		return a.sqrt() / 2.;
	}

	let speed_at_end = 2. * (a + b + c).sqrt();
	let a_sqrt = a.sqrt();
	let a_three_halves = 2. * a * a_sqrt;
	let speed_at_start = 2. * c.sqrt();
	let b_over_a_sqrt = b / a_sqrt;

	let numerator = 2. * a_sqrt + b_over_a_sqrt + speed_at_end;
	let denominator = b_over_a_sqrt + speed_at_start;
	if numerator <= EPSILON || denominator <= EPSILON {
		// The curve doubles back on itself, so integrate the speed on either side of the turning point, where it is linear
		let turn = (-b / (2. * a)).clamp(0., 1.);
		let speed = |t: f64| (a * t * t + b * t + c).max(0.).sqrt();
		return GaussLegendre::Order5.integrate(speed, 0., turn) + GaussLegendre::Order5.integrate(speed, turn, 1.);
	}

	(a_three_halves * speed_at_end + a_sqrt * b * (speed_at_end - speed_at_start) + (4. * c * a - b * b) * (numerator / denominator).ln()) / (4. * a_three_halves)
}
