use crate::consts::{DEFAULT_MIN_STEP, DEFAULT_TOLERANCE};

/// Struct to represent optional parameters that can be passed to the `flatten` function.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlattenOptions {
	/// Maximum allowed distance between the curve and the polyline. The default value is `0.01`.
	pub tolerance: f64,
	/// Signed distance by which the polyline is displaced along the curve's right-hand normal, used to trace one side of a stroke.
	/// A negative value traces the left-hand side. The default value is `0`, which flattens the curve itself.
	pub offset: f64,
	/// Smallest step, as a fraction of the whole curve's parameter range, that the flattener advances by.
	/// This bounds the number of points produced for near-degenerate curves or extremely tight tolerances. Values below `1e-6` are raised to it. The default value is `0.0001`.
	pub min_step: f64,
}

impl Default for FlattenOptions {
	fn default() -> Self {
		Self {
			tolerance: DEFAULT_TOLERANCE,
			offset: 0.,
			min_step: DEFAULT_MIN_STEP,
		}
	}
}

impl FlattenOptions {
	/// Options that flatten the curve itself with the given tolerance.
	pub fn with_tolerance(tolerance: f64) -> Self {
		Self { tolerance, ..Default::default() }
	}

	/// Options that trace one side of a stroke at the signed distance `offset` with the given tolerance.
	pub fn stroke(tolerance: f64, offset: f64) -> Self {
		Self { tolerance, offset, ..Default::default() }
	}
}
