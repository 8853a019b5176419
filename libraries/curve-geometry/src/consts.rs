// Implementation constants:

/// Tolerance under which two geometric quantities are considered equal.
pub const EPSILON: f64 = 1e-10;
/// Maximum absolute difference used when comparing values in tests.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;

/// Iteration cap of the bisection search.
pub const BISECTION_MAX_ITERATIONS: usize = 100;
/// Convergence threshold of the bisection search, relative to the bracket width and to the range of function values.
pub const BISECTION_RELATIVE_TOLERANCE: f64 = 0.001;

/// Smallest minimum step the flattener accepts, keeping the step loop finite when `min_step` is zero or negative.
pub const MIN_STEP_FLOOR: f64 = 1e-6;

/// Number of quadratic segments used to approximate an elliptical arc, regardless of its span.
pub const ELLIPSE_QUADRATIC_STEPS: usize = 16;
/// Number of line segments used to flatten a full turn of an ellipse.
pub const ELLIPSE_SEGMENTS_PER_TURN: f64 = 64.;

// Method argument defaults:

/// Default maximum deviation between a curve and its flattened polyline.
pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// Default smallest parameter distance the flattener advances by in one step.
pub const DEFAULT_MIN_STEP: f64 = 1e-4;
