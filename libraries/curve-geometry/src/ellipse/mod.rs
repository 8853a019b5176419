mod core;
mod solvers;
mod transform;

use glam::DVec2;

/// An elliptical arc in endpoint form, as found in the SVG `A` path command.
/// The four arcs joining `start` and `end` on an ellipse with the given radii and rotation are disambiguated by the `large_arc` and `sweep` flags.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticalArc {
	pub start: DVec2,
	pub end: DVec2,
	/// Radii along the ellipse's own x and y axes, before rotation.
	pub radii: DVec2,
	/// Rotation of the ellipse's x axis in radians.
	pub rotation: f64,
	/// Take the arc which spans more than 180°.
	pub large_arc: bool,
	/// Travel in the direction of increasing angle (counter-clockwise in a y-up coordinate system).
	pub sweep: bool,
}

/// An elliptical arc in center form.
/// `start_angle` lies in `[0, 2π)` and `end_angle` lies within a full turn of it, so `end_angle - start_angle` encodes both the direction and the span of the arc.
/// Angles are measured on the unit circle before the ellipse is stretched by its radii and rotated.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterArc {
	pub center: DVec2,
	pub radii: DVec2,
	pub rotation: f64,
	pub sweep: bool,
	pub start_angle: f64,
	pub end_angle: f64,
}

/// The result of splitting a [CenterArc] at an angle strictly within its span.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ArcSplit {
	/// Position on the ellipse at the split angle.
	pub point: DVec2,
	/// Whether each resulting sub-arc spans more than 180°.
	pub large_arc: [bool; 2],
	/// The two sub-arcs, meeting at `point`.
	pub arcs: [CenterArc; 2],
}
