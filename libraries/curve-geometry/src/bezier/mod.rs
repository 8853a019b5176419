mod core;
mod flatten;
mod lookup;
mod solvers;
mod structs;
mod transform;

use crate::consts::*;
use glam::DVec2;
use std::fmt::{Debug, Formatter, Result};
pub use structs::*;

/// The control points between the end points of a segment, which also determine its degree.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BezierHandles {
	/// A straight segment.
	Linear,
	Quadratic {
		handle: DVec2,
	},
	Cubic {
		/// Control point the curve leaves the start point towards.
		handle_start: DVec2,
		/// Control point the curve arrives at the end point from.
		handle_end: DVec2,
	},
}

impl BezierHandles {
	pub fn is_cubic(&self) -> bool {
		matches!(self, Self::Cubic { .. })
	}

	/// The control point next to the start point, which is the only one of a quadratic.
	pub fn start(&self) -> Option<DVec2> {
		match *self {
			Self::Linear => None,
			Self::Quadratic { handle } => Some(handle),
			Self::Cubic { handle_start, .. } => Some(handle_start),
		}
	}

	/// The control point next to the end point. Only cubics have a separate one.
	pub fn end(&self) -> Option<DVec2> {
		if let Self::Cubic { handle_end, .. } = *self { Some(handle_end) } else { None }
	}

	/// The handles of the same curve traversed from its end to its start.
	#[must_use]
	pub fn reversed(self) -> Self {
		if let Self::Cubic { handle_start, handle_end } = self {
			Self::Cubic {
				handle_start: handle_end,
				handle_end: handle_start,
			}
		} else {
			self
		}
	}
}

/// A linear, quadratic or cubic Bezier segment in the plane.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bezier {
	pub start: DVec2,
	pub end: DVec2,
	pub handles: BezierHandles,
}

impl Debug for Bezier {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		let mut debug = f.debug_struct("Bezier");
		debug.field("start", &self.start);
		match self.handles {
			BezierHandles::Linear => {}
			BezierHandles::Quadratic { handle } => {
				debug.field("handle", &handle);
			}
			BezierHandles::Cubic { handle_start, handle_end } => {
				debug.field("handle_start", &handle_start).field("handle_end", &handle_end);
			}
		}
		debug.field("end", &self.end).finish()
	}
}
