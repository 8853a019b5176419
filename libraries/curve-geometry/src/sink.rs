use glam::DVec2;

/// A destination for the segments produced while flattening or approximating curves.
/// The current point of the sink is expected to already sit at the start of the segment being emitted, so only the following points are appended.
pub trait PathSink {
	/// Append a straight line from the current point to `to`.
	fn line_to(&mut self, to: DVec2);
	/// Append a quadratic Bezier from the current point to `to` with the control point `handle`.
	fn quad_to(&mut self, handle: DVec2, to: DVec2);
}

/// A recorded drawing command, as collected by the `Vec<PathCommand>` sink.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
	LineTo(DVec2),
	QuadTo { handle: DVec2, end: DVec2 },
}

impl PathCommand {
	/// The point this command ends at.
	pub fn end(&self) -> DVec2 {
		match *self {
			PathCommand::LineTo(end) | PathCommand::QuadTo { end, .. } => end,
		}
	}
}

impl PathSink for Vec<PathCommand> {
	fn line_to(&mut self, to: DVec2) {
		self.push(PathCommand::LineTo(to));
	}

	fn quad_to(&mut self, handle: DVec2, end: DVec2) {
		self.push(PathCommand::QuadTo { handle, end });
	}
}

#[cfg(feature = "kurbo")]
impl PathSink for kurbo::BezPath {
	fn line_to(&mut self, to: DVec2) {
		kurbo::BezPath::line_to(self, kurbo::Point::new(to.x, to.y));
	}

	fn quad_to(&mut self, handle: DVec2, to: DVec2) {
		kurbo::BezPath::quad_to(self, kurbo::Point::new(handle.x, handle.y), kurbo::Point::new(to.x, to.y));
	}
}
