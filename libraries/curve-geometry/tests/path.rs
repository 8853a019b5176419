use curve_geometry::{angle_between, Bezier, EllipticalArc, FlattenOptions, PathCommand, PathSink, TValue};
use glam::DVec2;
use pretty_assertions::assert_eq;
use std::f64::consts::PI;

/// Segments of a rounded tab shape, drawn into a single sink one after another.
enum Segment {
	Curve(Bezier),
	Arc(EllipticalArc),
}

impl Segment {
	fn start(&self) -> DVec2 {
		match self {
			Segment::Curve(bezier) => bezier.start,
			Segment::Arc(arc) => arc.start,
		}
	}

	fn end(&self) -> DVec2 {
		match self {
			Segment::Curve(bezier) => bezier.end,
			Segment::Arc(arc) => arc.end,
		}
	}

	fn flatten(&self, sink: &mut impl PathSink) {
		match self {
			Segment::Curve(bezier) => bezier.flatten(sink, FlattenOptions::with_tolerance(0.05)),
			Segment::Arc(arc) => arc.flatten(sink),
		}
	}
}

fn rounded_tab() -> Vec<Segment> {
	vec![
		Segment::Curve(Bezier::from_linear_coordinates(0., 0., 100., 0.)),
		Segment::Arc(EllipticalArc::new(DVec2::new(100., 0.), DVec2::splat(20.), 0., false, true, DVec2::new(120., 20.))),
		Segment::Curve(Bezier::from_cubic_coordinates(120., 20., 120., 60., 60., 40., 60., 80.)),
		Segment::Curve(Bezier::from_quadratic_coordinates(60., 80., 0., 80., 0., 0.)),
	]
}

#[test]
fn segments_join_into_one_polyline() {
	let segments = rounded_tab();
	let mut commands: Vec<PathCommand> = Vec::new();
	let mut ends = Vec::new();
	for segment in &segments {
		let before = commands.len();
		segment.flatten(&mut commands);
		assert!(commands.len() > before, "every segment contributes at least one point");
		ends.push(commands.last().map(PathCommand::end));
	}

	let expected: Vec<Option<DVec2>> = segments.iter().map(|segment| Some(segment.end())).collect();
	assert_eq!(ends, expected);
	assert!(segments.windows(2).all(|pair| pair[0].end() == pair[1].start()));
	assert!(commands.iter().all(|command| matches!(command, PathCommand::LineTo(_))));
}

#[test]
fn arcs_as_quadratics_share_the_sink() {
	let arc = EllipticalArc::new(DVec2::new(10., 0.), DVec2::new(10., 5.), 0., false, true, DVec2::new(-10., 0.));
	let center = arc.to_center();
	assert!(center.center.abs_diff_eq(DVec2::ZERO, 1e-9));

	let mut commands = vec![PathCommand::LineTo(arc.start)];
	arc.to_quadratics(&mut commands);
	assert_eq!(commands.len(), 17);
	assert_eq!(commands.last().map(PathCommand::end), Some(arc.end));

	// Each quadratic stays close to the ellipse `(x/10)^2 + (y/5)^2 = 1` at its quarter points
	for pair in commands.windows(2) {
		let (start, PathCommand::QuadTo { handle, end }) = (pair[0].end(), pair[1]) else {
			panic!("Expected quadratic segments after the first point")
		};
		let quadratic = Bezier::from_quadratic_dvec2(start, handle, end);
		for t in [0.25, 0.5, 0.75] {
			let point = quadratic.evaluate(TValue::Parametric(t));
			let implicit = (point.x / 10.).powi(2) + (point.y / 5.).powi(2);
			assert!((implicit - 1.).abs() < 1e-3, "{point} is off the ellipse");
		}
	}
}

#[test]
fn euclidean_parameters_space_points_evenly() {
	let bezier = Bezier::from_cubic_coordinates(0., 0., 0., 100., 100., 100., 100., 0.);
	let length = bezier.length();
	assert!((length - 200.).abs() < 1.);

	let points: Vec<DVec2> = (0..=10).map(|step| bezier.evaluate(TValue::Euclidean(step as f64 / 10.))).collect();
	assert_eq!(points.first(), Some(&bezier.start));
	assert_eq!(points.last(), Some(&bezier.end));
	for pair in points.windows(2) {
		let spacing = pair[0].distance(pair[1]);
		assert!((spacing - length / 10.).abs() < 0.15 * length / 10., "uneven spacing {spacing}");
	}
}

#[test]
fn arc_length_map_walks_an_ellipse() {
	let arc = EllipticalArc::new(DVec2::new(2., 0.), DVec2::new(2., 1.), 0., false, true, DVec2::new(0., 1.));
	let center = arc.to_center();
	let map = center.arc_length_map();
	assert!((map.length() - 2.422112).abs() < 1e-4);
	assert_eq!(map.domain(), [0., map.length()]);

	let start = map.evaluate(0.);
	let end = map.evaluate(map.length());
	assert!(center.position(start).abs_diff_eq(arc.start, 1e-9));
	assert!(center.position(end).abs_diff_eq(arc.end, 1e-3));

	// Halfway along the arc the length travelled from either end agrees
	let middle = map.evaluate(map.length() / 2.);
	let first_half = center.length_between(center.start_angle, middle);
	let second_half = center.length_between(middle, center.end_angle);
	assert!((first_half - second_half).abs() < 0.01 * map.length());
	assert!(angle_between(middle, 0., PI / 2.));
}
