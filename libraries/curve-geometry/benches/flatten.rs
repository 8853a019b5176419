use criterion::{criterion_group, criterion_main, Criterion};
use curve_geometry::{Bezier, EllipticalArc, FlattenOptions, PathCommand};
use glam::DVec2;
use std::hint::black_box;

macro_rules! generate_benchmarks {
	($( $name:literal => [$( $coordinate:expr ),* $(,)?] ),* $(,)?) => {
		fn flattening_bench(c: &mut Criterion) {
			$(
				let bezier = Bezier::from_cubic_coordinates($( $coordinate ),*);
				for tolerance in [0.1, 0.01, 0.001] {
					c.bench_function(&format!("flatten {} at {tolerance}", $name), |b| {
						let mut commands: Vec<PathCommand> = Vec::new();
						b.iter(|| {
							commands.clear();
							black_box(bezier).flatten(&mut commands, FlattenOptions::with_tolerance(tolerance));
						});
					});
				}
			)*
		}

		fn stroking_bench(c: &mut Criterion) {
			$(
				let bezier = Bezier::from_cubic_coordinates($( $coordinate ),*);
				c.bench_function(concat!("stroke ", $name), |b| {
					let mut commands: Vec<PathCommand> = Vec::new();
					b.iter(|| {
						commands.clear();
						black_box(bezier).flatten(&mut commands, FlattenOptions::stroke(0.01, 5.));
						black_box(bezier).flatten(&mut commands, FlattenOptions::stroke(0.01, -5.));
					});
				});
			)*
		}

		fn length_bench(c: &mut Criterion) {
			$(
				let bezier = Bezier::from_cubic_coordinates($( $coordinate ),*);
				c.bench_function(concat!("length ", $name), |b| b.iter(|| black_box(bezier).length()));
				c.bench_function(concat!("arc length map ", $name), |b| b.iter(|| black_box(bezier).arc_length_map()));
			)*
		}
	};
}

generate_benchmarks! {
	"convex" => [0., 0., 0., 100., 100., 100., 100., 0.],
	"one inflection" => [0., 0., 50., 100., 50., -100., 100., 0.],
	"two inflections" => [0., 0., 10., 20., 0., 10., 10., 0.],
	"loop" => [0., 0., 100., 100., 0., 100., 100., 0.],
}

fn ellipse_bench(c: &mut Criterion) {
	let arc = EllipticalArc::new(DVec2::new(100., 0.), DVec2::new(100., 40.), 0.3, true, true, DVec2::new(0., 40.));
	c.bench_function("ellipse to center", |b| b.iter(|| black_box(arc).to_center()));
	c.bench_function("ellipse flatten", |b| {
		let mut commands: Vec<PathCommand> = Vec::new();
		b.iter(|| {
			commands.clear();
			black_box(arc).flatten(&mut commands);
		});
	});
	c.bench_function("ellipse to quadratics", |b| {
		let mut commands: Vec<PathCommand> = Vec::new();
		b.iter(|| {
			commands.clear();
			black_box(arc).to_quadratics(&mut commands);
		});
	});
}

criterion_group!(benches, flattening_bench, stroking_bench, length_bench, ellipse_bench);
criterion_main!(benches);
