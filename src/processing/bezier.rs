//! Bezier chords between nodes on the unit circle
//!
//! Control points are pulled toward the centre by a divisor picked from the
//! straight-line distance between the endpoints: close nodes get a tight
//! bend, far nodes a flatter one.

use std::ops::{Add, Div, Mul, Sub};

use serde::Serialize;

use crate::config::BEZIER_SAMPLES;

/// Pull divisors, one per distance bin
pub const PULL_DIVISORS: [f64; 4] = [1.2, 1.5, 1.8, 2.1];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Self) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}

	/// Affine combination `(1 - t) * self + t * other`
	pub fn lerp(self, other: Self, t: f64) -> Self {
		self * (1.0 - t) + other * t
	}
}

impl Add for Point {
	type Output = Self;
	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Self;
	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Self;
	fn mul(self, rhs: f64) -> Self {
		Self::new(self.x * rhs, self.y * rhs)
	}
}

impl Div<f64> for Point {
	type Output = Self;
	fn div(self, rhs: f64) -> Self {
		Self::new(self.x / rhs, self.y / rhs)
	}
}

/// Bin boundaries: 0, octagon side, quarter turn, three-eighths turn, diameter.
pub fn distance_bins() -> [f64; 5] {
	let half_root2 = std::f64::consts::SQRT_2 / 2.0;
	let east = Point::new(1.0, 0.0);
	[
		0.0,
		east.distance(Point::new(half_root2, half_root2)),
		std::f64::consts::SQRT_2,
		east.distance(Point::new(-half_root2, half_root2)),
		2.0,
	]
}

/// Index of the bin whose upper boundary is the first one `>= d`.
///
/// Distances past the diameter (rounding) land in the last bin. A zero
/// distance (a word linked to itself) lands in the first, tightest bin.
pub fn distance_bin(d: f64) -> usize {
	let bins = distance_bins();
	bins[1..]
		.iter()
		.position(|&upper| d <= upper)
		.unwrap_or(PULL_DIVISORS.len() - 1)
}

pub fn pull_divisor(d: f64) -> f64 {
	PULL_DIVISORS[distance_bin(d)]
}

/// Evaluate a Bezier curve at `t` by repeated affine combination.
pub fn de_casteljau(control: &[Point], t: f64) -> Point {
	let mut points = control.to_vec();
	let n = points.len();
	for r in 1..n {
		for k in 0..(n - r) {
			points[k] = points[k].lerp(points[k + 1], t);
		}
	}
	points.first().copied().unwrap_or_default()
}

/// Sample a Bezier curve at `samples` evenly spaced parameters over `[0, 1]`.
pub fn bezier_curve(control: &[Point], samples: usize) -> Vec<Point> {
	match samples {
		0 => Vec::new(),
		1 => vec![de_casteljau(control, 0.0)],
		_ => {
			let step = (samples - 1) as f64;
			(0..samples).map(|k| de_casteljau(control, k as f64 / step)).collect()
		}
	}
}

/// Control polygon `[P0, P0/div, P1/div, P1]` for a chord from `p0` to `p1`
pub fn control_points(p0: Point, p1: Point) -> [Point; 4] {
	let divisor = pull_divisor(p0.distance(p1));
	[p0, p0 / divisor, p1 / divisor, p1]
}

/// Sampled chord from `p0` to `p1`
pub fn arc(p0: Point, p1: Point) -> Vec<Point> {
	bezier_curve(&control_points(p0, p1), BEZIER_SAMPLES)
}
