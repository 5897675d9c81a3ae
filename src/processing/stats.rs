//! Summary statistics over edge similarities

use serde::Serialize;

/// Mean and spread of the finite similarity values (NaN edges are left out)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityStats {
	pub count: usize,
	pub mean: f64,
	/// Sample standard deviation (n - 1 denominator); 0 with fewer than two values
	pub std_dev: f64,
	pub min: f64,
	pub max: f64,
}

impl SimilarityStats {
	pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
		let finite: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
		let count = finite.len();

		if count == 0 {
			return Self {
				count,
				mean: f64::NAN,
				std_dev: 0.0,
				min: f64::NAN,
				max: f64::NAN,
			};
		}

		let mean = finite.iter().sum::<f64>() / count as f64;
		let std_dev = if count > 1 {
			let ss: f64 = finite.iter().map(|v| (v - mean).powi(2)).sum();
			(ss / (count - 1) as f64).sqrt()
		} else {
			0.0
		};
		let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
		let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

		Self {
			count,
			mean,
			std_dev,
			min,
			max,
		}
	}

	/// Similarities strictly above this are drawn as highlighted
	pub fn highlight_threshold(&self) -> f64 {
		self.mean + 2.0 * self.std_dev
	}
}
