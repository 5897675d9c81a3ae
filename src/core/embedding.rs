//! Vector arithmetic shared by the network builder

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Euclidean magnitude of every row
pub fn row_norms(vectors: ArrayView2<'_, f64>) -> Array1<f64> {
	vectors.map_axis(Axis(1), |row| row.dot(&row).sqrt())
}

/// Cosine similarity from precomputed norms. Zero norms yield NaN.
pub fn cosine(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>, norm_a: f64, norm_b: f64) -> f64 {
	a.dot(&b) / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::array;

	#[test]
	fn norms_per_row() {
		let v = array![[3.0, 4.0], [0.0, 0.0], [1.0, 0.0]];
		let norms = row_norms(v.view());
		assert_eq!(norms.to_vec(), vec![5.0, 0.0, 1.0]);
	}

	#[test]
	fn cosine_of_zero_vector_is_nan() {
		let a = array![0.0, 0.0];
		let b = array![1.0, 0.0];
		assert!(cosine(a.view(), b.view(), 0.0, 1.0).is_nan());
	}
}
