//! Circular node placement for radial diagrams

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::Serialize;

use super::bezier::Point;
use crate::config::{RADIUS, TEXT_OFFSET};
use crate::core::Edge;

/// Which end of a label sits at its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
	Start,
	End,
}

impl TextAnchor {
	pub fn as_svg(self) -> &'static str {
		match self {
			TextAnchor::Start => "start",
			TextAnchor::End => "end",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePosition {
	pub word: String,
	pub position: Point,
	pub label: Point,
	/// Polar angle in radians
	pub angle: f64,
	/// Label rotation in degrees, kept upright on the left half
	pub label_rotation: f64,
	pub anchor: TextAnchor,
}

impl NodePosition {
	fn place(word: String, i: usize, n: usize) -> Self {
		let angle = 2.0 * PI / n as f64 * i as f64;
		let (sin, cos) = angle.sin_cos();
		let position = Point::new(cos * RADIUS, sin * RADIUS);
		let label = Point::new(cos * (RADIUS + TEXT_OFFSET), sin * (RADIUS + TEXT_OFFSET));

		let degrees = position.y.atan2(position.x).to_degrees();
		let label_rotation = if position.x < 0.0 { degrees - 180.0 } else { degrees };
		let anchor = if position.x > 0.0 { TextAnchor::Start } else { TextAnchor::End };

		Self {
			word,
			position,
			label,
			angle,
			label_rotation,
			anchor,
		}
	}
}

/// Node positions in circle order, addressable by word
#[derive(Debug, Clone, Default)]
pub struct NodeLayout {
	nodes: Vec<NodePosition>,
	index: HashMap<String, usize>,
}

impl NodeLayout {
	/// Place distinct `words` around the unit circle in the given order.
	/// Repeated words keep their first slot.
	pub fn circular<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut ordered: Vec<String> = Vec::new();
		let mut index = HashMap::new();
		for word in words {
			let word = word.into();
			if !index.contains_key(&word) {
				index.insert(word.clone(), ordered.len());
				ordered.push(word);
			}
		}

		let n = ordered.len();
		let nodes = ordered
			.into_iter()
			.enumerate()
			.map(|(i, word)| NodePosition::place(word, i, n))
			.collect();

		Self { nodes, index }
	}

	/// Nodes in order of first appearance across the `w1` column, then the `w2` column.
	pub fn from_edges(edges: &[Edge]) -> Self {
		let words = edges
			.iter()
			.map(|e| e.w1.as_str())
			.chain(edges.iter().map(|e| e.w2.as_str()));
		Self::circular(words)
	}

	pub fn get(&self, word: &str) -> Option<&NodePosition> {
		self.index.get(word).map(|&i| &self.nodes[i])
	}

	pub fn nodes(&self) -> &[NodePosition] {
		&self.nodes
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
