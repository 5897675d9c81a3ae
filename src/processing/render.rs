//! Radial chord diagram rendering (SVG)

use serde::Serialize;

use super::bezier::{arc, Point};
use super::layout::{NodeLayout, NodePosition};
use super::stats::SimilarityStats;
use crate::config::{ARC_COLOR, DEFAULT_CANVAS_PX, FONT_SIZE, HIGHLIGHT_COLOR, PLOT_EXTENT, STROKE_WIDTH};
use crate::core::Edge;
use crate::error::{NetError, Result};

#[derive(Debug, Clone)]
pub struct RenderOptions {
	/// Emphasise edges above mean + 2 std
	pub highlight: bool,
	pub canvas_px: u32,
	pub stroke_width: f64,
	pub font_size: f64,
	pub arc_color: String,
	pub highlight_color: String,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			highlight: false,
			canvas_px: DEFAULT_CANVAS_PX,
			stroke_width: STROKE_WIDTH,
			font_size: FONT_SIZE,
			arc_color: ARC_COLOR.to_string(),
			highlight_color: HIGHLIGHT_COLOR.to_string(),
		}
	}
}

impl RenderOptions {
	pub fn with_highlight(highlight: bool) -> Self {
		Self {
			highlight,
			..Self::default()
		}
	}
}

/// A sampled chord with its drawing style resolved
#[derive(Debug, Clone, Serialize)]
pub struct StyledArc {
	pub w1: String,
	pub w2: String,
	pub similarity: f64,
	pub points: Vec<Point>,
	pub opacity: f64,
	pub strong: bool,
}

/// Similarity as stroke opacity; NaN and negatives are invisible
pub fn opacity(similarity: f64) -> f64 {
	if similarity.is_nan() {
		0.0
	} else {
		similarity.clamp(0.0, 1.0)
	}
}

/// Arcs and labels ready to be written out
#[derive(Debug, Clone)]
pub struct Diagram {
	pub arcs: Vec<StyledArc>,
	pub nodes: Vec<NodePosition>,
	pub stats: SimilarityStats,
	/// Set when highlighting is on
	pub threshold: Option<f64>,
	options: RenderOptions,
}

/// Lay out every edge as a Bezier chord between its two nodes.
pub fn render(edges: &[Edge], layout: &NodeLayout, options: &RenderOptions) -> Result<Diagram> {
	if layout.len() < 2 {
		return Err(NetError::EmptyGraph { nodes: layout.len() });
	}

	let stats = SimilarityStats::from_values(edges.iter().map(|e| e.cosine_similarity));
	let threshold = options.highlight.then(|| stats.highlight_threshold());

	let arcs = edges
		.iter()
		.map(|edge| -> Result<StyledArc> {
			let p0 = position_of(layout, &edge.w1)?;
			let p1 = position_of(layout, &edge.w2)?;
			let sim = edge.cosine_similarity;

			let strong = threshold.is_some_and(|t| sim > t);
			let opacity = match (threshold, strong) {
				(None, _) => opacity(sim),
				(Some(_), true) => 1.0,
				(Some(_), false) => opacity(sim * 0.5),
			};

			Ok(StyledArc {
				w1: edge.w1.clone(),
				w2: edge.w2.clone(),
				similarity: sim,
				points: arc(p0, p1),
				opacity,
				strong,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(Diagram {
		arcs,
		nodes: layout.nodes().to_vec(),
		stats,
		threshold,
		options: options.clone(),
	})
}

fn position_of(layout: &NodeLayout, word: &str) -> Result<Point> {
	layout
		.get(word)
		.map(|n| n.position)
		.ok_or_else(|| NetError::UnknownWord(word.to_string()))
}

impl Diagram {
	pub fn strong_arcs(&self) -> impl Iterator<Item = &StyledArc> {
		self.arcs.iter().filter(|a| a.strong)
	}

	/// Serialize as a standalone SVG document.
	///
	/// Plot coordinates span `[-1.25, 1.25]` on both axes with y pointing up.
	pub fn to_svg(&self) -> String {
		let opts = &self.options;
		let size = opts.canvas_px as f64;
		let scale = size / (2.0 * PLOT_EXTENT);
		let to_px = |p: Point| ((p.x + PLOT_EXTENT) * scale, (PLOT_EXTENT - p.y) * scale);
		let stroke = opts.stroke_width * size / 500.0;
		let font = opts.font_size * size / 500.0;

		let mut svg = String::new();
		svg.push_str(&format!(
			r#"<svg width="{0}" height="{0}" viewBox="0 0 {0} {0}" xmlns="http://www.w3.org/2000/svg">"#,
			opts.canvas_px
		));
		svg.push('\n');
		svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
		svg.push('\n');

		// Highlighted arcs go last so they stay on top.
		let ordered = self.arcs.iter().filter(|a| !a.strong).chain(self.strong_arcs());
		svg.push_str(r#"<g fill="none" stroke-linecap="round">"#);
		svg.push('\n');
		for styled in ordered {
			if styled.opacity <= 0.0 {
				continue;
			}
			let color = if styled.strong { &opts.highlight_color } else { &opts.arc_color };
			let points: Vec<String> = styled
				.points
				.iter()
				.map(|&p| {
					let (x, y) = to_px(p);
					format!("{:.2},{:.2}", x, y)
				})
				.collect();
			svg.push_str(&format!(
				r#"<polyline points="{}" stroke="{}" stroke-width="{:.3}" stroke-opacity="{:.4}"><title>{} - {}: {:.4}</title></polyline>"#,
				points.join(" "),
				color,
				stroke,
				styled.opacity,
				escape_xml(&styled.w1),
				escape_xml(&styled.w2),
				styled.similarity
			));
			svg.push('\n');
		}
		svg.push_str("</g>\n");

		svg.push_str(&format!(
			r#"<g font-family="sans-serif" font-size="{:.2}" font-weight="300" fill="black">"#,
			font
		));
		svg.push('\n');
		for node in &self.nodes {
			let (x, y) = to_px(node.label);
			svg.push_str(&format!(
				r#"<text x="{x:.2}" y="{y:.2}" text-anchor="{}" dominant-baseline="central" transform="rotate({:.3} {x:.2} {y:.2})">{}</text>"#,
				node.anchor.as_svg(),
				-node.label_rotation,
				escape_xml(&node.word),
			));
			svg.push('\n');
		}
		svg.push_str("</g>\n</svg>\n");

		svg
	}
}

fn escape_xml(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&apos;"),
			_ => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn triangle() -> Vec<Edge> {
		vec![
			Edge::new("a", "b", 0.9),
			Edge::new("a", "c", 0.1),
			Edge::new("b", "c", f64::NAN),
		]
	}

	#[test]
	fn two_nodes_give_one_full_arc() {
		let edges = vec![Edge::new("left", "right", 0.42)];
		let layout = NodeLayout::from_edges(&edges);
		let diagram = render(&edges, &layout, &RenderOptions::default()).unwrap();

		assert_eq!(diagram.arcs.len(), 1);
		let points = &diagram.arcs[0].points;
		assert_eq!(points.len(), 100);
		assert!(points[0].distance(layout.get("left").unwrap().position) < 1e-12);
		assert!(points[99].distance(layout.get("right").unwrap().position) < 1e-12);
		assert_eq!(diagram.arcs[0].opacity, 0.42);
	}

	#[test]
	fn fewer_than_two_nodes_is_empty_graph() {
		let layout = NodeLayout::from_edges(&[]);
		let err = render(&[], &layout, &RenderOptions::default()).unwrap_err();
		assert!(matches!(err, NetError::EmptyGraph { nodes: 0 }));

		let single = NodeLayout::circular(["solo"]);
		assert!(matches!(
			render(&[], &single, &RenderOptions::default()),
			Err(NetError::EmptyGraph { nodes: 1 })
		));
	}

	#[test]
	fn nodes_without_edges_still_render() {
		let layout = NodeLayout::circular(["a", "b", "c"]);
		let diagram = render(&[], &layout, &RenderOptions::default()).unwrap();
		assert!(diagram.arcs.is_empty());
		assert!(diagram.to_svg().contains(">c</text>"));
	}

	#[test]
	fn nan_similarity_is_transparent() {
		let edges = triangle();
		let layout = NodeLayout::from_edges(&edges);
		let diagram = render(&edges, &layout, &RenderOptions::default()).unwrap();
		assert_eq!(diagram.arcs[2].opacity, 0.0);
		assert_eq!(opacity(-0.3), 0.0);
		assert_eq!(opacity(1.5), 1.0);
	}

	#[test]
	fn highlight_marks_outliers() {
		let mut edges: Vec<Edge> = (0..10)
			.map(|i| Edge::new(format!("n{i}"), format!("n{}", i + 1), 0.1))
			.collect();
		edges.push(Edge::new("n0", "n5", 0.95));
		let layout = NodeLayout::from_edges(&edges);
		let diagram = render(&edges, &layout, &RenderOptions::with_highlight(true)).unwrap();

		let stats = SimilarityStats::from_values(edges.iter().map(|e| e.cosine_similarity));
		assert_eq!(diagram.threshold, Some(stats.mean + 2.0 * stats.std_dev));

		let strong: Vec<&StyledArc> = diagram.strong_arcs().collect();
		assert_eq!(strong.len(), 1);
		assert_eq!(strong[0].opacity, 1.0);
		assert!((diagram.arcs[0].opacity - 0.05).abs() < 1e-12);
	}

	#[test]
	fn unknown_edge_word_fails() {
		let layout = NodeLayout::circular(["a", "b"]);
		let edges = vec![Edge::new("a", "zzz", 0.5)];
		assert!(matches!(
			render(&edges, &layout, &RenderOptions::default()),
			Err(NetError::UnknownWord(w)) if w == "zzz"
		));
	}

	#[test]
	fn svg_escapes_words() {
		let edges = vec![Edge::new("R&D", "<tag>", 0.5)];
		let layout = NodeLayout::from_edges(&edges);
		let svg = render(&edges, &layout, &RenderOptions::default()).unwrap().to_svg();
		assert!(svg.starts_with("<svg"));
		assert!(svg.contains("R&amp;D"));
		assert!(svg.contains("&lt;tag&gt;"));
		assert_eq!(svg.matches("<polyline").count(), 1);
	}
}
