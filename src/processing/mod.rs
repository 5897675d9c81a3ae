//! Radial layout and diagram rendering

pub mod bezier;
pub mod layout;
pub mod render;
pub mod stats;

pub use layout::NodeLayout;
pub use render::{render, Diagram, RenderOptions};
pub use stats::SimilarityStats;
