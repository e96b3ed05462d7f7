use layout::backends::svg::SVGWriter;
use layout::gv::{DotParser, GraphBuilder};
use log::warn;
use thiserror::Error;

use super::config::DEFAULT_ENGINE;

// engines:
// - dot: reasonable but elongated
// - fdp: good fit but tons of crossing lines
// - osage: boxes tightly packed, no layout on lines
//
// - neato: overlapping clusters/groups
// - patchwork: one packed box, no visible lines
// - circo: sparse rectilinear layout, no clusters/groups
// - twopi: circo-like with diagonals, no clusters/groups
pub const KNOWN_ENGINES: &[&str] = &[
	"dot",
	"fdp",
	"osage",
	"neato",
	"patchwork",
	"circo",
	"twopi",
];

/// Rejection raised by the layout backend. Graph description text is never
/// inspected on this side of the seam.
#[derive(Debug, Error)]
pub enum RenderError {
	#[error("failed to parse graph description: {0}")]
	Parse(String),
}

/// The rendering-collaborator contract: engine name and raw graph
/// description in, serialized SVG out.
pub trait GraphRenderer {
	/// Lay out `text` with the engine named `engine` and serialize to SVG.
	fn render_dot(&self, engine: &str, text: &str) -> Result<String, RenderError>;
}

/// SVG renderer backed by the `layout` crate, which does all parsing and
/// layout. The backend ships a single layout algorithm, so every engine
/// name maps to it; unrecognized names log a warning on the way through.
pub struct SvgRenderer;

impl GraphRenderer for SvgRenderer {
	fn render_dot(&self, engine: &str, text: &str) -> Result<String, RenderError> {
		if !KNOWN_ENGINES.contains(&engine) {
			warn!("Unknown engine '{engine}', laying out as '{DEFAULT_ENGINE}'");
		}

		let mut parser = DotParser::new(text);
		let graph = parser.process().map_err(RenderError::Parse)?;

		let mut builder = GraphBuilder::new();
		builder.visit_graph(&graph);
		let mut visual = builder.get();

		let mut writer = SVGWriter::new();
		visual.do_it(false, false, false, &mut writer);
		Ok(writer.finalize())
	}
}
