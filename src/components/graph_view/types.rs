/// A completed render, carried as an explicit value so the export path never
/// has to scrape markup back out of the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedGraph {
	/// Id of the container element the markup is displayed under.
	pub container_id: String,
	/// Serialized SVG markup produced by the layout backend.
	pub svg: String,
}

impl RenderedGraph {
	/// File name offered when this rendering is exported.
	pub fn download_name(&self) -> String {
		format!("{}.svg", self.container_id)
	}
}
