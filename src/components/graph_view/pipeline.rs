use log::{debug, info};
use thiserror::Error;

use super::config::RenderConfig;
use super::fetch::{FetchError, TextFetcher};
use super::render::{GraphRenderer, RenderError};
use super::types::RenderedGraph;

/// Id of the container element the rendered SVG is displayed under.
pub const GRAPH_CONTAINER_ID: &str = "graph";

/// Anything that can stop a load: the fetch failing, or the layout backend
/// rejecting the fetched text.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error(transparent)]
	Fetch(#[from] FetchError),
	#[error(transparent)]
	Render(#[from] RenderError),
}

/// Fetch the graph description named by `config` and lay it out as SVG.
///
/// Issues exactly one fetch of `config.source_path`; on success the fetched
/// text and `config.engine_name` are handed to the renderer untouched. A
/// failed fetch short-circuits before the renderer is ever invoked.
pub async fn load_and_render(
	config: &RenderConfig,
	fetcher: &impl TextFetcher,
	renderer: &impl GraphRenderer,
) -> Result<RenderedGraph, LoadError> {
	info!("Fetching '{}'", config.source_path);
	let text = fetcher.fetch_text(&config.source_path).await?;
	debug!("Loaded graph description:\n{text}");

	info!("Rendering using engine '{}'", config.engine_name);
	let svg = renderer.render_dot(&config.engine_name, &text)?;
	Ok(RenderedGraph {
		container_id: GRAPH_CONTAINER_ID.to_string(),
		svg,
	})
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;

	use super::*;

	/// Records every fetched path, in call order with renders.
	struct FakeFetcher<'a> {
		calls: &'a RefCell<Vec<String>>,
		result: Result<String, ()>,
	}

	impl TextFetcher for FakeFetcher<'_> {
		async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
			self.calls.borrow_mut().push(format!("fetch:{path}"));
			self.result.clone().map_err(|_| FetchError::Status {
				path: path.to_string(),
				status: 404,
			})
		}
	}

	/// Records every (engine, text) pair it is handed.
	struct FakeRenderer<'a> {
		calls: &'a RefCell<Vec<String>>,
	}

	impl GraphRenderer for FakeRenderer<'_> {
		fn render_dot(&self, engine: &str, text: &str) -> Result<String, RenderError> {
			self.calls.borrow_mut().push(format!("render:{engine}:{text}"));
			Ok(format!("<svg>{text}</svg>"))
		}
	}

	fn config() -> RenderConfig {
		RenderConfig {
			source_path: "graph.dot".to_string(),
			engine_name: "fdp".to_string(),
		}
	}

	#[test]
	fn fetches_once_then_renders_untransformed_values() {
		let calls = RefCell::new(Vec::new());
		let fetcher = FakeFetcher {
			calls: &calls,
			result: Ok("digraph { a -> b; }".to_string()),
		};
		let renderer = FakeRenderer { calls: &calls };

		let rendered = block_on(load_and_render(&config(), &fetcher, &renderer)).unwrap();

		assert_eq!(
			*calls.borrow(),
			vec![
				"fetch:graph.dot".to_string(),
				"render:fdp:digraph { a -> b; }".to_string(),
			]
		);
		assert_eq!(rendered.container_id, GRAPH_CONTAINER_ID);
		assert_eq!(rendered.svg, "<svg>digraph { a -> b; }</svg>");
	}

	#[test]
	fn failed_fetch_never_reaches_the_renderer() {
		let calls = RefCell::new(Vec::new());
		let fetcher = FakeFetcher {
			calls: &calls,
			result: Err(()),
		};
		let renderer = FakeRenderer { calls: &calls };

		let result = block_on(load_and_render(&config(), &fetcher, &renderer));

		assert!(matches!(
			result,
			Err(LoadError::Fetch(FetchError::Status { status: 404, .. }))
		));
		assert_eq!(*calls.borrow(), vec!["fetch:graph.dot".to_string()]);
	}
}
