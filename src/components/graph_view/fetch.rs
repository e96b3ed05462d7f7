use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Failure modes of a single text fetch. A non-2xx status counts as a
/// failure so a missing graph file never reaches the renderer.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("network error fetching '{path}': {detail}")]
	Network { path: String, detail: String },
	#[error("'{path}' returned status {status}")]
	Status { path: String, status: u16 },
	#[error("response for '{path}' carried no text body")]
	Body { path: String },
}

/// Source of graph description text, keyed by path.
pub trait TextFetcher {
	/// Fetch the text resource at `path`.
	async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Browser backend over the `fetch` API. No custom headers, no retry,
/// no timeout.
pub struct HttpFetcher;

impl TextFetcher for HttpFetcher {
	async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
		let window = web_sys::window().ok_or_else(|| FetchError::Network {
			path: path.to_string(),
			detail: "no window".to_string(),
		})?;

		let response: Response = JsFuture::from(window.fetch_with_str(path))
			.await
			.map_err(|err| network(path, err))?
			.dyn_into()
			.map_err(|err| network(path, err))?;

		if !response.ok() {
			return Err(FetchError::Status {
				path: path.to_string(),
				status: response.status(),
			});
		}

		let text = JsFuture::from(response.text().map_err(|err| network(path, err))?)
			.await
			.map_err(|err| network(path, err))?;
		text.as_string().ok_or_else(|| FetchError::Body {
			path: path.to_string(),
		})
	}
}

fn network(path: &str, err: JsValue) -> FetchError {
	FetchError::Network {
		path: path.to_string(),
		detail: err.as_string().unwrap_or_else(|| format!("{err:?}")),
	}
}
