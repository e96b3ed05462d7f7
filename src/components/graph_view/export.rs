use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

use super::types::RenderedGraph;

/// Failure while staging the download through the DOM.
#[derive(Debug, Error)]
#[error("download failed: {0}")]
pub struct ExportError(String);

impl From<JsValue> for ExportError {
	fn from(err: JsValue) -> Self {
		Self(err.as_string().unwrap_or_else(|| format!("{err:?}")))
	}
}

/// Offer `rendered` as a client-side file download named
/// `<container_id>.svg`.
///
/// Wraps the serialized markup in a blob, clicks a detached anchor pointing
/// at an object URL for it, then removes the anchor and revokes the URL.
/// No server interaction; safe to repeat.
pub fn download_svg(rendered: &RenderedGraph) -> Result<(), ExportError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| ExportError("no document".to_string()))?;

	let parts = js_sys::Array::new();
	parts.push(&JsValue::from_str(&rendered.svg));
	let blob = Blob::new_with_str_sequence(&parts)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = document
		.create_element("a")?
		.dyn_into()
		.map_err(|_| ExportError("element was not an anchor".to_string()))?;
	anchor.set_download(&rendered.download_name());
	anchor.set_href(&url);
	anchor.click();
	anchor.remove();

	Url::revoke_object_url(&url)?;
	Ok(())
}
