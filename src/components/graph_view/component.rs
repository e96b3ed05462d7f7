use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use super::config::RenderConfig;
use super::export;
use super::fetch::HttpFetcher;
use super::pipeline::{self, GRAPH_CONTAINER_ID};
use super::render::SvgRenderer;
use super::types::RenderedGraph;

/// Fetches the graph description named by `config`, lays it out, and
/// displays the SVG, with a button that downloads the current rendering.
///
/// The completed render is held as a value and passed to the export
/// directly, so a download can only ever carry finished markup.
#[component]
pub fn GraphView(#[prop(into)] config: Signal<RenderConfig>) -> impl IntoView {
	let (rendered, set_rendered) = signal(None::<RenderedGraph>);
	let (load_error, set_load_error) = signal(None::<String>);

	Effect::new(move |_| {
		let config = config.get();
		set_rendered.set(None);
		set_load_error.set(None);
		spawn_local(async move {
			match pipeline::load_and_render(&config, &HttpFetcher, &SvgRenderer).await {
				Ok(result) => set_rendered.set(Some(result)),
				Err(err) => {
					error!("{err}");
					set_load_error.set(Some(err.to_string()));
				}
			}
		});
	});

	let on_export = move |_| {
		if let Some(result) = rendered.get_untracked() {
			if let Err(err) = export::download_svg(&result) {
				error!("{err}");
			}
		}
	};

	view! {
		<div class="graph-view">
			<div
				id=GRAPH_CONTAINER_ID
				class="graph-container"
				inner_html=move || rendered.get().map(|r| r.svg).unwrap_or_default()
			></div>
			{move || load_error.get().map(|msg| view! { <p class="load-error">{msg}</p> })}
			<button
				class="export-button"
				disabled=move || rendered.get().is_none()
				on:click=on_export
			>
				"Download SVG"
			</button>
		</div>
	}
}
