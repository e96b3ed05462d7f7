use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::graph_view::{GraphView, RenderConfig};

/// Default Home Page
///
/// Derives the viewer configuration from the page URL (`?data=...&engine=...`)
/// and mounts the graph view.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = Signal::derive(move || query.with(|q| RenderConfig::resolve(|key| q.get(key))));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="viewer-page">
				<GraphView config=config />
			</div>
		</ErrorBoundary>
	}
}
