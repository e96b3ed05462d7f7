/// Fallback graph description path when the URL names none.
pub const DEFAULT_SOURCE: &str = "data.dot";
/// Fallback layout engine when the URL names none.
pub const DEFAULT_ENGINE: &str = "dot";

/// Viewer configuration, derived once per page load and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
	pub source_path: String,
	pub engine_name: String,
}

impl RenderConfig {
	/// Resolve the configuration through an environment-query capability,
	/// typically backed by the page URL's query parameters.
	///
	/// Reads the keys `data` and `engine`. Absent keys fall back to the
	/// defaults above; present values are passed downstream untouched, no
	/// matter how malformed.
	pub fn resolve(get: impl Fn(&str) -> Option<String>) -> Self {
		Self {
			source_path: get("data").unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
			engine_name: get("engine").unwrap_or_else(|| DEFAULT_ENGINE.to_string()),
		}
	}
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self::resolve(|_| None)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn resolve_from(pairs: &[(&str, &str)]) -> RenderConfig {
		let map: HashMap<&str, &str> = pairs.iter().copied().collect();
		RenderConfig::resolve(|key| map.get(key).map(|v| v.to_string()))
	}

	#[test]
	fn defaults_when_no_parameters() {
		let config = resolve_from(&[]);
		assert_eq!(config.source_path, "data.dot");
		assert_eq!(config.engine_name, "dot");
	}

	#[test]
	fn reads_both_parameters() {
		let config = resolve_from(&[("data", "graph.dot"), ("engine", "fdp")]);
		assert_eq!(config.source_path, "graph.dot");
		assert_eq!(config.engine_name, "fdp");
	}

	#[test]
	fn missing_keys_fall_back_independently() {
		let config = resolve_from(&[("engine", "circo")]);
		assert_eq!(config.source_path, "data.dot");
		assert_eq!(config.engine_name, "circo");
	}

	#[test]
	fn values_pass_through_unvalidated() {
		let config = resolve_from(&[("data", "../weird path?.dot"), ("engine", "")]);
		assert_eq!(config.source_path, "../weird path?.dot");
		assert_eq!(config.engine_name, "");
	}
}
