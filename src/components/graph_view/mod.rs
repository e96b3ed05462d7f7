mod component;
mod config;
mod export;
mod fetch;
mod pipeline;
mod render;
mod types;

pub use component::GraphView;
pub use config::RenderConfig;
pub use types::RenderedGraph;
