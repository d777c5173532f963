//! docs-index — render a Markdown index of an application's documentation.
//!
//! The input is a [`DocsConfigSet`]: the app's own entry plus its guides,
//! commands, actions, lifecycles, structures, presets, plugins, modules and
//! configuration options. [`IndexRenderer::render`] turns it into a README with
//! one table per section and deduplicated reference-style links.

pub mod links;
pub mod logging;
pub mod model;
pub mod render;
pub mod writer;

pub use model::{DocsConfigSet, ModuleDoc};
pub use render::{IndexRenderer, RenderOptions, TableStyle};
pub use writer::{check_index, generate_index, IndexStatus};
