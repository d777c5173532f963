//! Renderer module — index layout, section catalog and table formatting.

pub mod markdown;
pub mod sections;
pub mod table;

pub use markdown::IndexRenderer;
pub use table::TableStyle;

/// Marker placed at the top of every generated index.
pub const DEFAULT_MARKER: &str = "<!-- generated by `docs-index` -->";

/// Knobs that do not come from the docs config set itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// First line of the document, normally an HTML comment.
    pub marker: String,
    pub table_style: TableStyle,
    /// Configuration file named in the Configurations section description.
    pub config_file: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            table_style: TableStyle::default(),
            config_file: None,
        }
    }
}
