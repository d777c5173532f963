//! Markdown index renderer.
//!
//! Produces the README for a docs config set: marker, `# App`, one table per
//! non-empty section, then the reference definitions collected along the way.

use crate::links::{self, References};
use crate::model::{DocsConfigSet, ModuleDoc};
use crate::render::sections::{self, SectionOptions};
use crate::render::table;
use crate::render::RenderOptions;
use std::path::Path;

/// Link text used when an item has no link of its own.
const FALLBACK_LINK: &str = "README.md";

#[derive(Debug, Default, Clone)]
pub struct IndexRenderer {
    options: RenderOptions,
}

impl IndexRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the whole index. Pure: the same input always gives the same text.
    pub fn render(&self, set: &DocsConfigSet) -> String {
        let mut doc = IndexBuilder::new(&set.docs_root, &self.options);

        doc.add_content(&self.options.marker);
        doc.add_content("# App");
        doc.add_app(&set.app);

        for spec in sections::catalog() {
            let description = match (spec.title, &self.options.config_file) {
                (sections::CONFIGURATIONS, Some(file)) => {
                    format!("{} in the `{}`", spec.description, file)
                }
                _ => spec.description.to_string(),
            };
            doc.add_section(spec.title, &description, (spec.items)(set), &spec.options);
        }

        doc.finish()
    }
}

/// Accumulates one render: the content so far and its references.
struct IndexBuilder<'a> {
    content: String,
    references: References,
    docs_root: &'a Path,
    options: &'a RenderOptions,
}

impl<'a> IndexBuilder<'a> {
    fn new(docs_root: &'a Path, options: &'a RenderOptions) -> Self {
        Self {
            content: String::new(),
            references: References::new(),
            docs_root,
            options,
        }
    }

    fn add_line(&mut self, text: &str) {
        self.content.push_str(text);
        self.content.push('\n');
    }

    /// A block followed by a blank line.
    fn add_content(&mut self, text: &str) {
        self.add_line(text);
        self.add_line("");
    }

    fn link_target(&self, doc: &ModuleDoc, fallback: bool) -> Option<String> {
        let link = if doc.has_link() {
            doc.link.as_deref()?
        } else if fallback {
            FALLBACK_LINK
        } else {
            return None;
        };
        Some(links::format_link(
            link,
            doc.target_root.as_deref(),
            self.docs_root,
        ))
    }

    fn add_app(&mut self, app: &ModuleDoc) {
        self.add_content(&format!("[{}] — {}", app.name, app.description));
        if let Some(target) = self.link_target(app, true) {
            self.references.register(&app.name, target);
        }
    }

    fn add_section(
        &mut self,
        title: &str,
        description: &str,
        items: Option<&[ModuleDoc]>,
        options: &SectionOptions,
    ) {
        let items = match items {
            Some(items) if !items.is_empty() => items,
            _ => {
                tracing::debug!(section = title, "skipping empty section");
                return;
            }
        };

        self.add_content(&format!("## {}", title));
        self.add_content(description);

        let mut header = vec!["Name".to_string()];
        if options.include_version {
            header.push("Version".to_string());
        }
        header.push("Description".to_string());
        header.extend(options.columns.iter().map(|c| c.header.to_string()));

        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| self.section_row(item, options))
            .collect();

        let rendered = table::render_table(&header, &rows, self.options.table_style);
        self.add_content(&rendered);
    }

    fn section_row(&mut self, item: &ModuleDoc, options: &SectionOptions) -> Vec<String> {
        let display = item.display_name();
        let name_cell = match self.link_target(item, options.link_fallbacks) {
            Some(target) => {
                let label = self.references.register(&display, target);
                links::reference_text(&display, &label, &item.name)
            }
            None => display,
        };

        let mut row = vec![name_cell];
        if options.include_version {
            row.push(item.version.clone().unwrap_or_default());
        }
        row.push(item.description.clone());
        for column in &options.columns {
            row.push((column.value)(item).unwrap_or_default());
        }
        row
    }

    fn finish(mut self) -> String {
        self.add_content("<!-- LINKS -->");
        let definitions = self.references.definitions();
        self.content.push_str(&definitions);
        self.content
    }
}
