//! The fixed catalog of index sections, in output order.

use crate::model::{DocsConfigSet, ModuleDoc};

/// An extra table column: header label and how to read the cell from an item.
#[derive(Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub value: fn(&ModuleDoc) -> Option<String>,
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column").field("header", &self.header).finish()
    }
}

/// Per-section rendering switches.
#[derive(Debug, Clone)]
pub struct SectionOptions {
    pub include_version: bool,
    pub columns: Vec<Column>,
    /// Link items without an explicit `link` to their `README.md`.
    pub link_fallbacks: bool,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            include_version: true,
            columns: Vec::new(),
            link_fallbacks: false,
        }
    }
}

impl SectionOptions {
    fn without_version() -> Self {
        Self {
            include_version: false,
            ..Self::default()
        }
    }
}

pub const TYPE_COLUMN: Column = Column {
    header: "Type",
    value: |doc| doc.value_type.clone(),
};

pub const DEFAULT_COLUMN: Column = Column {
    header: "Default",
    value: ModuleDoc::default_text,
};

/// One entry of the catalog.
#[derive(Clone)]
pub struct SectionSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub items: fn(&DocsConfigSet) -> Option<&[ModuleDoc]>,
    pub options: SectionOptions,
}

impl std::fmt::Debug for SectionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionSpec")
            .field("title", &self.title)
            .field("options", &self.options)
            .finish()
    }
}

/// Title of the configuration options section; its description can name a file.
pub const CONFIGURATIONS: &str = "Configurations";

/// All sections in the order they appear in the index.
pub fn catalog() -> Vec<SectionSpec> {
    vec![
        SectionSpec {
            title: "Guides",
            description: "Help and explanations docs",
            items: |set| set.guides.as_deref(),
            options: SectionOptions::without_version(),
        },
        SectionSpec {
            title: "Commands",
            description: "Available commands",
            items: |set| set.commands.as_deref(),
            options: SectionOptions::without_version(),
        },
        SectionSpec {
            title: "Actions",
            description: "Available actions",
            items: |set| set.actions.as_deref(),
            options: SectionOptions::without_version(),
        },
        SectionSpec {
            title: "Lifecycles",
            description: "Available lifecycles",
            items: |set| set.lifecycles.as_deref(),
            options: SectionOptions::without_version(),
        },
        SectionSpec {
            title: "Structures",
            description: "Available structure",
            items: |set| set.structures.as_deref(),
            options: SectionOptions::without_version(),
        },
        SectionSpec {
            title: "Presets",
            description: "All configured presets",
            items: |set| set.presets.as_deref(),
            options: SectionOptions::default(),
        },
        SectionSpec {
            title: "Plugins",
            description: "All configured plugins",
            items: |set| set.plugins.as_deref(),
            options: SectionOptions::default(),
        },
        SectionSpec {
            title: "Modules",
            description: "Dependencies and supporting modules",
            items: |set| set.modules.as_deref(),
            options: SectionOptions::default(),
        },
        SectionSpec {
            title: CONFIGURATIONS,
            description: "Available configuration options",
            items: |set| set.configurations.as_deref(),
            options: SectionOptions {
                include_version: false,
                columns: vec![TYPE_COLUMN, DEFAULT_COLUMN],
                link_fallbacks: true,
            },
        },
    ]
}
