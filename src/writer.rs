//! Persisting the rendered index next to the docs it describes.

use crate::model::DocsConfigSet;
use crate::render::{IndexRenderer, RenderOptions};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the generated index inside the docs root.
pub const INDEX_FILE: &str = "README.md";

/// State of an existing index compared with a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Fresh,
    Stale,
    Missing,
}

pub fn index_path(docs_root: &Path) -> PathBuf {
    docs_root.join(INDEX_FILE)
}

/// Render the index and write it to `<docs_root>/README.md`.
///
/// The docs root must already exist. Returns the written path.
pub fn generate_index(set: &DocsConfigSet, options: &RenderOptions) -> Result<PathBuf> {
    let target = index_path(&set.docs_root);
    let content = IndexRenderer::new(options.clone()).render(set);
    fs::write(&target, content)
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::info!(path = %target.display(), "wrote docs index");
    Ok(target)
}

/// Compare the index on disk with what [`generate_index`] would write.
pub fn check_index(set: &DocsConfigSet, options: &RenderOptions) -> Result<IndexStatus> {
    let target = index_path(&set.docs_root);
    if !target.is_file() {
        return Ok(IndexStatus::Missing);
    }
    let existing = fs::read_to_string(&target)
        .with_context(|| format!("failed to read {}", target.display()))?;
    let fresh = IndexRenderer::new(options.clone()).render(set);
    Ok(if existing == fresh {
        IndexStatus::Fresh
    } else {
        IndexStatus::Stale
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModuleDoc;
    use tempfile::TempDir;

    fn set_in(dir: &Path) -> DocsConfigSet {
        DocsConfigSet {
            app: ModuleDoc::new("MyApp", "desc")
                .with_link("README.md")
                .with_target_root(dir),
            docs_root: dir.join("docs"),
            commands: Some(vec![ModuleDoc::new("build", "builds it")]),
            ..DocsConfigSet::default()
        }
    }

    #[test]
    fn writes_readme_and_returns_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        let set = set_in(dir.path());

        let path = generate_index(&set, &RenderOptions::default()).unwrap();
        assert_eq!(path, dir.path().join("docs").join("README.md"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, IndexRenderer::default().render(&set));
    }

    #[test]
    fn write_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let set = set_in(dir.path()); // docs/ never created
        let err = generate_index(&set, &RenderOptions::default()).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }

    #[test]
    fn check_reports_status() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        let mut set = set_in(dir.path());
        let options = RenderOptions::default();

        assert_eq!(check_index(&set, &options).unwrap(), IndexStatus::Missing);
        generate_index(&set, &options).unwrap();
        assert_eq!(check_index(&set, &options).unwrap(), IndexStatus::Fresh);

        set.commands = Some(vec![ModuleDoc::new("serve", "serves it")]);
        assert_eq!(check_index(&set, &options).unwrap(), IndexStatus::Stale);
    }
}
