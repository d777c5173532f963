//! Link targets and reference-style link bookkeeping.

use regex::Regex;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

// Absolute URL, optionally schemeless ("//cdn.example.com/...")
static RE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(https?:)?//").unwrap());

pub fn is_url(link: &str) -> bool {
    RE_URL.is_match(link)
}

/// Resolve a link for the index.
///
/// URLs pass through untouched. Anything else is treated as a path under
/// `target_root` and re-expressed relative to `docs_root`. Without a
/// `target_root` the path is taken to be under `docs_root` already.
pub fn format_link(link: &str, target_root: Option<&Path>, docs_root: &Path) -> String {
    if is_url(link) {
        return link.to_string();
    }
    let base = target_root.unwrap_or(docs_root);
    let joined = normalize(&base.join(link.trim_start_matches('/')));
    relative(docs_root, &joined)
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root of an absolute path is dropped; leading `..` of a
/// relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            _ => out.push(comp),
        }
    }
    out.iter().collect()
}

/// Express `to` relative to `from`, joined with `/`.
///
/// Both paths must be of the same kind (absolute or relative), and a relative
/// `from` must not climb above a point `to` shares (`../docs` against `x.md`
/// depends on the working directory). When either condition fails `to` is
/// returned as-is. Equal paths give an empty string.
pub fn relative(from: &Path, to: &Path) -> String {
    let from = normalize(from);
    let to = normalize(to);
    if from.is_absolute() != to.is_absolute() {
        return join_slash(to.components());
    }

    let from_parts: Vec<Component> = from.components().collect();
    let to_parts: Vec<Component> = to.components().collect();
    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if from_parts[common..].contains(&Component::ParentDir) {
        return join_slash(to.components());
    }

    let mut parts: Vec<String> = Vec::new();
    for _ in &from_parts[common..] {
        parts.push("..".to_string());
    }
    for comp in &to_parts[common..] {
        parts.push(comp.as_os_str().to_string_lossy().into_owned());
    }
    parts.join("/")
}

fn join_slash<'a>(components: impl Iterator<Item = Component<'a>>) -> String {
    let mut out = String::new();
    for comp in components {
        match comp {
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

/// Reference definitions collected while rendering, in insertion order.
///
/// Labels are unique: registering a label that is already taken mints a
/// numeric one from a shared counter instead.
#[derive(Debug, Default)]
pub struct References {
    entries: Vec<(String, String)>,
    taken: HashSet<String>,
    collisions: usize,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `target` under `key`, returning the label actually used.
    pub fn register(&mut self, key: &str, target: String) -> String {
        let label = if self.taken.contains(key) {
            self.mint()
        } else {
            key.to_string()
        };
        self.taken.insert(label.clone());
        self.entries.push((label.clone(), target));
        label
    }

    // Numeric labels skip anything already in use (an item literally named "2").
    fn mint(&mut self) -> String {
        loop {
            self.collisions += 1;
            let label = self.collisions.to_string();
            if !self.taken.contains(&label) {
                tracing::debug!(label = %label, "reference collision, minted numeric label");
                return label;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `[label]: target` lines, one per reference.
    pub fn definitions(&self) -> String {
        let mut out = String::new();
        for (label, target) in self.iter() {
            out.push_str(&format!("[{}]: {}\n", label, target));
        }
        out
    }
}

/// Inline reference-style link text for a table cell.
///
/// `[text]` only when text, label and the item's bare `name` all agree;
/// anything else, including a deprecated item's suffixed text, is spelled
/// `[text][label]`.
pub fn reference_text(text: &str, label: &str, name: &str) -> String {
    if label == name && label == text {
        format!("[{}]", text)
    } else {
        format!("[{}][{}]", text, label)
    }
}
