//! Input model for index generation — a fully collected docs config set.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::PathBuf;

/// Everything known about one application's documentation surface.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsConfigSet {
    /// The application's own entry, rendered under `# App`.
    pub app: ModuleDoc,
    /// Directory the README is written to; relative links are expressed against it.
    pub docs_root: PathBuf,
    #[serde(default)]
    pub guides: Option<Vec<ModuleDoc>>,
    #[serde(default)]
    pub commands: Option<Vec<ModuleDoc>>,
    #[serde(default)]
    pub actions: Option<Vec<ModuleDoc>>,
    #[serde(default)]
    pub lifecycles: Option<Vec<ModuleDoc>>,
    #[serde(default)]
    pub structures: Option<Vec<ModuleDoc>>,
    #[serde(default)]
    pub presets: Option<Vec<ModuleDoc>>,
    #[serde(default)]
    pub plugins: Option<Vec<ModuleDoc>>,
    #[serde(default)]
    pub modules: Option<Vec<ModuleDoc>>,
    #[serde(default)]
    pub configurations: Option<Vec<ModuleDoc>>,
}

impl DocsConfigSet {
    /// Resolve relative `docs_root` and `target_root` values against `base`.
    pub fn absolutize(&mut self, base: &std::path::Path) {
        if self.docs_root.is_relative() {
            self.docs_root = base.join(&self.docs_root);
        }
        let lists = [
            &mut self.guides,
            &mut self.commands,
            &mut self.actions,
            &mut self.lifecycles,
            &mut self.structures,
            &mut self.presets,
            &mut self.plugins,
            &mut self.modules,
            &mut self.configurations,
        ];
        let docs = lists.into_iter().flatten().flat_map(|list| list.iter_mut());
        for doc in std::iter::once(&mut self.app).chain(docs) {
            if let Some(root) = doc.target_root.as_mut() {
                if root.is_relative() {
                    *root = base.join(&*root);
                }
            }
        }
    }
}

/// A single documented item: guide, command, plugin, configuration option...
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDoc {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// URL or path relative to `target_root`
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_path")]
    pub target_root: Option<PathBuf>,
    #[serde(default, deserialize_with = "truthy")]
    pub deprecated: bool,
    /// Value type of a configuration option
    #[serde(default, rename = "type", deserialize_with = "lenient_opt_string")]
    pub value_type: Option<String>,
    /// Default of a configuration option; any JSON scalar
    #[serde(default)]
    pub default: Option<Value>,
}

// Wrong-typed item fields degrade to text; `null` means absent.

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn lenient_opt_path<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PathBuf>, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?).map(PathBuf::from))
}

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are false.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

impl ModuleDoc {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_target_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.target_root = Some(root.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// An empty link string counts as no link.
    pub fn has_link(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty())
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Name as shown in tables, with the deprecation suffix applied.
    pub fn display_name(&self) -> String {
        if self.is_deprecated() {
            format!("{} (deprecated)", self.name)
        } else {
            self.name.clone()
        }
    }

    /// The `default` value as table text: strings verbatim, other values as JSON.
    pub fn default_text(&self) -> Option<String> {
        match self.default.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case() {
        let set: DocsConfigSet = serde_json::from_str(
            r#"{
                "app": { "name": "MyApp", "description": "desc", "link": "README.md", "targetRoot": "/app" },
                "docsRoot": "/app/docs",
                "configurations": [
                    { "name": "port", "description": "Port", "type": "number", "default": 8080 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(set.app.target_root, Some(PathBuf::from("/app")));
        assert_eq!(set.docs_root, PathBuf::from("/app/docs"));
        assert!(set.commands.is_none());
        let port = &set.configurations.unwrap()[0];
        assert_eq!(port.value_type.as_deref(), Some("number"));
        assert_eq!(port.default_text().as_deref(), Some("8080"));
    }

    #[test]
    fn missing_fields_degrade_to_empty() {
        let doc: ModuleDoc = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.description, "");
        assert!(!doc.has_link());
        assert!(!doc.is_deprecated());
    }

    #[test]
    fn wrong_typed_fields_degrade() {
        let docs: Vec<ModuleDoc> = serde_json::from_str(
            r#"[
                { "name": 5, "description": null, "version": 2, "deprecated": null },
                { "name": "a", "version": "1.0.0", "deprecated": "yes", "link": null, "type": 3 },
                { "name": true, "deprecated": 0, "targetRoot": null }
            ]"#,
        )
        .unwrap();

        assert_eq!(docs[0].name, "5");
        assert_eq!(docs[0].description, "");
        assert_eq!(docs[0].version.as_deref(), Some("2"));
        assert!(!docs[0].is_deprecated());

        assert_eq!(docs[1].version.as_deref(), Some("1.0.0"));
        assert!(docs[1].is_deprecated());
        assert!(!docs[1].has_link());
        assert_eq!(docs[1].value_type.as_deref(), Some("3"));

        assert_eq!(docs[2].name, "true");
        assert!(!docs[2].is_deprecated());
        assert_eq!(docs[2].target_root, None);
    }

    #[test]
    fn empty_link_is_no_link() {
        assert!(!ModuleDoc::new("a", "b").with_link("").has_link());
        assert!(ModuleDoc::new("a", "b").with_link("x.md").has_link());
    }

    #[test]
    fn deprecated_display_name() {
        assert_eq!(ModuleDoc::new("old", "").deprecated().display_name(), "old (deprecated)");
        assert_eq!(ModuleDoc::new("new", "").display_name(), "new");
    }

    #[test]
    fn default_text_keeps_strings_verbatim() {
        let mut doc = ModuleDoc::new("env", "");
        doc.default = Some(Value::String("development".into()));
        assert_eq!(doc.default_text().as_deref(), Some("development"));
        doc.default = Some(Value::Bool(true));
        assert_eq!(doc.default_text().as_deref(), Some("true"));
        doc.default = Some(Value::Null);
        assert_eq!(doc.default_text(), None);
    }

    #[test]
    fn absolutize_resolves_relative_roots() {
        let mut set = DocsConfigSet {
            app: ModuleDoc::new("app", "").with_target_root("."),
            docs_root: PathBuf::from("docs"),
            plugins: Some(vec![
                ModuleDoc::new("p", "").with_target_root("node_modules/p"),
                ModuleDoc::new("q", "").with_target_root("/abs/q"),
            ]),
            ..DocsConfigSet::default()
        };
        set.absolutize(std::path::Path::new("/work"));
        assert_eq!(set.docs_root, PathBuf::from("/work/docs"));
        assert_eq!(set.app.target_root, Some(PathBuf::from("/work/.")));
        let plugins = set.plugins.unwrap();
        assert_eq!(plugins[0].target_root, Some(PathBuf::from("/work/node_modules/p")));
        assert_eq!(plugins[1].target_root, Some(PathBuf::from("/abs/q")));
    }
}
