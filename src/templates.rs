//! Fixed boilerplate offered when a project is created.

use crate::error::{Error, Result};
use minijinja::{context, Environment};
use std::fmt::Display;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ name }}</title>
{%- if stylesheet %}
  <link rel="stylesheet" href="css/style.css">
{%- endif %}
</head>
<body>
  <h1>{{ name }}</h1>
{%- if script %}
  <script src="js/script.js"></script>
{%- endif %}
</body>
</html>
"#;

const README_MD: &str = "# {{ name }}";

const STYLE_CSS: &str = r#"* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, sans-serif;
}
"#;

const SCRIPT_JS: &str = r#"console.log({{ name | tojson }} + " is ready");
"#;

/// One of the default files a new project may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultArtifact {
    Html,
    Readme,
    Stylesheet,
    Script,
}

impl DefaultArtifact {
    /// Menu order.
    pub const ALL: [DefaultArtifact; 4] = [
        DefaultArtifact::Html,
        DefaultArtifact::Readme,
        DefaultArtifact::Stylesheet,
        DefaultArtifact::Script,
    ];

    /// Path relative to the project folder.
    pub fn relative_path(self) -> &'static str {
        match self {
            DefaultArtifact::Html => "index.html",
            DefaultArtifact::Readme => "README.md",
            DefaultArtifact::Stylesheet => "css/style.css",
            DefaultArtifact::Script => "js/script.js",
        }
    }

    /// Whether the artifact starts checked in the selection menu.
    pub fn preselected(self) -> bool {
        matches!(self, DefaultArtifact::Html | DefaultArtifact::Readme)
    }

    fn source(self) -> &'static str {
        match self {
            DefaultArtifact::Html => INDEX_HTML,
            DefaultArtifact::Readme => README_MD,
            DefaultArtifact::Stylesheet => STYLE_CSS,
            DefaultArtifact::Script => SCRIPT_JS,
        }
    }
}

impl Display for DefaultArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DefaultArtifact::Html => "index.html (entry page)",
            DefaultArtifact::Readme => "README.md",
            DefaultArtifact::Stylesheet => "css/style.css",
            DefaultArtifact::Script => "js/script.js",
        };
        write!(f, "{s}")
    }
}

/// Renders default artifacts for one project.
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Renders `artifact` for the project `name`; `selected` decides which
    /// companion files the HTML page links to.
    pub fn render(
        &self,
        artifact: DefaultArtifact,
        name: &str,
        selected: &[DefaultArtifact],
    ) -> Result<String> {
        // The template name carries the file extension so `.html` gets auto-escaping.
        let template_name = artifact.relative_path();
        self.env
            .render_named_str(template_name, artifact.source(), context! {
                name => name,
                stylesheet => selected.contains(&DefaultArtifact::Stylesheet),
                script => selected.contains(&DefaultArtifact::Script),
            })
            .map_err(|e| Error::TemplateError { name: template_name.to_string(), e })
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new()
    }
}
