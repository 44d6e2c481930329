use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ContentError {
    #[error("Could not read {path}")]
    #[diagnostic(code(posts::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not UTF8")]
    #[diagnostic(code(posts::not_utf8))]
    NotUtf8 { path: PathBuf },

    #[error("Could not make AST for {path}. Inner Error: {message}")]
    #[diagnostic(code(posts::markdown))]
    Markdown { path: PathBuf, message: String },

    #[error("{path} should have a first child with YAML Frontmatter")]
    #[diagnostic(
        code(posts::missing_frontmatter),
        help("Start the file with a `---` delimited YAML block")
    )]
    MissingFrontmatter { path: PathBuf },

    #[error("Frontmatter in {path} should be valid YAML")]
    #[diagnostic(code(posts::frontmatter))]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Could not search the embedded content directory: {message}")]
    #[diagnostic(code(posts::glob))]
    Glob { message: String },
}
