use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{ast::MarkdownAst, error::ContentError};

/// Frontmatter of a post.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PostData {
    pub title: String,
    /// Raw date string as written by the author. Parsed when sorting, so an
    /// unparseable value does not stop the post from loading.
    pub published: String,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Deserialize)]
struct SlugOverride {
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostEntry {
    pub slug: String,
    pub data: PostData,
    pub body: String,
    pub ast: MarkdownAst,
    pub path: PathBuf,
}

impl PostEntry {
    /// Builds an entry from a markdown file. `path` is relative to the root
    /// of the content collection and is used to derive the slug.
    pub fn from_source(path: &Path, contents: &[u8]) -> Result<Self, ContentError> {
        let text = std::str::from_utf8(contents).map_err(|_| ContentError::NotUtf8 {
            path: path.to_owned(),
        })?;

        let ast = MarkdownAst::parse(text, path)?;
        let data: PostData = ast.frontmatter(path)?;
        let slug_override: SlugOverride = ast.frontmatter(path)?;
        let body = ast.body(text).to_string();

        let slug = slug_override
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| path.slug());

        Ok(Self {
            slug,
            data,
            body,
            ast,
            path: path.to_owned(),
        })
    }
}

/// Markdown and MDX files hold posts.
pub fn is_post_source(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "md" || ext == "mdx")
}

pub trait ToSlug {
    fn slug(&self) -> String;
}

impl ToSlug for Path {
    fn slug(&self) -> String {
        let mut p = self.to_path_buf();

        if is_post_source(&p) && p.file_stem() == Some(std::ffi::OsStr::new("index")) {
            p.pop();
        } else {
            p.set_extension("");
        }

        p.components()
            .filter_map(|c| match c {
                std::path::Component::Normal(s) => Some(slugify_segment(&s.to_string_lossy())),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn slugify_segment(segment: &str) -> String {
    segment
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('-')
            } else if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}
