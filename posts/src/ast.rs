use std::path::Path;

use markdown::{
    mdast::{Node, Root},
    to_mdast, ParseOptions,
};
use serde::Deserialize;

use crate::error::ContentError;

#[derive(Clone, Debug, PartialEq)]
pub struct MarkdownAst(pub Root);

impl MarkdownAst {
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ContentError> {
        let mut options = ParseOptions::default();
        options.constructs.gfm_footnote_definition = true;
        options.constructs.frontmatter = true;

        match to_mdast(contents, &options) {
            Ok(Node::Root(ast)) => Ok(Self(ast)),
            Ok(_) => Err(ContentError::Markdown {
                path: path.to_owned(),
                message: "Should be a root node".to_string(),
            }),
            Err(e) => Err(ContentError::Markdown {
                path: path.to_owned(),
                message: e.to_string(),
            }),
        }
    }

    fn frontmatter_node(&self) -> Option<&markdown::mdast::Yaml> {
        match self.0.children.first() {
            Some(Node::Yaml(frontmatter)) => Some(frontmatter),
            _ => None,
        }
    }

    pub fn frontmatter<T>(&self, path: &Path) -> Result<T, ContentError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let yaml = self
            .frontmatter_node()
            .ok_or_else(|| ContentError::MissingFrontmatter {
                path: path.to_owned(),
            })?;

        serde_yaml::from_str(&yaml.value).map_err(|source| ContentError::Frontmatter {
            path: path.to_owned(),
            source,
        })
    }

    /// Markdown source after the frontmatter block, or the whole file when
    /// there is none.
    pub fn body<'a>(&self, contents: &'a str) -> &'a str {
        let end = self
            .frontmatter_node()
            .and_then(|yaml| yaml.position.as_ref())
            .map_or(0, |position| position.end.offset);

        contents.get(end..).unwrap_or_default().trim_start()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Meta {
        title: String,
    }

    const DOC: &str = "---\ntitle: Hello\n---\n\n# Heading\n\nSome words.\n";

    #[test]
    fn reads_frontmatter() {
        let path = Path::new("hello.md");
        let ast = MarkdownAst::parse(DOC, path).unwrap();

        let meta: Meta = ast.frontmatter(path).unwrap();

        assert_eq!(
            meta,
            Meta {
                title: "Hello".to_string()
            }
        );
    }

    #[test]
    fn body_skips_frontmatter() {
        let path = Path::new("hello.md");
        let ast = MarkdownAst::parse(DOC, path).unwrap();

        assert_eq!(ast.body(DOC), "# Heading\n\nSome words.\n");
    }

    #[test]
    fn missing_frontmatter() {
        let path = Path::new("plain.md");
        let ast = MarkdownAst::parse("Just text", path).unwrap();

        let err = ast.frontmatter::<Meta>(path).unwrap_err();

        assert!(matches!(err, ContentError::MissingFrontmatter { .. }));
        assert_eq!(ast.body("Just text"), "Just text");
    }

}
