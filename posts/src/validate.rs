use std::collections::BTreeMap;

use miette::{Diagnostic, Result};
use thiserror::Error;
use tracing::info;

use crate::{date::Published, PostEntry};

#[derive(Debug, Error, Diagnostic)]
#[error("There were errors validating the posts")]
struct ValidationError {
    #[related]
    others: Vec<miette::Report>,
}

impl PostEntry {
    pub fn validate(&self) -> Result<()> {
        let path = self.path.display();

        if self.data.title.trim().is_empty() {
            return Err(miette::miette!("{} has an empty title", path));
        }

        if self.published_at().is_none() {
            return Err(miette::miette!(
                "{} has an unreadable published date {:?}",
                path,
                self.data.published
            ));
        }

        if self.data.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(miette::miette!("{} has a blank tag", path));
        }

        Ok(())
    }
}

/// Checks every post and reports all problems at once.
pub fn validate_posts(posts: &[PostEntry]) -> Result<()> {
    let mut errs = vec![];

    let mut by_slug = BTreeMap::<&str, Vec<&PostEntry>>::new();
    for post in posts {
        by_slug.entry(post.slug.as_str()).or_default().push(post);
    }
    for (slug, matches) in by_slug.iter().filter(|(_, m)| m.len() > 1) {
        let paths = matches
            .iter()
            .map(|post| post.path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        errs.push(miette::miette!(
            "Slug {} is not unique. Found these paths {}",
            slug,
            paths
        ));
    }

    info!(count = posts.len(), "Validating posts");
    for post in posts {
        if let Err(e) = post.validate() {
            errs.push(e);
        }
    }

    if !errs.is_empty() {
        return Err(ValidationError { others: errs }.into());
    }

    Ok(())
}
