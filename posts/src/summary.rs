use serde::Serialize;

use crate::{entry::PostData, PostEntry};

/// A post without its body, for listing pages.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub slug: String,
    pub data: PostData,
}

impl From<PostEntry> for PostSummary {
    fn from(post: PostEntry) -> Self {
        Self {
            slug: post.slug,
            data: post.data,
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;

    #[test]
    fn drops_the_body() {
        let source = "---\ntitle: Long One\npublished: 2024-01-01\n---\n\nA very long body.\n";
        let post = PostEntry::from_source(Path::new("long-one.md"), source.as_bytes()).unwrap();

        let summary = PostSummary::from(post.clone());

        assert_eq!(summary.slug, "long-one");
        assert_eq!(summary.data, post.data);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("body").is_none());
        assert!(json.get("ast").is_none());
        assert_eq!(json["data"]["title"], "Long One");
    }
}
