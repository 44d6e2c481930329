use std::collections::BTreeMap;

use serde::Serialize;

use crate::{url::CategoryUrls, PostEntry};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub count: usize,
    pub url: String,
}

/// Case-insensitive name order. Names equal ignoring case fall back to
/// their byte order, which is the map's order.
fn alphabetical(counts: BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<_> = counts.into_iter().collect();

    entries.sort_by_cached_key(|(name, _)| name.to_lowercase());

    entries
}

pub fn count_tags(posts: &[PostEntry]) -> Vec<Tag> {
    let mut counts = BTreeMap::<String, usize>::new();

    for tag in posts.iter().flat_map(|post| &post.data.tags) {
        *counts.entry(tag.clone()).or_default() += 1;
    }

    alphabetical(counts)
        .into_iter()
        .map(|(name, count)| Tag { name, count })
        .collect()
}

/// Buckets posts by category. Names are only trimmed, so `"Tech"` and
/// `"tech"` stay separate buckets.
pub fn count_categories(
    posts: &[PostEntry],
    uncategorized: &str,
    urls: &impl CategoryUrls,
) -> Vec<Category> {
    let mut counts = BTreeMap::<String, usize>::new();

    for post in posts {
        let name = match post.data.category.as_deref() {
            None | Some("") => uncategorized,
            Some(category) => category.trim(),
        };

        *counts.entry(name.to_string()).or_default() += 1;
    }

    alphabetical(counts)
        .into_iter()
        .map(|(name, count)| Category {
            url: urls.category_url(&name),
            name,
            count,
        })
        .collect()
}
