use serde::Serialize;

use crate::{title::Title, PostEntry};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub slug: String,
    pub title: String,
}

impl NavLink {
    fn to(post: &PostEntry) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title().to_string(),
        }
    }
}

/// Neighbours of a post in newest-first order. `prev` is the next older
/// post, `next` the next newer one.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigatedPost {
    pub post: PostEntry,
    pub navigation: Navigation,
}

/// Pairs every post of an already sorted list with links to its neighbours.
pub fn link_neighbours(sorted: Vec<PostEntry>) -> Vec<NavigatedPost> {
    let navigation: Vec<Navigation> = (0..sorted.len())
        .map(|i| Navigation {
            prev: sorted.get(i + 1).map(NavLink::to),
            next: i.checked_sub(1).and_then(|n| sorted.get(n)).map(NavLink::to),
        })
        .collect();

    sorted
        .into_iter()
        .zip(navigation)
        .map(|(post, navigation)| NavigatedPost { post, navigation })
        .collect()
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;

    fn post(slug: &str) -> PostEntry {
        let source = format!("---\ntitle: Title {slug}\npublished: 2024-01-01\n---\n");
        PostEntry::from_source(Path::new(&format!("{slug}.md")), source.as_bytes()).unwrap()
    }

    #[test]
    fn chain_is_consistent() {
        let linked = link_neighbours(vec![post("c"), post("b"), post("a")]);

        assert_eq!(linked.len(), 3);
        for pair in linked.windows(2) {
            let (newer, older) = (&pair[0], &pair[1]);

            assert_eq!(
                newer.navigation.prev.as_ref().map(|l| l.slug.as_str()),
                Some(older.post.slug.as_str())
            );
            assert_eq!(
                older.navigation.next.as_ref().map(|l| l.slug.as_str()),
                Some(newer.post.slug.as_str())
            );
        }

        assert_eq!(linked[0].navigation.next, None);
        assert_eq!(linked[2].navigation.prev, None);
        assert_eq!(
            linked[1].navigation.prev,
            Some(NavLink {
                slug: "a".to_string(),
                title: "Title a".to_string()
            })
        );
    }

    #[test]
    fn single_post_has_no_links() {
        let linked = link_neighbours(vec![post("only")]);

        assert_eq!(linked[0].navigation, Navigation::default());
    }

    #[test]
    fn empty_input() {
        assert!(link_neighbours(vec![]).is_empty());
    }
}
