use crate::i18n::{I18nKey, Localizer};

pub trait CategoryUrls: Send + Sync {
    fn category_url(&self, category: &str) -> String;
}

/// Joins path pieces with single slashes, keeping a leading slash if the
/// first piece has one.
pub fn join_url(parts: &[&str]) -> String {
    let leading = parts.first().is_some_and(|p| p.starts_with('/'));

    let joined = parts
        .iter()
        .flat_map(|p| p.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if leading {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Percent-encodes a query value. The unreserved marks `!'()*` are left
/// as they are.
pub fn encode_component(value: &str) -> String {
    const KEPT: &[(&str, &str)] = &[
        ("%21", "!"),
        ("%27", "'"),
        ("%28", "("),
        ("%29", ")"),
        ("%2A", "*"),
    ];

    KEPT.iter()
        .fold(urlencoding::encode(value).into_owned(), |encoded, (from, to)| {
            encoded.replace(from, to)
        })
}

/// Builds links under the site's base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    base: String,
    uncategorized: String,
}

impl SiteUrls {
    pub fn new(base: impl Into<String>, localizer: &impl Localizer) -> Self {
        Self {
            base: base.into(),
            uncategorized: localizer.text(I18nKey::Uncategorized).to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        // keep "?" queries intact, only the path part is normalised
        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path, None),
        };

        let mut url = join_url(&["/", &self.base, path]);
        if path.ends_with('/') && !url.ends_with('/') {
            url.push('/');
        }
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }

        url
    }

    pub fn post_url(&self, slug: &str) -> String {
        self.url(&format!("/posts/{slug}/"))
    }

    pub fn tag_url(&self, tag: &str) -> String {
        self.url(&format!("/archive/?tag={}", encode_component(tag.trim())))
    }

    fn is_uncategorized(&self, category: &str) -> bool {
        let category = category.trim();

        category.is_empty() || category.to_lowercase() == self.uncategorized.to_lowercase()
    }
}

impl CategoryUrls for SiteUrls {
    fn category_url(&self, category: &str) -> String {
        if self.is_uncategorized(category) {
            return self.url("/archive/?uncategorized=true");
        }

        self.url(&format!(
            "/archive/?category={}",
            encode_component(category.trim())
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::i18n::Lang;

    #[test]
    fn join_collapses_slashes() {
        assert_eq!(join_url(&["/", "/blog/", "/posts/a/"]), "/blog/posts/a");
        assert_eq!(join_url(&["a", "b"]), "a/b");
        assert_eq!(join_url(&["/"]), "/");
    }

    #[test]
    fn category_urls() {
        let urls = SiteUrls::new("/", &Lang::En);

        assert_eq!(urls.category_url("Tech"), "/archive/?category=Tech");
        assert_eq!(
            urls.category_url(" Rust Notes "),
            "/archive/?category=Rust%20Notes"
        );
        assert_eq!(
            urls.category_url("uncategorized"),
            "/archive/?uncategorized=true"
        );
        assert_eq!(urls.category_url("  "), "/archive/?uncategorized=true");
    }

    #[test]
    fn sub_delims_stay_unescaped() {
        let urls = SiteUrls::new("/", &Lang::En);

        assert_eq!(
            urls.category_url("What's New (2024)!*"),
            "/archive/?category=What's%20New%20(2024)!*"
        );
        assert_eq!(encode_component("a%2Ab"), "a%252Ab");
    }

    #[test]
    fn base_path_is_prefixed() {
        let urls = SiteUrls::new("/blog/", &Lang::ZhCn);

        assert_eq!(urls.post_url("hello"), "/blog/posts/hello/");
        assert_eq!(urls.tag_url("a b"), "/blog/archive/?tag=a%20b");
        assert_eq!(
            urls.category_url("未分类"),
            "/blog/archive/?uncategorized=true"
        );
        assert_eq!(
            urls.category_url("技术"),
            "/blog/archive/?category=%E6%8A%80%E6%9C%AF"
        );
    }
}
