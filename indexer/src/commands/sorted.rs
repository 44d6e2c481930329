use miette::Result;
use posts::{NavLink, NavigatedPost, SiteUrls};
use serde::Serialize;

use super::{print_json, Context};

#[derive(Serialize, Debug)]
struct SortedRow<'a> {
    slug: &'a str,
    title: &'a str,
    published: &'a str,
    draft: bool,
    url: String,
    prev: Option<&'a NavLink>,
    next: Option<&'a NavLink>,
}

impl<'a> SortedRow<'a> {
    fn new(navigated: &'a NavigatedPost, urls: &SiteUrls) -> Self {
        let post = &navigated.post;

        Self {
            slug: &post.slug,
            title: &post.data.title,
            published: &post.data.published,
            draft: post.data.draft,
            url: urls.post_url(&post.slug),
            prev: navigated.navigation.prev.as_ref(),
            next: navigated.navigation.next.as_ref(),
        }
    }
}

pub(crate) async fn print_sorted(context: &Context) -> Result<()> {
    let sorted = context.lister().sorted_posts().await?;
    let urls = context.urls();

    let rows: Vec<_> = sorted.iter().map(|p| SortedRow::new(p, &urls)).collect();

    print_json(&rows)
}
