use miette::Result;
use posts::Tag;
use serde::Serialize;

use super::{print_json, Context};

#[derive(Serialize, Debug)]
struct TagRow<'a> {
    #[serde(flatten)]
    tag: &'a Tag,
    url: String,
}

pub(crate) async fn print_tags(context: &Context) -> Result<()> {
    let tags = context.lister().tag_list().await?;
    let urls = context.urls();

    let rows: Vec<_> = tags
        .iter()
        .map(|tag| TagRow {
            tag,
            url: urls.tag_url(&tag.name),
        })
        .collect();

    print_json(&rows)
}

pub(crate) async fn print_categories(context: &Context) -> Result<()> {
    let categories = context.lister().category_list().await?;

    print_json(&categories)
}
