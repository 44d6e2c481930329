use miette::Result;

use super::{print_json, Context};

pub(crate) async fn print_list(context: &Context) -> Result<()> {
    let list = context.lister().sorted_posts_list().await?;

    print_json(&list)
}
