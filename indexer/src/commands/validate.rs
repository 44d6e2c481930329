use miette::Result;
use posts::{fetch_posts, validate::validate_posts};
use tracing::info;

use super::Context;

pub(crate) async fn validate(context: &Context) -> Result<()> {
    let posts = fetch_posts(&context.store(), true).await?;

    info!(
        count = posts.len(),
        content_dir = %context.content_dir.display(),
        "Validating posts"
    );
    validate_posts(&posts)?;

    println!("Posts Valid! ✅");

    Ok(())
}
