use include_dir::{include_dir, Dir};
use posts::{validate::validate_posts, BuildMode, DirStore, PostLister, SiteConfig};

static CONTENT: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/tests/content");

fn lister(mode: BuildMode) -> PostLister<DirStore> {
    let config = SiteConfig {
        mode,
        base: "/blog/".to_string(),
        ..SiteConfig::default()
    };

    PostLister::from_config(DirStore::new(&CONTENT), &config)
}

#[tokio::test]
async fn production_listing() {
    let sorted = lister(BuildMode::Production).sorted_posts().await.unwrap();

    let slugs: Vec<_> = sorted.iter().map(|p| p.post.slug.as_str()).collect();
    assert_eq!(slugs, vec!["async-rust", "hello-world", "guides", "someday"]);

    let hello = &sorted[1];
    assert_eq!(hello.navigation.next.as_ref().unwrap().title, "Async Rust Notes");
    assert_eq!(hello.navigation.prev.as_ref().unwrap().slug, "guides");
    assert_eq!(hello.post.body, "Welcome to the blog.\n");
}

#[tokio::test]
async fn development_listing_shows_drafts() {
    let list = lister(BuildMode::Development)
        .sorted_posts_list()
        .await
        .unwrap();

    assert_eq!(list.len(), 5);
    assert_eq!(list[0].slug, "unfinished");
    assert!(list[0].data.draft);
}

#[tokio::test]
async fn index_tables() {
    let lister = lister(BuildMode::Production);

    let tags = serde_json::to_value(lister.tag_list().await.unwrap()).unwrap();
    assert_eq!(
        tags,
        serde_json::json!([
            { "name": "async", "count": 1 },
            { "name": "blog", "count": 1 },
            { "name": "meta", "count": 1 },
            { "name": "rust", "count": 2 },
        ])
    );

    let categories = serde_json::to_value(lister.category_list().await.unwrap()).unwrap();
    assert_eq!(
        categories,
        serde_json::json!([
            { "name": "Notes", "count": 1, "url": "/blog/archive/?category=Notes" },
            { "name": "Tech", "count": 1, "url": "/blog/archive/?category=Tech" },
            { "name": "tech", "count": 1, "url": "/blog/archive/?category=tech" },
            { "name": "Uncategorized", "count": 1, "url": "/blog/archive/?uncategorized=true" },
        ])
    );
}

#[tokio::test]
async fn fixture_validation_flags_the_undated_post() {
    let posts = posts::fetch_posts(&DirStore::new(&CONTENT), true)
        .await
        .unwrap();

    let err = validate_posts(&posts).unwrap_err();
    let related: Vec<String> = err.related().unwrap().map(ToString::to_string).collect();

    assert_eq!(related.len(), 1);
    assert!(related[0].contains("not yet"));
}
