use tracing::{info, instrument};

use crate::{
    config::{BuildMode, SiteConfig},
    date::sort_by_published,
    i18n::{I18nKey, Lang, Localizer},
    navigation::{link_neighbours, NavigatedPost},
    store::{fetch_posts, ContentStore},
    summary::PostSummary,
    taxonomy::{count_categories, count_tags, Category, Tag},
    url::{CategoryUrls, SiteUrls},
    PostEntry,
};

/// Derives the listing views of a post collection.
///
/// Every method fetches the collection again; nothing is cached between
/// calls.
#[derive(Debug, Clone)]
pub struct PostLister<S, L = Lang, U = SiteUrls> {
    store: S,
    localizer: L,
    urls: U,
    mode: BuildMode,
}

impl<S: ContentStore> PostLister<S> {
    pub fn from_config(store: S, config: &SiteConfig) -> Self {
        Self {
            store,
            localizer: config.lang,
            urls: SiteUrls::new(config.base.clone(), &config.lang),
            mode: config.mode,
        }
    }
}

impl<S, L, U> PostLister<S, L, U>
where
    S: ContentStore,
    L: Localizer,
    U: CategoryUrls,
{
    pub fn new(store: S, localizer: L, urls: U, mode: BuildMode) -> Self {
        Self {
            store,
            localizer,
            urls,
            mode,
        }
    }

    async fn fetch(&self) -> Result<Vec<PostEntry>, S::Error> {
        fetch_posts(&self.store, self.mode.include_drafts()).await
    }

    async fn fetch_sorted(&self) -> Result<Vec<PostEntry>, S::Error> {
        let mut posts = self.fetch().await?;
        sort_by_published(&mut posts);

        Ok(posts)
    }

    /// Newest first, each post paired with its neighbours.
    #[instrument(name = "PostLister::sorted_posts", skip(self), fields(mode = ?self.mode))]
    pub async fn sorted_posts(&self) -> Result<Vec<NavigatedPost>, S::Error> {
        let posts = self.fetch_sorted().await?;
        info!(count = posts.len(), "Sorted posts");

        Ok(link_neighbours(posts))
    }

    /// Newest first, without bodies or navigation.
    #[instrument(name = "PostLister::sorted_posts_list", skip(self), fields(mode = ?self.mode))]
    pub async fn sorted_posts_list(&self) -> Result<Vec<PostSummary>, S::Error> {
        let posts = self.fetch_sorted().await?;

        Ok(posts.into_iter().map(PostSummary::from).collect())
    }

    #[instrument(name = "PostLister::tag_list", skip(self), fields(mode = ?self.mode))]
    pub async fn tag_list(&self) -> Result<Vec<Tag>, S::Error> {
        let posts = self.fetch().await?;
        let tags = count_tags(&posts);
        info!(tags = tags.len(), "Counted tags");

        Ok(tags)
    }

    #[instrument(name = "PostLister::category_list", skip(self), fields(mode = ?self.mode))]
    pub async fn category_list(&self) -> Result<Vec<Category>, S::Error> {
        let posts = self.fetch().await?;
        let uncategorized = self.localizer.text(I18nKey::Uncategorized);
        let categories = count_categories(&posts, uncategorized, &self.urls);
        info!(categories = categories.len(), "Counted categories");

        Ok(categories)
    }
}
