pub mod ast;
pub mod config;
pub mod date;
pub mod entry;
pub mod error;
pub mod i18n;
pub mod lister;
pub mod navigation;
pub mod store;
pub mod summary;
pub mod taxonomy;
pub mod title;
pub mod url;
pub mod validate;

pub use self::{
    ast::MarkdownAst,
    config::{BuildMode, ConfigError, SiteConfig},
    entry::{PostData, PostEntry},
    error::ContentError,
    i18n::{I18nKey, Lang, Localizer},
    lister::PostLister,
    navigation::{NavLink, NavigatedPost, Navigation},
    store::{fetch_posts, ContentStore, DirStore, FsStore, MemoryStore},
    summary::PostSummary,
    taxonomy::{Category, Tag},
    url::{CategoryUrls, SiteUrls},
};
