use std::{
    convert::Infallible,
    path::{Path, PathBuf},
};

use include_dir::Dir;
use tracing::{debug, instrument};

use crate::{entry::is_post_source, error::ContentError, PostEntry};

/// Source of post records.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every record in the collection, drafts included, in a stable order.
    async fn all_posts(&self) -> Result<Vec<PostEntry>, Self::Error>;
}

/// Fetches the collection, dropping drafts unless `include_drafts` is set.
#[instrument(skip(store), err)]
pub async fn fetch_posts<S>(store: &S, include_drafts: bool) -> Result<Vec<PostEntry>, S::Error>
where
    S: ContentStore + ?Sized,
{
    let mut posts = store.all_posts().await?;
    let total = posts.len();

    if !include_drafts {
        posts.retain(|post| !post.data.draft);
    }

    debug!(total, kept = posts.len(), "Fetched posts");

    Ok(posts)
}

/// Posts embedded into the binary with `include_dir!`.
#[derive(Debug, Clone, Copy)]
pub struct DirStore {
    dir: &'static Dir<'static>,
}

impl DirStore {
    pub fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }
}

#[async_trait::async_trait]
impl ContentStore for DirStore {
    type Error = ContentError;

    async fn all_posts(&self) -> Result<Vec<PostEntry>, Self::Error> {
        let mut posts = self
            .dir
            .find("**/*")
            .map_err(|e| ContentError::Glob {
                message: e.to_string(),
            })?
            .filter_map(|e| e.as_file())
            .filter(|file| is_post_source(file.path()))
            .map(|file| PostEntry::from_source(file.path(), file.contents()))
            .collect::<Result<Vec<_>, _>>()?;

        posts.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(posts)
    }
}

/// Posts read from a directory on disk on every fetch.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn markdown_files(&self) -> Result<Vec<PathBuf>, ContentError> {
        let io_err = |path: &Path| {
            let path = path.to_owned();
            move |source| ContentError::Io { path, source }
        };

        let mut files = vec![];
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir).await.map_err(io_err(&dir))?;

            while let Some(entry) = entries.next_entry().await.map_err(io_err(&dir))? {
                let path = entry.path();
                let file_type = entry.file_type().await.map_err(io_err(&path))?;

                if file_type.is_dir() {
                    pending.push(path);
                } else if is_post_source(&path) {
                    files.push(path);
                }
            }
        }

        files.sort();

        Ok(files)
    }
}

#[async_trait::async_trait]
impl ContentStore for FsStore {
    type Error = ContentError;

    #[instrument(name = "FsStore::all_posts", skip(self), fields(root = %self.root.display()), err)]
    async fn all_posts(&self) -> Result<Vec<PostEntry>, Self::Error> {
        let mut posts = vec![];

        for path in self.markdown_files().await? {
            let contents = tokio::fs::read(&path)
                .await
                .map_err(|source| ContentError::Io {
                    path: path.clone(),
                    source,
                })?;

            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            posts.push(PostEntry::from_source(relative, &contents)?);
        }

        debug!(count = posts.len(), "Read posts from disk");

        Ok(posts)
    }
}

/// Records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    posts: Vec<PostEntry>,
}

impl MemoryStore {
    pub fn new(posts: Vec<PostEntry>) -> Self {
        Self { posts }
    }
}

#[async_trait::async_trait]
impl ContentStore for MemoryStore {
    type Error = Infallible;

    async fn all_posts(&self) -> Result<Vec<PostEntry>, Self::Error> {
        Ok(self.posts.clone())
    }
}
