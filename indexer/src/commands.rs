use std::{io::Write, path::PathBuf};

use clap::{Args, Subcommand};
use miette::{IntoDiagnostic, Result};
use posts::{BuildMode, FsStore, PostLister, SiteConfig, SiteUrls};
use serde::Serialize;
use tracing::instrument;

pub(crate) mod list;
pub(crate) mod sorted;
pub(crate) mod taxonomy;
pub(crate) mod validate;

#[derive(Args, Debug)]
pub(crate) struct SiteArgs {
    /// Root of the post collection
    #[arg(long, global = true, env = "CONTENT_DIR", default_value = "content/posts")]
    pub(crate) content_dir: PathBuf,

    /// Include draft posts regardless of SITE_MODE
    #[arg(long, global = true)]
    pub(crate) drafts: bool,
}

#[derive(Subcommand, Debug, Default)]
pub(crate) enum Command {
    /// Posts newest first with prev/next links
    #[default]
    Posts,
    /// Post metadata for listing pages
    List,
    /// Tag counts
    Tags,
    /// Category counts with archive links
    Categories,
    /// Check every post, drafts included
    Validate,
}

impl Command {
    pub(crate) async fn run(&self, site: &SiteArgs) -> Result<()> {
        let context = Context::new(site)?;

        match &self {
            Command::Posts => sorted::print_sorted(&context).await,
            Command::List => list::print_list(&context).await,
            Command::Tags => taxonomy::print_tags(&context).await,
            Command::Categories => taxonomy::print_categories(&context).await,
            Command::Validate => validate::validate(&context).await,
        }
    }
}

pub(crate) struct Context {
    pub(crate) config: SiteConfig,
    pub(crate) content_dir: PathBuf,
}

impl Context {
    #[instrument(name = "Context::new", skip(site), fields(content_dir = %site.content_dir.display()), err)]
    fn new(site: &SiteArgs) -> Result<Self> {
        let mut config = SiteConfig::from_env()?;
        if site.drafts {
            config.mode = BuildMode::Development;
        }

        Ok(Self {
            config,
            content_dir: site.content_dir.clone(),
        })
    }

    pub(crate) fn store(&self) -> FsStore {
        FsStore::new(&self.content_dir)
    }

    pub(crate) fn lister(&self) -> PostLister<FsStore> {
        PostLister::from_config(self.store(), &self.config)
    }

    pub(crate) fn urls(&self) -> SiteUrls {
        SiteUrls::new(self.config.base.clone(), &self.config.lang)
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    serde_json::to_writer_pretty(&mut stdout, value).into_diagnostic()?;
    writeln!(stdout).into_diagnostic()?;

    Ok(())
}
