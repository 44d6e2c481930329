use clap::Parser;
use commands::{Command, SiteArgs};
use miette::{IntoDiagnostic, Result};

mod commands;

#[derive(Parser)]
#[command(author, version, about = "Listing views of a markdown post collection, as JSON")]
struct CliArgs {
    #[clap(flatten)]
    site: SiteArgs,

    #[clap(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .into_diagnostic()?
        .block_on(async { _main().await })
}

async fn _main() -> Result<()> {
    tracing_common::setup_tracing("indexer")?;

    let cli = CliArgs::parse();
    let command = cli.command.unwrap_or_default();

    command.run(&cli.site).await
}
