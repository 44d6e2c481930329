use miette::{Context, IntoDiagnostic, Result};
use tracing_subscriber::{prelude::*, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

fn default_directives(crate_name: &str) -> String {
    format!("warn,{crate_name}=info,posts=info")
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Logs go to stderr so stdout stays free for command output.
pub fn setup_tracing(crate_name: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| default_directives(crate_name));

    let env_filter = EnvFilter::builder()
        .parse(&rust_log)
        .into_diagnostic()
        .wrap_err_with(|| miette::miette!("Couldn't create env filter from {}", rust_log))?;

    let heirarchical = HierarchicalLayer::default()
        .with_writer(std::io::stderr)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_targets(true)
        .with_verbose_exit(false)
        .with_verbose_entry(false);

    Registry::default()
        .with(heirarchical)
        .with(env_filter)
        .try_init()
        .into_diagnostic()?;

    Ok(())
}
