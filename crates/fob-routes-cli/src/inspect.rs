//! `fob-routes inspect`

use std::io::Write;

use anyhow::Context;
use fob_routes::{BuildContext, OptionsDiscovery, create_build_context};

use crate::cli::InspectArgs;

/// Build the context described by `args`.
pub fn build_context(args: &InspectArgs) -> anyhow::Result<BuildContext> {
    let opts = OptionsDiscovery::new(&args.root)
        .load()
        .with_context(|| format!("failed to load routing options from {}", args.root.display()))?;

    let mut ctx = create_build_context(&args.root, Some(&opts), args.target.map(Into::into));
    ctx.is_dev_server = args.dev_server || args.client_only;
    ctx.is_dev_server_client_only = args.client_only;

    tracing::info!(
        routes_dir = %ctx.opts.routes_dir().display(),
        base_pathname = ctx.opts.base_pathname(),
        "resolved routing options"
    );
    Ok(ctx)
}

pub fn execute(args: InspectArgs) -> anyhow::Result<()> {
    let ctx = build_context(&args)?;

    let json = if args.compact {
        serde_json::to_string(&ctx)?
    } else {
        serde_json::to_string_pretty(&ctx)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write build context")?;
    Ok(())
}
