use anyhow::Context;
use icdxn_db::repos::catalog::CatalogCounts;
use icdxn_db::repos::seed::SeedOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportResponse {
    catalog: CatalogCounts,
    seed: SeedOutcome,
}

/// Handle `icdxn import`.
///
/// Both sheets are parsed before the store is touched, so a bad file leaves
/// the current catalog in place.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let diseases = icdxn_tabular::read_diseases_csv(&args.icd)
        .with_context(|| format!("failed to read disease sheet {}", args.icd.display()))?;
    let tests = icdxn_tabular::read_tests_csv(&args.xn)
        .with_context(|| format!("failed to read lab test sheet {}", args.xn.display()))?;

    let catalog = ctx.service.replace_catalog(&diseases, &tests).await?;
    let seed = ctx.service.seed_associations().await?;

    output(&ImportResponse { catalog, seed }, flags.format)
}
