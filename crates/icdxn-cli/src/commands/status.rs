use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `icdxn status`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let counts = ctx.service.catalog_counts().await?;
    output(&counts, flags.format)
}
