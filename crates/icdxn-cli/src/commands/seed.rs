use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `icdxn seed`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.service.seed_associations().await?;
    output(&outcome, flags.format)
}
