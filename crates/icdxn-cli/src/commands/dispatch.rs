use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `serve` consumes the context; the server owns the store until shutdown.
pub async fn dispatch(command: Commands, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
        Commands::Seed => commands::seed::handle(&ctx, flags).await,
        Commands::Import(args) => commands::import::handle(&args, &ctx, flags).await,
        Commands::Export(args) => commands::export::handle(&args, &ctx, flags).await,
        Commands::Status => commands::status::handle(&ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
