use icdxn_core::enums::ExportFormat;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: String,
    format: ExportFormat,
    rows: usize,
}

/// Handle `icdxn export`.
pub async fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = ExportFormat::parse_lenient(&args.file_format);
    let dir = args.out.as_ref().unwrap_or(&ctx.config.export.dir);

    let rows = ctx.service.export_rows().await?;
    let export = icdxn_tabular::export_to_dir(&rows, format, dir)?;

    output(
        &ExportResponse {
            path: export.path.display().to_string(),
            format,
            rows: rows.len(),
        },
        flags.format,
    )
}
