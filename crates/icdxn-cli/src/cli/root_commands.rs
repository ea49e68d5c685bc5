use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Seed associations if needed, then serve the curation API.
    Serve(ServeArgs),
    /// Insert one association per disease and test if none exist.
    Seed,
    /// Replace the disease and lab test catalogs from CSV sheets, then reseed.
    Import(ImportArgs),
    /// Write all associations to a CSV or XLSX file.
    Export(ExportArgs),
    /// Row counts for diseases, tests, and associations.
    Status,
    /// Print the JSON Schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides config).
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind (overrides config).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Disease sheet: disease_chapter, disease_group, disease_name, disease_code.
    #[arg(long)]
    pub icd: PathBuf,
    /// Lab test sheet: xn_chapter, xn_group, xn_name, xn_occurence.
    #[arg(long)]
    pub xn: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// File format; anything other than `xlsx` writes CSV.
    #[arg(long = "as", default_value = "csv")]
    pub file_format: String,
    /// Output directory (overrides config).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: disease, lab_test, association, disease_tests, export_row, selector.
    pub type_name: String,
}
