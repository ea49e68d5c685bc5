use std::path::PathBuf;

/// Errors from reading or writing tabular files.
#[derive(Debug, thiserror::Error)]
pub enum TabularError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{rows} rows do not fit in one worksheet")]
    TooManyRows { rows: usize },
}
