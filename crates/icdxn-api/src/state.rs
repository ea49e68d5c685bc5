use std::path::PathBuf;
use std::sync::Arc;

use icdxn_db::service::CurationService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CurationService>,
    /// Directory receiving export files.
    pub export_dir: Arc<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(service: CurationService, export_dir: PathBuf) -> Self {
        Self {
            service: Arc::new(service),
            export_dir: Arc::new(export_dir),
        }
    }
}
