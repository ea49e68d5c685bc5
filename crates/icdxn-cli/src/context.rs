use anyhow::Context;
use icdxn_config::IcdxnConfig;
use icdxn_db::service::CurationService;

/// Everything a command needs: the opened store and the resolved config.
pub struct AppContext {
    pub service: CurationService,
    pub config: IcdxnConfig,
}

impl AppContext {
    /// Open the store named by `config.database.path`, creating it if missing.
    pub async fn init(config: IcdxnConfig) -> anyhow::Result<Self> {
        if config.database.is_in_memory() {
            tracing::warn!("database is in-memory; nothing will persist after exit");
        }
        let service = CurationService::new_local(&config.database.path)
            .await
            .with_context(|| format!("cannot open database at {}", config.database.path))?;
        Ok(Self { service, config })
    }
}
