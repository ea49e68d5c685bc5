//! Server lifecycle: bind, serve, stop on Ctrl-C.

use std::net::SocketAddr;

use crate::router::api_router;
use crate::state::AppState;

/// Serve the curation API on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns `std::io::Error` if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(%local, "curation API listening");

    axum::serve(listener, api_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("curation API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}
