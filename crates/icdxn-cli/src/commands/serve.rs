use std::net::SocketAddr;

use anyhow::Context;
use icdxn_api::AppState;
use icdxn_config::ServerConfig;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `icdxn serve`.
///
/// Seeding runs first and a failure aborts startup.
pub async fn handle(args: &ServeArgs, ctx: AppContext) -> anyhow::Result<()> {
    let addr = bind_addr(&ctx.config.server, args)?;

    ctx.service
        .seed_associations()
        .await
        .context("seeding failed; refusing to serve")?;

    let AppContext { service, config } = ctx;
    let state = AppState::new(service, config.export.dir);
    icdxn_api::serve(addr, state)
        .await
        .with_context(|| format!("server on {addr} failed"))
}

fn bind_addr(server: &ServerConfig, args: &ServeArgs) -> anyhow::Result<SocketAddr> {
    let mut server = server.clone();
    if let Some(host) = &args.host {
        server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    Ok(server.bind_addr()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            host: Some("0.0.0.0".into()),
            port: Some(8080),
        };
        let addr = bind_addr(&ServerConfig::default(), &args).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn config_used_without_flags() {
        let args = ServeArgs {
            host: None,
            port: None,
        };
        let addr = bind_addr(&ServerConfig::default(), &args).unwrap();
        assert_eq!(addr.port(), 5000);
    }
}
