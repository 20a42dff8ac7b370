use std::net::SocketAddr;
use std::process::ExitCode;

use royale_mcp_gateway::clients::royale::RoyaleClient;
use royale_mcp_gateway::infra::config::Config;
use royale_mcp_gateway::infra::runtime::mcp_transport;
use royale_mcp_gateway::tools::tool_router::RoyaleSvc;
use royale_mcp_gateway::{cli, infra};

#[tokio::main]
async fn main() -> ExitCode {
    infra::logging::init();

    // Any argument switches to the admin CLI; bare invocation serves.
    if std::env::args().len() > 1 {
        return cli::run().await;
    }

    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "gateway failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let cfg = Config::from_env()?;
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        base_url = %cfg.base_url,
        deprecate_rest = cfg.deprecate_rest,
        "BOOT royale-mcp-gateway"
    );

    let client = RoyaleClient::from_config(&cfg);

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        let factory = move || {
            let handler = RoyaleSvc {
                client: client.clone(),
            };
            (handler, RoyaleSvc::router())
        };
        mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = if cfg.deprecate_rest {
        infra::http_app::build_app_default(client)
    } else {
        infra::http_app::build_app_with_deprecated_api(client)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
