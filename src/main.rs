use flxrelay::api::{router, AppState};
use flxrelay::config::AppConfig;
use flxrelay::upstream::FlxpointClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = AppConfig::from_env()?;

    if cfg.flxpoint_token.is_none() {
        tracing::warn!("FLXPOINT_TOKEN is not set; /attributes lookups will fail");
    }

    let upstream = FlxpointClient::try_new(cfg.flxpoint_base_url.clone())?;
    let state = AppState {
        upstream,
        flxpoint_token: cfg.flxpoint_token.clone(),
    };

    let app = router(state);

    let listen_addr = cfg.listen_addr();
    let listener = match tokio::net::TcpListener::bind(listen_addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%listen_addr, %error, "server failed to start");
            return Ok(());
        }
    };

    tracing::info!(%listen_addr, "starting flxrelay");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("flxrelay exited cleanly");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term_signal) => term_signal.recv().await,
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                None
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
