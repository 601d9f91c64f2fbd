use clap::Parser;
use kata_server::server::{
    config::{CliArgs, ServerConfig},
    routes::router,
    state::AppState,
    telemetry::init_telemetry,
};
use tokio::{net::TcpListener, signal, time::timeout};
use tokio_util::sync::CancellationToken;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    init_telemetry()?;

    let listener = TcpListener::bind(config.server_addr).await?;
    log_startup_info(&config);

    let app = router(AppState::new(&config));
    let shutdown = CancellationToken::new();
    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.clone().cancelled_owned())
            .into_future(),
    );

    tokio::select! {
        res = &mut server => {
            res??;
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    tracing::info!(
        "Shutdown signal received, draining connections for up to {:?}",
        config.shutdown_timeout
    );
    shutdown.cancel();

    match timeout(config.shutdown_timeout, &mut server).await {
        Ok(res) => res??,
        Err(_) => {
            tracing::warn!("Graceful drain timed out, aborting remaining connections");
            server.abort();
        }
    }

    tracing::info!("Service shut down successfully");
    Ok(())
}

fn log_startup_info(config: &ServerConfig) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "Starting HTTP service on {} with full config: {:#?}",
            config.server_addr,
            config
        );
    } else {
        tracing::info!("Starting HTTP service on {}", config.server_addr);
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
