//! Listener setup and graceful shutdown

use axum::Router;
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tracing::{error, info};

/// Bind `address` and serve `router` until a shutdown signal arrives
pub async fn serve(router: Router, address: &str) -> std::io::Result<()> {
    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;
    serve_on(router, listener).await
}

/// Serve `router` on an already bound listener
pub async fn serve_on(router: Router, listener: TcpListener) -> std::io::Result<()> {
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
