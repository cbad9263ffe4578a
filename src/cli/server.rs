use std::sync::Arc;

use anyhow::Result;
use portfolio_contact::{ContactTransport, HttpTransport, SubmissionHandler};

use crate::email::{Inbox, LogInbox, SmtpInbox};
use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting portfolio server...");

    // CLI overrides win over config, and the contact origin follows them
    let config = config
        .with_server_overrides(host_override, port_override)
        .map_err(|e| anyhow::anyhow!(e))?;

    let transport: Arc<dyn ContactTransport> =
        Arc::new(HttpTransport::for_origin(&config.contact_origin())?);

    let inbox: Arc<dyn Inbox> = if config.email.enabled {
        Arc::new(SmtpInbox::new(&config.email)?)
    } else {
        tracing::warn!("Email disabled, contact messages will only be logged");
        Arc::new(LogInbox)
    };

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    let state = AppState {
        config,
        submitter: SubmissionHandler::new(transport),
        inbox,
    };

    let app = crate::create_app(state);

    let shutdown_signal = async {
        let ctrl_c = async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(err = %err, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(err) => {
                    tracing::error!(err = %err, "failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal");
            },
            _ = terminate => {
                tracing::info!("Received SIGTERM signal");
            },
        }

        tracing::info!("Starting graceful shutdown...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}
