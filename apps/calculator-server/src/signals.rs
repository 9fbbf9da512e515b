//! Process signals that stop the HTTP server.

use std::fmt;

use anyhow::{Context, Result};
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Signal that ended the serving loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    #[cfg(unix)]
    Terminate,
}

impl ShutdownSignal {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            #[cfg(unix)]
            Self::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve with the first of Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::select! {
        result = interrupt() => result,
        result = terminate() => result,
    }
}

/// Cancel `token` when a shutdown signal arrives.
///
/// A handler that cannot be installed also cancels the token.
pub async fn cancel_on_shutdown(token: CancellationToken) {
    match next_shutdown_signal().await {
        Ok(signal) => tracing::info!(%signal, "Shutdown requested, draining connections"),
        Err(e) => tracing::error!(error = ?e, "Signal handling failed, shutting down"),
    }
    token.cancel();
}

async fn interrupt() -> Result<ShutdownSignal> {
    signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl+C")?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<ShutdownSignal> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("failed to install SIGTERM handler")?
        .recv()
        .await;
    Ok(ShutdownSignal::Terminate)
}

#[cfg(not(unix))]
async fn terminate() -> Result<ShutdownSignal> {
    std::future::pending().await
}
