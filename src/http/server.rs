//! Listener ownership and the serve loop.
//!
//! A `Sidecar` owns the bound listener from `bind` until `serve_until`
//! returns. Its lifecycle moves through `Starting -> Serving -> ShuttingDown
//! -> Stopped`; `Stopped` is published only after the listener is dropped,
//! on both the signal path and the error path.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::config::SidecarConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Starting,
    Serving,
    ShuttingDown,
    Stopped,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Starting => "starting",
            LifecycleState::Serving => "serving",
            LifecycleState::ShuttingDown => "shutting_down",
            LifecycleState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

fn transition(state: &watch::Sender<LifecycleState>, next: LifecycleState) {
    let previous = state.send_replace(next);
    tracing::info!(from = %previous, to = %next, "Lifecycle transition");
}

/// A bound sidecar server that has not started serving yet.
pub struct Sidecar {
    listener: TcpListener,
    app: Router,
    local_addr: SocketAddr,
    state: watch::Sender<LifecycleState>,
}

impl Sidecar {
    /// Bind the listener for `config`. Name resolution and bind errors are fatal.
    pub async fn bind(config: &SidecarConfig, app: Router) -> Result<Self, ServerError> {
        let bind_error = |source| ServerError::Bind {
            addr: config.display_addr(),
            source,
        };

        let listener = TcpListener::bind((config.host.as_str(), config.port))
            .await
            .map_err(bind_error)?;
        let local_addr = listener.local_addr().map_err(bind_error)?;

        let (state, _) = watch::channel(LifecycleState::Starting);
        tracing::info!(%local_addr, "Sidecar bound");

        Ok(Self {
            listener,
            app,
            local_addr,
            state,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    /// Watch lifecycle transitions, including those made after `serve_until` takes `self`.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Serve requests until `signal` resolves, then release the listener.
    ///
    /// Open connections are not drained: once the signal fires the serve
    /// future is dropped, even if a client is midway through a request.
    /// Connection tasks still running end with the runtime.
    pub async fn serve_until<F>(self, signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        let Sidecar {
            listener,
            app,
            local_addr,
            state,
        } = self;

        transition(&state, LifecycleState::Serving);
        tracing::info!(%local_addr, "Serving requests at http://{}", local_addr);

        let serve = axum::serve(listener, app).into_future();
        let result = tokio::select! {
            result = serve => result,
            _ = signal => {
                transition(&state, LifecycleState::ShuttingDown);
                Ok(())
            }
        };

        // the serve future, and the listener it owned, is dropped by now
        transition(&state, LifecycleState::Stopped);
        result.map_err(ServerError::Serve)
    }
}

/// Bind and serve until SIGINT or SIGTERM.
///
/// This function blocks until the server shuts down.
pub async fn start_server(config: &SidecarConfig, app: Router) -> Result<(), ServerError> {
    let sidecar = Sidecar::bind(config, app).await?;
    sidecar.serve_until(shutdown::shutdown_signal()).await?;
    tracing::info!("Sidecar stopped");
    Ok(())
}
