//! docmeta Router
//!
//! Web front end for the metadata generator: upload a PDF, DOCX or TXT
//! document, see its metadata, download it as CSV. Each request is handled
//! independently; nothing is kept between uploads.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod pages;

use config::RouterConfig;
use handlers::create_router;
use tokio::net::TcpListener;
use tracing::info;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the Router HTTP server
///
/// Binds the configured address and serves until the process exits.
/// Tracing must already be initialized by the caller.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    info!("Starting docmeta Router");
    info!("Bind address: {}", config.bind_addr());
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let app = create_router(config.max_upload_bytes);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on http://{}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
