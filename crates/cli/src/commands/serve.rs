use std::sync::Arc;

use anyhow::Result;
use case_tracker_http::{AppState, create_router};
use case_tracker_llm::{CaseExtractor, LlmClient};
use case_tracker_storage::SqliteStorage;

use crate::{get_api_key, get_base_url, get_database_url, get_model, get_prompts, get_shape_policy};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let database_url = get_database_url();
    let storage = SqliteStorage::new(&database_url).await?;

    let llm = LlmClient::new(get_api_key()?, get_base_url())?.with_model(get_model());
    tracing::info!(model = %llm.model(), base_url = %llm.base_url(), "extraction model configured");

    let extractor = CaseExtractor::new(Arc::new(llm))
        .with_prompts(get_prompts()?)
        .with_shape_policy(get_shape_policy());
    tracing::info!(shape_policy = ?extractor.shape_policy(), "extraction reply policy");

    let state = Arc::new(AppState::new(Arc::new(storage.clone()), extractor));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let served = axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await;

    storage.close().await;
    served?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received, draining connections");
}
