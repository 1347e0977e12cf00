//! Quote relay server binary.

use anyhow::Context;
use quote_relay::api::rest::{AppState, create_router};
use quote_relay::application::services::{CipherService, CurrencyService, QuoteService};
use quote_relay::config::Settings;
use quote_relay::domain::entities::ReferenceRecord;
use quote_relay::infrastructure::persistence::{InMemoryReferenceStore, ReferenceStore};
use quote_relay::infrastructure::quote_source::{HttpClient, QuoteFetcher, QuoteSource};
use quote_relay::infrastructure::telemetry;
use std::sync::Arc;
use tracing::{info, info_span, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e).context("failed to read .env");
    }

    let settings = Settings::load().context("failed to load settings")?;
    telemetry::init(&settings.logging).context("failed to install tracing subscriber")?;

    let store: Arc<dyn ReferenceStore> = if settings.reference.seed_defaults {
        Arc::new(InMemoryReferenceStore::with_records(
            ReferenceRecord::defaults(),
        ))
    } else {
        warn!("reference store starts empty; transformed quotes fall back to descriptions");
        Arc::new(InMemoryReferenceStore::new())
    };

    let client = HttpClient::new(settings.quote_source.timeout_ms)
        .context("failed to build quote source client")?;
    let source: Arc<dyn QuoteSource> = Arc::new(QuoteFetcher::new(
        client,
        settings.quote_source.url.clone(),
        info_span!("quote_source"),
    ));

    let state = Arc::new(AppState {
        quotes: QuoteService::new(source, Arc::clone(&store), info_span!("quote_service")),
        currencies: CurrencyService::new(store, info_span!("currency_service")),
        cipher: CipherService::new(settings.cipher),
    });

    let addr = settings.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, upstream = %settings.quote_source.url, "quote relay listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("quote relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
