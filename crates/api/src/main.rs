use std::sync::Arc;

use anyhow::Context;

use forgeerp_api::app::{build_app, services};
use forgeerp_api::config::ApiConfig;
use forgeerp_api::store::InMemoryDocumentStore;
use forgeerp_sales::{Catalog, KeyTranslator, ModRegistry, Translator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    forgeerp_observability::init();

    let config = ApiConfig::from_env()?;

    let translator: Arc<dyn Translator> = match &config.catalog_path {
        Some(path) => Arc::new(Catalog::load(path)?),
        None => {
            tracing::warn!("FORGEERP_CATALOG not set; labels will show translation keys");
            Arc::new(KeyTranslator)
        }
    };

    // Extensions register their sales mods here, before the registry is frozen.
    let mods = ModRegistry::new();

    let services = services::build_services(
        &config,
        mods,
        translator,
        Arc::new(InMemoryDocumentStore::new()),
    );
    let app = build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
