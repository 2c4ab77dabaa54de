use std::sync::Arc;

use forgeerp_sales::{ModRegistry, SalesFooterHtml, Translator};

use crate::config::ApiConfig;
use crate::store::DocumentStore;

/// Everything handlers need, built once at start-up.
pub struct AppServices {
    pub footer: SalesFooterHtml,
    pub documents: Arc<dyn DocumentStore>,
}

/// Freeze the mod registry and wire it into the footer renderer.
pub fn build_services(
    config: &ApiConfig,
    mods: ModRegistry,
    translator: Arc<dyn Translator>,
    documents: Arc<dyn DocumentStore>,
) -> AppServices {
    tracing::info!(mods = mods.len(), "building sales form services");
    let footer = SalesFooterHtml::new(Arc::new(mods), translator)
        .with_number_format(config.number_format);

    AppServices { footer, documents }
}
