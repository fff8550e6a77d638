//! Reusable delivery runtime.
//!
//! Provides [`DeliveryRuntime`], which wires the configured query adapter,
//! content broker and serializer backend together so the CLI (and tests)
//! don't repeat the bootstrap code.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::services::ContentQueryService;
use crate::config::AppConfig;
use crate::domain::{CmsVersion, ContentBroker, ModelSerializer};
use crate::infrastructure::{InMemoryBroker, SerializerBackend};
use crate::interfaces::cms::QueryAdapters;

// ── Options ────────────────────────────────────────────────────────

/// Options for building a delivery runtime.
pub struct RuntimeOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Content source; an empty in-memory broker when `None`.
    pub broker: Option<Arc<dyn ContentBroker>>,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            broker: None,
        }
    }
}

// ── DeliveryRuntime ────────────────────────────────────────────────

/// Wired-up delivery components.
pub struct DeliveryRuntime {
    config: AppConfig,
    adapters: Arc<QueryAdapters>,
    broker: Arc<dyn ContentBroker>,
    queries: ContentQueryService,
    serializer: SerializerBackend,
}

impl DeliveryRuntime {
    pub fn new(options: RuntimeOptions) -> Self {
        let RuntimeOptions { config, broker } = options;

        let adapters = Arc::new(QueryAdapters::with_defaults());
        let broker: Arc<dyn ContentBroker> = match broker {
            Some(broker) => broker,
            None => Arc::new(InMemoryBroker::new()),
        };
        let queries = ContentQueryService::new(adapters.clone(), broker.clone(), &config.delivery);
        let serializer = SerializerBackend::from_config(&config.serializer);

        info!(
            cms_version = %config.delivery.cms_version,
            serializer = serializer.name(),
            "Delivery runtime ready"
        );
        if !serializer.is_available() {
            warn!(serializer = serializer.name(), "Configured serializer is disabled");
        }

        Self {
            config,
            adapters,
            broker,
            queries,
            serializer,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn cms_version(&self) -> CmsVersion {
        self.queries.version()
    }

    pub fn adapters(&self) -> &Arc<QueryAdapters> {
        &self.adapters
    }

    pub fn broker(&self) -> &Arc<dyn ContentBroker> {
        &self.broker
    }

    pub fn queries(&self) -> &ContentQueryService {
        &self.queries
    }

    pub fn serializer(&self) -> &SerializerBackend {
        &self.serializer
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BrokerQuery, ComponentMeta, Query, TcmUri};
    use crate::infrastructure::SerializerFormat;

    #[tokio::test]
    async fn runtime_uses_configured_components() {
        let mut config = AppConfig::default();
        config.delivery.cms_version = CmsVersion::Tridion2013Sp1;
        config.serializer.format = SerializerFormat::Xml;

        let broker: Arc<dyn ContentBroker> = Arc::new(InMemoryBroker::with_components([ComponentMeta::new(
            TcmUri::component(1, 1),
            "Only",
            3,
        )]));
        let runtime = DeliveryRuntime::new(RuntimeOptions {
            config,
            broker: Some(broker),
        });

        assert_eq!(runtime.cms_version(), CmsVersion::Tridion2013Sp1);
        assert_eq!(runtime.serializer().format(), SerializerFormat::Xml);

        let page = runtime
            .queries()
            .execute(BrokerQuery::new(Query::new(0, 10)))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
    }

    #[test]
    fn default_runtime_has_all_adapters() {
        let runtime = DeliveryRuntime::new(RuntimeOptions::default());
        assert_eq!(runtime.adapters().supported_versions().len(), 3);
        assert_eq!(runtime.cms_version(), CmsVersion::Web8);
    }
}
