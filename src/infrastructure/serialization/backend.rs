//! Configuration-selected serializer backend

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{JsonModelSerializer, XmlModelSerializer};
use crate::config::SerializerConfig;
use crate::domain::{ContentModel, ModelSerializer, SerializationError};

/// Wire format of a serializer backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializerFormat {
    Json,
    Xml,
}

/// One of the built-in serializer backends
#[derive(Debug, Clone)]
pub enum SerializerBackend {
    Json(JsonModelSerializer),
    Xml(XmlModelSerializer),
}

impl SerializerBackend {
    pub fn from_config(config: &SerializerConfig) -> Self {
        match config.format {
            SerializerFormat::Json => Self::Json(
                JsonModelSerializer::new()
                    .pretty(config.pretty)
                    .enabled(config.enabled),
            ),
            SerializerFormat::Xml => Self::Xml(XmlModelSerializer::new().enabled(config.enabled)),
        }
    }

    pub fn format(&self) -> SerializerFormat {
        match self {
            Self::Json(_) => SerializerFormat::Json,
            Self::Xml(_) => SerializerFormat::Xml,
        }
    }
}

impl ModelSerializer for SerializerBackend {
    fn serialize<T: ContentModel>(&self, model: &T) -> Result<String, SerializationError> {
        match self {
            Self::Json(s) => s.serialize(model),
            Self::Xml(s) => s.serialize(model),
        }
    }

    fn deserialize<T: ContentModel>(&self, input: &str) -> Result<T, SerializationError> {
        match self {
            Self::Json(s) => s.deserialize(input),
            Self::Xml(s) => s.deserialize(input),
        }
    }

    fn is_available(&self) -> bool {
        match self {
            Self::Json(s) => s.is_available(),
            Self::Xml(s) => s.is_available(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Json(s) => s.name(),
            Self::Xml(s) => s.name(),
        }
    }
}

/// First available backend, in preference order.
pub fn select_available(backends: &[SerializerBackend]) -> Option<&SerializerBackend> {
    let selected = backends.iter().find(|b| b.is_available());
    match selected {
        Some(backend) => debug!(backend = backend.name(), "Selected serializer backend"),
        None => warn!(candidates = backends.len(), "No serializer backend available"),
    }
    selected
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{Breadcrumb, ComponentMeta, Link, NavigationLinks, SitemapItem, TcmUri};
    use crate::shared::PaginatedResult;

    fn config(format: SerializerFormat, enabled: bool) -> SerializerConfig {
        SerializerConfig {
            format,
            pretty: false,
            enabled,
        }
    }

    #[test]
    fn builds_configured_format() {
        let json = SerializerBackend::from_config(&config(SerializerFormat::Json, true));
        let xml = SerializerBackend::from_config(&config(SerializerFormat::Xml, true));
        assert_eq!(json.format(), SerializerFormat::Json);
        assert_eq!(xml.name(), "xml");
    }

    #[test]
    fn dispatches_round_trip() {
        let nav: NavigationLinks = vec![Link::new("/a", "A"), Link::new("/b", "B")]
            .into_iter()
            .collect();
        for format in [SerializerFormat::Json, SerializerFormat::Xml] {
            let backend = SerializerBackend::from_config(&config(format, true));
            let text = backend.serialize(&nav).unwrap();
            let back: NavigationLinks = backend.deserialize(&text).unwrap();
            assert_eq!(back, nav, "{format:?}");
        }
    }

    fn backends() -> [SerializerBackend; 2] {
        [
            SerializerBackend::from_config(&config(SerializerFormat::Json, true)),
            SerializerBackend::from_config(&config(SerializerFormat::Xml, true)),
        ]
    }

    fn assert_round_trip<T: ContentModel + PartialEq + std::fmt::Debug>(backend: &SerializerBackend, model: &T) {
        let text = backend.serialize(model).unwrap();
        let back: T = backend.deserialize(&text).unwrap();
        assert_eq!(&back, model, "{:?}", backend.format());
    }

    #[test]
    fn every_model_round_trips_through_every_backend() {
        let published = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let component = ComponentMeta::new(TcmUri::component(5, 42), "Widgets", 12)
            .with_keyword("Topic", "rust")
            .with_custom("author", "A. Writer")
            .published_at(published);
        let mut link = Link::new("/products", "");
        link.title = Some(String::new());
        link.alternate_text = Some("All products".into());
        let crumb: Breadcrumb = vec![Link::new("/", "Home"), link.clone()].into_iter().collect();
        let sitemap = SitemapItem::group(
            "Home",
            "/",
            vec![SitemapItem::page("About", "/about.html").hidden()],
        );
        let page = PaginatedResult::new(vec![component.clone()], 21, 20, 10);

        for backend in &backends() {
            assert_round_trip(backend, &link);
            assert_round_trip(backend, &crumb);
            assert_round_trip(backend, &Breadcrumb::new());
            assert_round_trip(backend, &NavigationLinks::new());
            assert_round_trip(backend, &component);
            assert_round_trip(backend, &sitemap);
            assert_round_trip(backend, &page);
            assert_round_trip(backend, &PaginatedResult::<ComponentMeta>::empty(0, 10));
        }
    }

    #[test]
    fn padded_text_round_trips_or_is_refused() {
        let link = Link::new("/a", "  Home  ");
        for backend in &backends() {
            match backend.serialize(&link) {
                Ok(text) => assert_eq!(backend.deserialize::<Link>(&text).unwrap(), link),
                Err(err) => {
                    assert_eq!(backend.format(), SerializerFormat::Xml);
                    assert!(matches!(err, SerializationError::Encode { .. }));
                }
            }
        }
    }

    #[test]
    fn select_skips_unavailable_backends() {
        let backends = [
            SerializerBackend::from_config(&config(SerializerFormat::Json, false)),
            SerializerBackend::from_config(&config(SerializerFormat::Xml, true)),
        ];
        let selected = select_available(&backends).unwrap();
        assert_eq!(selected.format(), SerializerFormat::Xml);
    }

    #[test]
    fn select_returns_none_when_all_disabled() {
        let backends = [SerializerBackend::from_config(&config(SerializerFormat::Json, false))];
        assert!(select_available(&backends).is_none());
        assert!(select_available(&[]).is_none());
    }
}
