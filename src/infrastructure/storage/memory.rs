//! In-memory content broker

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::{
    ComponentMeta, ContentBroker, ContentError, ContentResult, TcmUri, VendorQuery,
};
use crate::shared::PaginatedResult;

/// In-memory broker for development and testing
pub struct InMemoryBroker {
    components: DashMap<TcmUri, ComponentMeta>,
}

impl InMemoryBroker {
    pub fn new() -> Self {
        Self {
            components: DashMap::new(),
        }
    }

    /// Broker pre-loaded with the given components (later duplicates win).
    pub fn with_components(components: impl IntoIterator<Item = ComponentMeta>) -> Self {
        let broker = Self::new();
        for component in components {
            broker.components.insert(component.id, component);
        }
        broker
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for InMemoryBroker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentBroker for InMemoryBroker {
    async fn publish(&self, component: ComponentMeta) -> ContentResult<()> {
        if self.components.contains_key(&component.id) {
            return Err(ContentError::Conflict(component.id.to_string()));
        }
        self.components.insert(component.id, component);
        Ok(())
    }

    async fn unpublish(&self, id: TcmUri) -> ContentResult<()> {
        self.components
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ContentError::NotFound {
                entity: "Component",
                field: "id",
                value: id.to_string(),
            })
    }

    async fn find_by_id(&self, id: TcmUri) -> ContentResult<Option<ComponentMeta>> {
        Ok(self.components.get(&id).map(|c| c.value().clone()))
    }

    async fn execute(&self, query: &VendorQuery) -> ContentResult<PaginatedResult<ComponentMeta>> {
        let mut matches: Vec<ComponentMeta> = self
            .components
            .iter()
            .filter(|c| query.criteria.as_ref().map_or(true, |cr| c.matches(cr)))
            .map(|c| c.value().clone())
            .collect();

        match &query.sort {
            Some(sort) => matches.sort_by(|a, b| a.compare(b, sort)),
            None => matches.sort_by(|a, b| a.id.cmp(&b.id)),
        }

        if query.filter.max_results > 0 {
            matches.truncate(query.filter.max_results as usize);
        }
        let total = matches.len() as u64;

        let offset = query.filter.offset();
        let (items, page_size) = match query.filter.paging {
            Some(paging) => (
                matches
                    .into_iter()
                    .skip(offset as usize)
                    .take(paging.count as usize)
                    .collect(),
                paging.count,
            ),
            None => (matches, 0),
        };

        debug!(
            version = %query.version,
            total,
            offset,
            returned = items.len(),
            "Executed broker query"
        );

        Ok(PaginatedResult::new(items, total, offset, page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CmsVersion, Criteria, Paging, ResultFilter, SortColumn, SortDirection, VendorSort};

    fn seeded() -> InMemoryBroker {
        InMemoryBroker::with_components((1..=25).map(|i| {
            let schema = if i % 2 == 0 { 10 } else { 11 };
            ComponentMeta::new(TcmUri::component(5, i), format!("Item {i:02}"), schema)
        }))
    }

    fn vendor_query(criteria: Option<Criteria>, filter: ResultFilter) -> VendorQuery {
        VendorQuery {
            version: CmsVersion::Web8,
            criteria,
            sort: None,
            filter,
        }
    }

    #[tokio::test]
    async fn publish_rejects_duplicates() {
        let broker = InMemoryBroker::new();
        let c = ComponentMeta::new(TcmUri::component(1, 1), "One", 1);
        broker.publish(c.clone()).await.unwrap();
        assert_eq!(
            broker.publish(c).await,
            Err(ContentError::Conflict("tcm:1-1".into()))
        );
        assert_eq!(broker.len(), 1);
    }

    #[tokio::test]
    async fn unpublish_missing_is_not_found() {
        let broker = InMemoryBroker::new();
        let err = broker.unpublish(TcmUri::component(1, 9)).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound { entity: "Component", .. }));
    }

    #[tokio::test]
    async fn find_by_id_returns_published() {
        let broker = seeded();
        let found = broker.find_by_id(TcmUri::component(5, 3)).await.unwrap();
        assert_eq!(found.map(|c| c.title), Some("Item 03".to_string()));
        assert!(broker.find_by_id(TcmUri::component(6, 3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unpaged_query_returns_all_matches_in_id_order() {
        let broker = seeded();
        let result = broker
            .execute(&vendor_query(Some(Criteria::Schema { id: 10 }), ResultFilter::default()))
            .await
            .unwrap();
        assert_eq!(result.total, 12);
        assert_eq!(result.items.len(), 12);
        assert_eq!(result.items[0].id.item_id, 2);
        assert!(!result.has_more);
    }

    #[tokio::test]
    async fn paging_window_zero_based() {
        let broker = seeded();
        let filter = ResultFilter {
            max_results: 0,
            paging: Some(Paging { first: 20, count: 10 }),
            one_based: false,
        };
        let result = broker.execute(&vendor_query(None, filter)).await.unwrap();
        assert_eq!(result.total, 25);
        assert_eq!(result.items.len(), 5);
        assert_eq!(result.items[0].id.item_id, 21);
        assert_eq!(result.current_page, 3);
        assert_eq!(result.total_pages, 3);
    }

    #[tokio::test]
    async fn paging_window_one_based() {
        let broker = seeded();
        let filter = ResultFilter {
            max_results: 0,
            paging: Some(Paging { first: 11, count: 10 }),
            one_based: true,
        };
        let result = broker.execute(&vendor_query(None, filter)).await.unwrap();
        assert_eq!(result.start, 10);
        assert_eq!(result.items[0].id.item_id, 11);
        assert!(result.has_more);
    }

    #[tokio::test]
    async fn max_results_caps_total_before_paging() {
        let broker = seeded();
        let filter = ResultFilter {
            max_results: 12,
            paging: Some(Paging { first: 10, count: 10 }),
            one_based: false,
        };
        let result = broker.execute(&vendor_query(None, filter)).await.unwrap();
        assert_eq!(result.total, 12);
        assert_eq!(result.items.len(), 2);
        assert!(!result.has_more);
    }

    #[tokio::test]
    async fn sorts_before_paging() {
        let broker = seeded();
        let mut query = vendor_query(
            None,
            ResultFilter {
                max_results: 0,
                paging: Some(Paging { first: 0, count: 3 }),
                one_based: false,
            },
        );
        query.sort = Some(VendorSort {
            column: SortColumn::Title,
            direction: SortDirection::Descending,
        });
        let result = broker.execute(&query).await.unwrap();
        let titles: Vec<&str> = result.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Item 25", "Item 24", "Item 23"]);
    }
}
