//! Content broker interface

use async_trait::async_trait;

use super::model::ComponentMeta;
use crate::domain::cms::TcmUri;
use crate::domain::error::ContentResult;
use crate::domain::query::VendorQuery;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait ContentBroker: Send + Sync {
    async fn publish(&self, component: ComponentMeta) -> ContentResult<()>;
    async fn unpublish(&self, id: TcmUri) -> ContentResult<()>;
    async fn find_by_id(&self, id: TcmUri) -> ContentResult<Option<ComponentMeta>>;
    async fn execute(&self, query: &VendorQuery) -> ContentResult<PaginatedResult<ComponentMeta>>;
}
