use serde::{Deserialize, Serialize};

use crate::domain::ContentModel;

/// One page of query results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResult<T> {
    #[serde(default)]
    pub items: Vec<T>,
    /// Number of matches before paging (after `max_results`)
    pub total: u64,
    /// Zero-based offset of the first item
    pub start: u32,
    /// 0 when the query was not paged
    pub page_size: u32,
    /// 1-based page number
    pub current_page: u32,
    pub total_pages: u32,
    pub has_more: bool,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, start: u32, page_size: u32) -> Self {
        let (current_page, total_pages) = if page_size == 0 {
            (1, u32::from(total > 0))
        } else {
            let size = u64::from(page_size);
            let pages = u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX);
            ((start / page_size).saturating_add(1), pages)
        };
        let has_more = u64::from(start) + (items.len() as u64) < total;

        Self {
            items,
            total,
            start,
            page_size,
            current_page,
            total_pages,
            has_more,
        }
    }

    pub fn empty(start: u32, page_size: u32) -> Self {
        Self::new(Vec::new(), 0, start, page_size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            start: self.start,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_more: self.has_more,
        }
    }
}

impl<T: ContentModel> ContentModel for PaginatedResult<T> {}
