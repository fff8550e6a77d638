//! Navigation building from the published sitemap
//!
//! Produces breadcrumb trails and navigation link lists. URLs are compared
//! after normalization, so `/about/index.html`, `/about/index` and
//! `/about/` address the same item.

use tracing::debug;

use crate::domain::{Breadcrumb, ContentError, ContentResult, Link, NavigationLinks, SitemapItem};

/// Strip extension, trailing `index` and trailing slash.
pub fn normalize_url(url: &str) -> String {
    let mut url = url.trim();
    if let Some(stripped) = url.strip_suffix(".html") {
        url = stripped;
    }
    if let Some(stripped) = url.strip_suffix("/index") {
        url = stripped;
    } else if url == "index" {
        url = "";
    }
    let url = url.trim_end_matches('/');
    if url.is_empty() {
        "/".to_string()
    } else {
        url.to_string()
    }
}

pub struct NavigationBuilder<'a> {
    root: &'a SitemapItem,
}

impl<'a> NavigationBuilder<'a> {
    pub fn new(root: &'a SitemapItem) -> Self {
        Self { root }
    }

    /// Visible first-level items below the root.
    pub fn top_navigation(&self) -> NavigationLinks {
        visible_links(self.root)
    }

    /// Visible siblings of the item at `url` (the item included).
    pub fn context_navigation(&self, url: &str) -> ContentResult<NavigationLinks> {
        let path = self.path_to(url)?;
        // The parent of a top-level page is the root itself
        let parent = match path.len() {
            0 | 1 => self.root,
            n => path[n - 2],
        };
        Ok(visible_links(parent))
    }

    /// Links from the root down to the item at `url`.
    pub fn breadcrumb(&self, url: &str) -> ContentResult<Breadcrumb> {
        let path = self.path_to(url)?;
        let mut crumb = Breadcrumb::new();
        for item in path {
            let link = link_for(item);
            // an index page repeats its structure group
            if crumb.items.last().map(|l| &l.url) == Some(&link.url) {
                continue;
            }
            crumb.push(link);
        }
        debug!(url, depth = crumb.len(), "Built breadcrumb");
        Ok(crumb)
    }

    /// Items from the root (inclusive) to the item at `url`.
    fn path_to(&self, url: &str) -> ContentResult<Vec<&'a SitemapItem>> {
        let target = normalize_url(url);
        let mut path = Vec::new();
        if find_path(self.root, &target, &mut path) {
            Ok(path)
        } else {
            Err(ContentError::NotFound {
                entity: "SitemapItem",
                field: "url",
                value: url.to_string(),
            })
        }
    }
}

fn find_path<'a>(item: &'a SitemapItem, target: &str, path: &mut Vec<&'a SitemapItem>) -> bool {
    path.push(item);
    if normalize_url(&item.url) == target {
        return true;
    }
    for child in &item.items {
        if find_path(child, target, path) {
            return true;
        }
    }
    path.pop();
    false
}

fn link_for(item: &SitemapItem) -> Link {
    let mut link = Link::new(normalize_url(&item.url), item.title.clone());
    link.title = Some(item.title.clone());
    link
}

fn visible_links(parent: &SitemapItem) -> NavigationLinks {
    parent
        .items
        .iter()
        .filter(|i| i.visible)
        .map(link_for)
        .collect()
}
