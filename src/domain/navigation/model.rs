//! Navigation models

use serde::{Deserialize, Serialize};

use crate::domain::ports::ContentModel;

/// A hyperlink rendered in navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub link_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(url: impl Into<String>, link_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            link_text: link_text.into(),
            alternate_text: None,
            title: None,
        }
    }
}

/// Ordered trail of links from the site root to the current page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    #[serde(default)]
    pub items: Vec<Link>,
}

/// Ordered list of links for a navigation menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLinks {
    #[serde(default)]
    pub items: Vec<Link>,
}

macro_rules! link_list {
    ($ty:ty) => {
        impl $ty {
            pub fn new() -> Self {
                Self { items: Vec::new() }
            }

            pub fn push(&mut self, link: Link) {
                self.items.push(link);
            }

            pub fn len(&self) -> usize {
                self.items.len()
            }

            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, Link> {
                self.items.iter()
            }
        }

        impl FromIterator<Link> for $ty {
            fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
                Self {
                    items: iter.into_iter().collect(),
                }
            }
        }

        impl ContentModel for $ty {}
    };
}

link_list!(Breadcrumb);
link_list!(NavigationLinks);

impl ContentModel for Link {}

/// Kind of node in the sitemap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SitemapItemType {
    Page,
    StructureGroup,
}

/// Node of the published sitemap tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapItem {
    pub title: String,
    /// Page URL, or the structure group's base path
    pub url: String,
    #[serde(rename = "type")]
    pub item_type: SitemapItemType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub items: Vec<SitemapItem>,
}

fn default_visible() -> bool {
    true
}

impl SitemapItem {
    pub fn page(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            item_type: SitemapItemType::Page,
            visible: true,
            items: Vec::new(),
        }
    }

    pub fn group(title: impl Into<String>, url: impl Into<String>, items: Vec<SitemapItem>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            item_type: SitemapItemType::StructureGroup,
            visible: true,
            items,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn is_structure_group(&self) -> bool {
        self.item_type == SitemapItemType::StructureGroup
    }
}

impl ContentModel for SitemapItem {}
