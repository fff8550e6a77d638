//! CMS addressing: server versions and item identifiers

pub mod uri;
pub mod version;

pub use uri::{TcmUri, ITEM_TYPE_COMPONENT, ITEM_TYPE_PAGE};
pub use version::CmsVersion;
