//! Queries: pagination base, broker query and vendor query object

pub mod model;
pub mod vendor;

pub use model::{
    BrokerQuery, KeywordFilter, PagedQuery, Query, SortColumn, SortDirection, SortParameter,
};
pub use vendor::{Criteria, Paging, ResultFilter, VendorQuery, VendorSort};
