//! Building blocks shared by the version adapters

use std::collections::BTreeMap;

use crate::domain::{BrokerQuery, Criteria, KeywordFilter, Paging, QueryError, VendorSort};

/// Publication and schema restrictions of a query.
pub(crate) fn scope_criteria(query: &BrokerQuery) -> Vec<Criteria> {
    let mut criteria = Vec::new();
    if let Some(id) = query.effective_publication() {
        criteria.push(Criteria::Publication { id });
    }
    if let Some(id) = query.schema_id {
        criteria.push(Criteria::Schema { id });
    }
    criteria
}

pub(crate) fn keyword(filter: &KeywordFilter) -> Criteria {
    Criteria::Keyword {
        category: filter.category.clone(),
        key: filter.key.clone(),
    }
}

/// One `Or` per category, in category name order.
pub(crate) fn keywords_by_category(filters: &[KeywordFilter]) -> Vec<Criteria> {
    let mut groups: BTreeMap<&str, Vec<Criteria>> = BTreeMap::new();
    for filter in filters {
        groups
            .entry(filter.category.as_str())
            .or_default()
            .push(keyword(filter));
    }
    groups.into_values().filter_map(Criteria::any).collect()
}

/// Paging window for the query, or `None` when it isn't paged.
pub(crate) fn paging(query: &BrokerQuery, one_based: bool) -> Result<Option<Paging>, QueryError> {
    let base = &query.base;
    if base.page_size == 0 {
        return Ok(None);
    }
    let first = if one_based {
        base.start.checked_add(1).ok_or_else(|| {
            QueryError::Invalid(format!("start {} has no one-based position", base.start))
        })?
    } else {
        base.start
    };
    Ok(Some(Paging {
        first,
        count: base.page_size,
    }))
}

pub(crate) fn sort(query: &BrokerQuery) -> Option<VendorSort> {
    query.sort.map(|s| VendorSort {
        column: s.column,
        direction: s.direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Localization, Query};

    #[test]
    fn scope_uses_localization_publication() {
        let base = Query::new(0, 10).with_localization(Localization::new(7, "/", "de-DE"));
        let query = BrokerQuery::new(base).with_schema(3);
        assert_eq!(
            scope_criteria(&query),
            vec![Criteria::Publication { id: 7 }, Criteria::Schema { id: 3 }]
        );
    }

    #[test]
    fn keywords_grouped_per_category() {
        let filters = [
            KeywordFilter::new("Topic", "a"),
            KeywordFilter::new("Region", "emea"),
            KeywordFilter::new("Topic", "b"),
        ];
        let groups = keywords_by_category(&filters);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0],
            Criteria::Keyword {
                category: "Region".into(),
                key: "emea".into()
            }
        );
        assert!(matches!(&groups[1], Criteria::Or { children } if children.len() == 2));
    }

    #[test]
    fn zero_page_size_means_unpaged() {
        assert_eq!(paging(&BrokerQuery::new(Query::new(30, 0)), false), Ok(None));
        assert_eq!(
            paging(&BrokerQuery::new(Query::new(30, 10)), true),
            Ok(Some(Paging { first: 31, count: 10 }))
        );
    }

    #[test]
    fn last_start_has_no_one_based_position() {
        let query = BrokerQuery::new(Query::new(u32::MAX, 10));
        assert_eq!(
            paging(&query, false),
            Ok(Some(Paging { first: u32::MAX, count: 10 }))
        );
        assert!(matches!(paging(&query, true), Err(QueryError::Invalid(_))));
    }
}
