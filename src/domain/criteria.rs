//! Criteria: the language-agnostic description of a page request.
//!
//! A [`Criteria`] bundles a pagination window, an ordered list of sort keys,
//! and an optional filter expression. It is a plain value object built fresh
//! per request; the storage-specific translation lives in
//! [`crate::infrastructure::persistence::query`].

use chrono::{DateTime, Utc};

/// Sortable columns of a news article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Date,
    Title,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One sort key. Position in [`Criteria::sort`] determines tie-break
/// precedence; the first entry is the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub order: SortOrder,
}

/// One atomic filter predicate, discriminated by column.
///
/// A closed sum type so the query translator can match exhaustively instead
/// of sniffing value shapes at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCondition {
    /// Case-insensitive substring match on the title.
    Title(String),
    /// Inclusive date range: `date >= start AND date <= end`.
    Date(DateTime<Utc>, DateTime<Utc>),
}

/// The boolean operator combining all conditions of a filter.
///
/// One relation governs the whole condition set uniformly; there is no
/// per-pair mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterRelation {
    #[default]
    And,
    Or,
}

/// A set of filter conditions plus the single relation applied across them.
///
/// An empty condition set matches everything regardless of relation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CriteriaFilter {
    pub conditions: Vec<FilterCondition>,
    pub relation: FilterRelation,
}

/// A validated page request: pagination window, sort keys, filter.
///
/// Invariants are enforced by the query-surface parser
/// ([`crate::api::dto::criteria`]): `page >= 1` and `1 <= limit <= 1000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub page: u32,
    pub limit: u32,
    pub sort: Vec<Sort>,
    pub filter: Option<CriteriaFilter>,
}

impl Criteria {
    /// Number of rows to skip before the requested page.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

/// A result envelope: the total match count across the whole collection plus
/// one page of items.
///
/// `total` is computed by an independent count query and stays correct even
/// when `items` is empty because the page overruns the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    pub total: i64,
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_first_page_is_zero() {
        let criteria = Criteria {
            page: 1,
            limit: 25,
            sort: vec![],
            filter: None,
        };
        assert_eq!(criteria.offset(), 0);
    }

    #[test]
    fn test_offset_skips_previous_pages() {
        let criteria = Criteria {
            page: 3,
            limit: 50,
            sort: vec![],
            filter: None,
        };
        assert_eq!(criteria.offset(), 100);
    }

    #[test]
    fn test_offset_does_not_overflow_at_bounds() {
        let criteria = Criteria {
            page: u32::MAX,
            limit: 1000,
            sort: vec![],
            filter: None,
        };
        assert_eq!(criteria.offset(), (i64::from(u32::MAX) - 1) * 1000);
    }

    #[test]
    fn test_default_relation_is_and() {
        assert_eq!(FilterRelation::default(), FilterRelation::And);
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = CriteriaFilter::default();
        assert!(filter.conditions.is_empty());
    }
}
