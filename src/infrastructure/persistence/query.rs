//! Translation of [`Criteria`] into native SQL.
//!
//! Deterministically maps a criteria value into two queries: the page select
//! (filter + sort + limit/offset) and an independent count over the same
//! filter. Keeping both derived from one `push_filter` guarantees `total`
//! always reflects the full matching set, untouched by pagination.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::criteria::{Criteria, CriteriaFilter, FilterCondition, FilterRelation, Sort, SortColumn, SortOrder};

const SELECT_COLUMNS: &str = "SELECT id, date, title, short_description, text FROM news";
const COUNT: &str = "SELECT COUNT(*) FROM news";

/// Builds the page query: filter, sort precedence, then skip/limit applied to
/// the already filtered and sorted set.
pub fn build_select(criteria: &Criteria) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_COLUMNS);

    if let Some(filter) = &criteria.filter {
        push_filter(&mut builder, filter);
    }

    push_sort(&mut builder, &criteria.sort);

    builder.push(" LIMIT ");
    builder.push_bind(i64::from(criteria.limit));
    builder.push(" OFFSET ");
    builder.push_bind(criteria.offset());

    builder
}

/// Builds the count query over the identical filter, with no sort or
/// pagination.
pub fn build_count(criteria: &Criteria) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(COUNT);

    if let Some(filter) = &criteria.filter {
        push_filter(&mut builder, filter);
    }

    builder
}

/// Appends the WHERE clause: every condition rendered as its own
/// parenthesized predicate, all joined by the filter's single relation.
///
/// An empty condition set appends nothing, so the query matches every row.
fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &CriteriaFilter) {
    if filter.conditions.is_empty() {
        return;
    }

    let joiner = match filter.relation {
        FilterRelation::And => " AND ",
        FilterRelation::Or => " OR ",
    };

    builder.push(" WHERE ");

    for (i, condition) in filter.conditions.iter().enumerate() {
        if i > 0 {
            builder.push(joiner);
        }

        match condition {
            FilterCondition::Title(substring) => {
                builder.push("(title ILIKE ");
                builder.push_bind(like_pattern(substring));
                builder.push(")");
            }
            FilterCondition::Date(start, end) => {
                builder.push("(date >= ");
                builder.push_bind(*start);
                builder.push(" AND date <= ");
                builder.push_bind(*end);
                builder.push(")");
            }
        }
    }
}

fn push_sort(builder: &mut QueryBuilder<'static, Postgres>, sort: &[Sort]) {
    if sort.is_empty() {
        return;
    }

    builder.push(" ORDER BY ");

    for (i, key) in sort.iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }

        let column = match key.column {
            SortColumn::Date => "date",
            SortColumn::Title => "title",
        };
        let direction = match key.order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };

        builder.push(column);
        builder.push(" ");
        builder.push(direction);
    }
}

/// Wraps a substring into a case-insensitive containment pattern, escaping
/// the LIKE metacharacters so user input matches literally.
fn like_pattern(substring: &str) -> String {
    let escaped = substring
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{escaped}%")
}
