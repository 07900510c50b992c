//! Query-surface parsing: string-encoded tokens into a validated [`Criteria`].
//!
//! The wire encoding (kept from the original API surface):
//!
//! - `page` - integer >= 1, required
//! - `limit` - integer in [1, 1000], required
//! - `sort[]` - `<column>.<asc|desc>`, column in {date, title}; repeatable,
//!   order-significant
//! - `filterConditions[]` - `title=<substring>` (alphanumeric-led) or
//!   `date=<YYYY-MM-DD>:<YYYY-MM-DD>`; repeatable
//! - `filterRelation` - `and` | `or`, defaults to `and`
//!
//! Parsing is pure and synchronous; no storage access happens here. A
//! malformed repeatable token is rejected at the first invalid element with
//! an error naming the element's index.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;

use crate::domain::criteria::{
    Criteria, CriteriaFilter, FilterCondition, FilterRelation, Sort, SortColumn, SortOrder,
};
use crate::error::AppError;

static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-(?:0\d|1[0-2])-(?:[0-2]\d|3[01])):(\d{4}-(?:0\d|1[0-2])-(?:[0-2]\d|3[01]))$")
        .unwrap()
});

const PAGE_EXPECTATION: &str = "integer >= 1";
const LIMIT_EXPECTATION: &str = "integer between 1 and 1000";
const SORT_EXPECTATION: &str = "(date|title).(asc|desc)";
const CONDITION_EXPECTATION: &str = "title=<substring> or date=<YYYY-MM-DD>:<YYYY-MM-DD>";
const RELATION_EXPECTATION: &str = "(and|or)";

/// Parses a raw query string into a [`Criteria`].
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the offending field (`page`,
/// `limit`, `filterRelation`, or an indexed element such as `sort[1]`).
pub fn parse_criteria(raw_query: &str) -> Result<Criteria, AppError> {
    let mut page = None;
    let mut limit = None;
    let mut sort_tokens = Vec::new();
    let mut condition_tokens = Vec::new();
    let mut relation_token = None;

    for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
        match key.as_ref() {
            "page" => page = Some(value.into_owned()),
            "limit" => limit = Some(value.into_owned()),
            "sort[]" => sort_tokens.push(value.into_owned()),
            "filterConditions[]" => condition_tokens.push(value.into_owned()),
            "filterRelation" => relation_token = Some(value.into_owned()),
            _ => {}
        }
    }

    let page = parse_page(page.as_deref())?;
    let limit = parse_limit(limit.as_deref())?;
    let sort = parse_sort_tokens(&sort_tokens)?;

    let filter = if condition_tokens.is_empty() && relation_token.is_none() {
        None
    } else {
        Some(CriteriaFilter {
            conditions: parse_condition_tokens(&condition_tokens)?,
            relation: parse_relation(relation_token.as_deref())?,
        })
    };

    Ok(Criteria {
        page,
        limit,
        sort,
        filter,
    })
}

fn parse_page(token: Option<&str>) -> Result<u32, AppError> {
    let token = token.ok_or_else(|| AppError::validation("page", PAGE_EXPECTATION, "undefined"))?;

    match token.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(AppError::validation("page", PAGE_EXPECTATION, token)),
    }
}

fn parse_limit(token: Option<&str>) -> Result<u32, AppError> {
    let token =
        token.ok_or_else(|| AppError::validation("limit", LIMIT_EXPECTATION, "undefined"))?;

    match token.parse::<u32>() {
        Ok(limit) if (1..=1000).contains(&limit) => Ok(limit),
        _ => Err(AppError::validation("limit", LIMIT_EXPECTATION, token)),
    }
}

fn parse_sort_tokens(tokens: &[String]) -> Result<Vec<Sort>, AppError> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            parse_sort_token(token)
                .ok_or_else(|| AppError::validation(&format!("sort[{i}]"), SORT_EXPECTATION, token))
        })
        .collect()
}

fn parse_sort_token(token: &str) -> Option<Sort> {
    let (column, order) = token.split_once('.')?;

    let column = match column {
        "date" => SortColumn::Date,
        "title" => SortColumn::Title,
        _ => return None,
    };

    let order = match order {
        "asc" => SortOrder::Asc,
        "desc" => SortOrder::Desc,
        _ => return None,
    };

    Some(Sort { column, order })
}

fn parse_condition_tokens(tokens: &[String]) -> Result<Vec<FilterCondition>, AppError> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            parse_condition_token(token).ok_or_else(|| {
                AppError::validation(
                    &format!("filterConditions[{i}]"),
                    CONDITION_EXPECTATION,
                    token,
                )
            })
        })
        .collect()
}

fn parse_condition_token(token: &str) -> Option<FilterCondition> {
    let (column, value) = token.split_once('=')?;

    match column {
        "title" => {
            // Substring must be non-empty and alphanumeric-led.
            if value.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
                Some(FilterCondition::Title(value.to_string()))
            } else {
                None
            }
        }
        "date" => {
            let captures = DATE_RANGE.captures(value)?;
            let start = parse_day(captures.get(1)?.as_str())?;
            let end = parse_day(captures.get(2)?.as_str())?;
            Some(FilterCondition::Date(start, end))
        }
        _ => None,
    }
}

/// Both range endpoints resolve to midnight UTC of the named day; the range
/// is inclusive on both ends.
fn parse_day(token: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()?;
    Some(date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_relation(token: Option<&str>) -> Result<FilterRelation, AppError> {
    match token {
        None => Ok(FilterRelation::And),
        Some("and") => Ok(FilterRelation::And),
        Some("or") => Ok(FilterRelation::Or),
        Some(other) => Err(AppError::validation(
            "filterRelation",
            RELATION_EXPECTATION,
            other,
        )),
    }
}
