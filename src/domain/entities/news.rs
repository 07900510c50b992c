//! News article entity with field-level invariants.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;

use crate::domain::errors::DomainValidationError;

/// Characters allowed in every text field of a news article.
static ALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[a-zA-Z0-9 _@./"'#&+-]*$"#).unwrap());

const ID_BYTES: usize = 12;

const TITLE_MIN: usize = 4;
const TITLE_MAX: usize = 128;
const SHORT_DESCRIPTION_MIN: usize = 4;
const SHORT_DESCRIPTION_MAX: usize = 256;
const TEXT_MIN: usize = 4;
const TEXT_MAX: usize = 2048;

/// A news article.
///
/// All three text fields satisfy the charset + length invariant at all times:
/// the constructor, rehydration, and every mutator run the same validation
/// before assigning, so an invalid value is rejected without touching the
/// entity.
///
/// The id is assigned at creation (24 lowercase hex characters) and is
/// immutable afterwards. Fields are private; mutation goes through the
/// `change_*` methods so revalidation cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    id: String,
    date: DateTime<Utc>,
    title: String,
    short_description: String,
    text: String,
}

impl News {
    /// Creates a new article with a generated id and the current timestamp.
    pub fn create(
        title: impl Into<String>,
        short_description: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, DomainValidationError> {
        Self::build(generate_id(), Utc::now(), title.into(), short_description.into(), text.into())
    }

    /// Reconstructs an article from stored values.
    ///
    /// Runs the same validation as [`News::create`]; a stored document that
    /// no longer satisfies the invariants is rejected here, which is how the
    /// repository detects corrupted rows.
    pub fn rehydrate(
        id: impl Into<String>,
        date: DateTime<Utc>,
        title: impl Into<String>,
        short_description: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, DomainValidationError> {
        Self::build(id.into(), date, title.into(), short_description.into(), text.into())
    }

    fn build(
        id: String,
        date: DateTime<Utc>,
        title: String,
        short_description: String,
        text: String,
    ) -> Result<Self, DomainValidationError> {
        validate_title(&title)?;
        validate_short_description(&short_description)?;
        validate_text(&text)?;

        Ok(Self {
            id,
            date,
            title,
            short_description,
            text,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn change_title(&mut self, new_title: impl Into<String>) -> Result<(), DomainValidationError> {
        let new_title = new_title.into();
        validate_title(&new_title)?;
        self.title = new_title;
        Ok(())
    }

    pub fn change_short_description(
        &mut self,
        new_short_description: impl Into<String>,
    ) -> Result<(), DomainValidationError> {
        let new_short_description = new_short_description.into();
        validate_short_description(&new_short_description)?;
        self.short_description = new_short_description;
        Ok(())
    }

    pub fn change_text(&mut self, new_text: impl Into<String>) -> Result<(), DomainValidationError> {
        let new_text = new_text.into();
        validate_text(&new_text)?;
        self.text = new_text;
        Ok(())
    }
}

/// Generates a 24-character lowercase hex identifier.
fn generate_id() -> String {
    let bytes: [u8; ID_BYTES] = rand::rng().random();
    hex::encode(bytes)
}

/// The one validation routine shared by construction and every mutator.
///
/// Minimum length is checked against the trimmed value, maximum against the
/// raw value.
fn validate_field(
    path: &'static str,
    value: &str,
    min: usize,
    max: usize,
    expectation: &'static str,
) -> Result<(), DomainValidationError> {
    let char_count = value.chars().count();

    if ALLOWED_CHARS.is_match(value) && value.trim().chars().count() >= min && char_count <= max {
        Ok(())
    } else {
        Err(DomainValidationError::new(path, value, expectation))
    }
}

fn validate_title(title: &str) -> Result<(), DomainValidationError> {
    validate_field(
        "title",
        title,
        TITLE_MIN,
        TITLE_MAX,
        "alphanumeric string between 4 and 128 symbols",
    )
}

fn validate_short_description(short_description: &str) -> Result<(), DomainValidationError> {
    validate_field(
        "shortDescription",
        short_description,
        SHORT_DESCRIPTION_MIN,
        SHORT_DESCRIPTION_MAX,
        "alphanumeric string between 4 and 256 symbols",
    )
}

fn validate_text(text: &str) -> Result<(), DomainValidationError> {
    validate_field(
        "text",
        text,
        TEXT_MIN,
        TEXT_MAX,
        "alphanumeric string between 4 and 2048 symbols",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_news() -> News {
        News::create("Test title", "Short description", "Body text of the article").unwrap()
    }

    #[test]
    fn test_create_assigns_id_and_date() {
        let before = Utc::now();
        let news = valid_news();

        assert_eq!(news.id().len(), 24);
        assert!(news.id().chars().all(|c| c.is_ascii_hexdigit()));
        assert!(news.date() >= before);
        assert!(news.date() <= Utc::now());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = valid_news();
        let b = valid_news();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_rehydrate_keeps_id_and_date() {
        let date = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        let news = News::rehydrate("0123456789abcdef01234567", date, "Title", "Desc", "Text body")
            .unwrap();

        assert_eq!(news.id(), "0123456789abcdef01234567");
        assert_eq!(news.date(), date);
    }

    #[test]
    fn test_title_too_short_is_rejected() {
        let err = News::create("abc", "Short description", "Body text").unwrap_err();
        assert_eq!(err.path, "title");
        assert_eq!(err.value, "abc");
        assert_eq!(err.expectation, "alphanumeric string between 4 and 128 symbols");
    }

    #[test]
    fn test_title_too_long_is_rejected() {
        let long = "a".repeat(129);
        let err = News::create(long.clone(), "Short description", "Body text").unwrap_err();
        assert_eq!(err.path, "title");
        assert_eq!(err.value, long);
    }

    #[test]
    fn test_title_at_bounds_is_accepted() {
        assert!(News::create("abcd", "Short description", "Body text").is_ok());
        assert!(News::create("a".repeat(128), "Short description", "Body text").is_ok());
    }

    #[test]
    fn test_disallowed_character_is_rejected() {
        let err = News::create("bad<script>", "Short description", "Body text").unwrap_err();
        assert_eq!(err.path, "title");
        assert_eq!(err.value, "bad<script>");
    }

    #[test]
    fn test_allowed_punctuation_is_accepted() {
        let news = News::create(
            r#"Quote "and" other 'marks' _@./#&+-"#,
            "Short description",
            "Body text",
        );
        assert!(news.is_ok());
    }

    #[test]
    fn test_whitespace_only_title_is_rejected() {
        // Five spaces pass the raw length check but trim to empty.
        let err = News::create("     ", "Short description", "Body text").unwrap_err();
        assert_eq!(err.path, "title");
    }

    #[test]
    fn test_short_description_bounds() {
        let err = News::create("Title", "ab", "Body text").unwrap_err();
        assert_eq!(err.path, "shortDescription");
        assert_eq!(err.expectation, "alphanumeric string between 4 and 256 symbols");

        let err = News::create("Title", "a".repeat(257), "Body text").unwrap_err();
        assert_eq!(err.path, "shortDescription");

        assert!(News::create("Title", "a".repeat(256), "Body text").is_ok());
    }

    #[test]
    fn test_text_bounds() {
        let err = News::create("Title", "Short description", "ab").unwrap_err();
        assert_eq!(err.path, "text");
        assert_eq!(err.expectation, "alphanumeric string between 4 and 2048 symbols");

        let err = News::create("Title", "Short description", "a".repeat(2049)).unwrap_err();
        assert_eq!(err.path, "text");

        assert!(News::create("Title", "Short description", "a".repeat(2048)).is_ok());
    }

    #[test]
    fn test_change_title_revalidates() {
        let mut news = valid_news();

        let err = news.change_title("x").unwrap_err();
        assert_eq!(err.path, "title");
        assert_eq!(err.value, "x");
        // Rejected before assignment: the old value is intact.
        assert_eq!(news.title(), "Test title");

        news.change_title("New title").unwrap();
        assert_eq!(news.title(), "New title");
    }

    #[test]
    fn test_change_short_description_revalidates() {
        let mut news = valid_news();

        let err = news.change_short_description("{}").unwrap_err();
        assert_eq!(err.path, "shortDescription");
        assert_eq!(news.short_description(), "Short description");

        news.change_short_description("Updated description").unwrap();
        assert_eq!(news.short_description(), "Updated description");
    }

    #[test]
    fn test_change_text_revalidates() {
        let mut news = valid_news();

        let err = news.change_text("no").unwrap_err();
        assert_eq!(err.path, "text");
        assert_eq!(news.text(), "Body text of the article");

        news.change_text("Updated body text").unwrap();
        assert_eq!(news.text(), "Updated body text");
    }

    #[test]
    fn test_rehydrate_rejects_corrupted_values() {
        let date = Utc::now();
        let err =
            News::rehydrate("0123456789abcdef01234567", date, "ok", "Short description", "Text")
                .unwrap_err();
        assert_eq!(err.path, "title");
    }
}
