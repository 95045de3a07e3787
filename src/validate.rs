// src/validate.rs
//! Size limits for user-submitted digest items.
//!
//! Lengths are counted in chars, not bytes.

use thiserror::Error;

use crate::analyze::ContentItem;

pub const MAX_ITEMS: usize = 100;
pub const MAX_CONTENT_CHARS: usize = 50_000;
pub const MAX_TITLE_CHARS: usize = 1_000;
pub const MAX_SOURCE_CHARS: usize = 500;
pub const MAX_URL_CHARS: usize = 2_000;

/// Why a digest request was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("too many items: {count} (max {max})")]
    TooManyItems { count: usize, max: usize },

    /// A text field of the item at `index` exceeds its limit.
    #[error("item {index}: {field} is {len} chars (max {max})")]
    FieldTooLong {
        index: usize,
        field: &'static str,
        len: usize,
        max: usize,
    },
}

fn check_len(
    index: usize,
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::FieldTooLong {
            index,
            field,
            len,
            max,
        });
    }
    Ok(())
}

/// Check one item's field lengths.
pub fn validate_item(index: usize, item: &ContentItem) -> Result<(), ValidationError> {
    check_len(index, "content", &item.content, MAX_CONTENT_CHARS)?;
    check_len(index, "source", &item.source, MAX_SOURCE_CHARS)?;
    if let Some(title) = &item.title {
        check_len(index, "title", title, MAX_TITLE_CHARS)?;
    }
    if let Some(url) = &item.url {
        check_len(index, "url", url, MAX_URL_CHARS)?;
    }
    Ok(())
}

/// Check a whole batch; the first violation wins.
pub fn validate_items(items: &[ContentItem]) -> Result<(), ValidationError> {
    if items.len() > MAX_ITEMS {
        return Err(ValidationError::TooManyItems {
            count: items.len(),
            max: MAX_ITEMS,
        });
    }
    items
        .iter()
        .enumerate()
        .try_for_each(|(i, it)| validate_item(i, it))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_limits_exactly() {
        let it = ContentItem::new("s".repeat(MAX_SOURCE_CHARS), "c".repeat(MAX_CONTENT_CHARS))
            .with_title("t".repeat(MAX_TITLE_CHARS))
            .with_url("u".repeat(MAX_URL_CHARS));
        assert_eq!(validate_items(&vec![it; MAX_ITEMS]), Ok(()));
    }

    #[test]
    fn rejects_too_many_items() {
        let items = vec![ContentItem::new("a", "b"); MAX_ITEMS + 1];
        assert_eq!(
            validate_items(&items),
            Err(ValidationError::TooManyItems {
                count: 101,
                max: 100
            })
        );
    }

    #[test]
    fn reports_first_offending_field() {
        let items = vec![
            ContentItem::new("ok", "ok"),
            ContentItem::new("ok", "ok").with_url("u".repeat(MAX_URL_CHARS + 1)),
        ];
        let err = validate_items(&items).unwrap_err();
        assert_eq!(
            err,
            ValidationError::FieldTooLong {
                index: 1,
                field: "url",
                len: 2001,
                max: 2000
            }
        );
        assert_eq!(err.to_string(), "item 1: url is 2001 chars (max 2000)");
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 50,000 two-byte chars is within the limit.
        let it = ContentItem::new("src", "é".repeat(MAX_CONTENT_CHARS));
        assert!(validate_item(0, &it).is_ok());
    }
}
