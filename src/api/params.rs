use serde::Deserialize;

use crate::store::{ArticleId, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Reads the leading integer of `raw`, ignoring whatever follows it.
///
/// `"12"` and `"12abc"` both give 12; `"abc"` and `""` give `None`. Digit
/// runs too large for an `i64` saturate.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    let negative = trimmed.starts_with('-');
    // Only overflow can fail here: the slice is an optional sign plus digits.
    Some(
        trimmed[..sign_len + digits]
            .parse()
            .unwrap_or(if negative { i64::MIN } else { i64::MAX }),
    )
}

/// Path ids that do not parse, or are negative, match no article.
pub fn parse_id(raw: &str) -> Option<ArticleId> {
    parse_int_prefix(raw).and_then(|id| ArticleId::try_from(id).ok())
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// Page and limit, falling back to the defaults when absent, unparseable
    /// or zero. Negative values are kept and select an empty window.
    pub fn resolve(&self) -> (i64, i64) {
        (
            nonzero_or(self.page.as_deref(), DEFAULT_PAGE),
            nonzero_or(self.limit.as_deref(), DEFAULT_LIMIT),
        )
    }
}

fn nonzero_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(parse_int_prefix)
        .filter(|n| *n != 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7"), Some(7));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("+5"), Some(5));
        assert_eq!(parse_int_prefix("--5"), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_parse_int_prefix_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999x"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3"), Some(3));
        assert_eq!(parse_id("external"), None);
        assert_eq!(parse_id("-1"), None);
    }

    #[test]
    fn test_page_query_defaults() {
        let query = PageQuery::default();
        assert_eq!(query.resolve(), (1, 5));

        let query = PageQuery {
            page: Some("abc".into()),
            limit: Some("0".into()),
        };
        assert_eq!(query.resolve(), (1, 5));

        let query = PageQuery {
            page: Some("2".into()),
            limit: Some("10".into()),
        };
        assert_eq!(query.resolve(), (2, 10));
    }

    #[test]
    fn test_page_query_keeps_out_of_range_pages() {
        let query = PageQuery {
            page: Some("-1".into()),
            limit: None,
        };
        assert_eq!(query.resolve(), (-1, 5));

        let query = PageQuery {
            page: Some("99999999999999999999".into()),
            limit: None,
        };
        assert_eq!(query.resolve(), (i64::MAX, 5));
    }
}
