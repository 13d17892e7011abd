use serde_json::Value;

/// Top-level fields that may carry an upstream's article list, in lookup order.
/// NewsAPI uses `articles`, NYT top stories uses `results`.
pub const ARTICLE_FIELDS: [&str; 2] = ["articles", "results"];

/// Pulls the article list out of an upstream payload.
///
/// The first recognized field holding an array wins. Anything else,
/// including a payload that is not an object, yields no articles.
pub fn extract_articles(payload: Value) -> Vec<Value> {
    let Value::Object(mut fields) = payload else {
        return Vec::new();
    };

    ARTICLE_FIELDS
        .iter()
        .find_map(|field| match fields.remove(*field) {
            Some(Value::Array(articles)) => Some(articles),
            _ => None,
        })
        .unwrap_or_default()
}
