use serde::{Deserialize, Serialize};

pub type ArticleId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
}

impl Article {
    pub fn new(id: ArticleId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Body of a create request. Both fields are optional at the wire level so a
/// missing field is reported as a validation error, not a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewArticle {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl NewArticle {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }
}

/// Partial update of an article.
///
/// `None` means the field was omitted. An empty string is also treated as
/// "leave unchanged", so a field can never be cleared through a patch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ArticlePatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub(crate) fn apply(self, article: &mut Article) {
        if let Some(title) = non_empty(self.title) {
            article.title = title;
        }
        if let Some(body) = non_empty(self.body) {
            article.body = body;
        }
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
    pub total: usize,
    pub results: Vec<Article>,
}
