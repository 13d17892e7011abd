pub mod error;
pub mod types;

use tracing::debug;

use crate::store::{error::StoreError, types::non_empty};

pub use types::{Article, ArticleId, ArticlePatch, NewArticle, Page};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 5;

/// Ordered in-memory article list backing the CRUD endpoints.
///
/// Ids come from a monotonic counter rather than `len + 1`, so an id freed by
/// a delete is never handed out again. For a store that has not seen a
/// delete both rules produce the same ids.
#[derive(Debug)]
pub struct ArticleStore {
    articles: Vec<Article>,
    next_id: ArticleId,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let highest = articles.iter().map(|a| a.id).max().unwrap_or(0);
        let next_id = highest.max(articles.len() as ArticleId) + 1;
        Self { articles, next_id }
    }

    /// The two articles the service starts with.
    pub fn seeded() -> Self {
        Self::with_articles(vec![
            Article::new(1, "Breaking News", "Latest update from CYGNUS ATER."),
            Article::new(2, "Tech News", "Tech updates will appear here."),
        ])
    }

    pub fn list(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn create(&mut self, new: NewArticle) -> Result<Article, StoreError> {
        let (Some(title), Some(body)) = (non_empty(new.title), non_empty(new.body)) else {
            return Err(StoreError::MissingFields);
        };

        let article = Article::new(self.next_id, title, body);
        self.next_id += 1;
        self.articles.push(article.clone());

        debug!("created article {}", article.id);
        Ok(article)
    }

    pub fn update(&mut self, id: ArticleId, patch: ArticlePatch) -> Result<Article, StoreError> {
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound)?;

        patch.apply(article);
        debug!("updated article {}", id);
        Ok(article.clone())
    }

    /// Removes every article with `id`. Unknown ids are not an error.
    pub fn delete(&mut self, id: ArticleId) -> usize {
        let before = self.articles.len();
        self.articles.retain(|a| a.id != id);
        let removed = before - self.articles.len();

        debug!("deleted {} article(s) with id {}", removed, id);
        removed
    }

    /// Window of `limit` articles starting at `(page - 1) * limit`.
    ///
    /// No bounds checks: a page or limit below 1, or a window past the end,
    /// yields no results.
    pub fn paginate(&self, page: i64, limit: i64) -> Page {
        let results = match (usize::try_from(page.saturating_sub(1)), usize::try_from(limit)) {
            (Ok(skipped_pages), Ok(take)) if page >= 1 => self
                .articles
                .iter()
                .skip(skipped_pages.saturating_mul(take))
                .take(take)
                .cloned()
                .collect(),
            _ => Vec::new(),
        };

        Page {
            page,
            limit,
            total: self.articles.len(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_articles() -> ArticleStore {
        ArticleStore::with_articles(vec![
            Article::new(1, "first", "one"),
            Article::new(2, "second", "two"),
        ])
    }

    #[test]
    fn test_create_then_get() {
        let mut store = ArticleStore::new();
        let created = store.create(NewArticle::new("Title", "Body")).unwrap();

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.title, "Title");
        assert_eq!(fetched.body, "Body");
    }

    #[test]
    fn test_create_requires_both_fields() {
        let mut store = ArticleStore::new();

        let missing_body = NewArticle {
            title: Some("only title".into()),
            body: None,
        };
        assert_eq!(store.create(missing_body), Err(StoreError::MissingFields));
        assert_eq!(
            store.create(NewArticle::new("", "body")),
            Err(StoreError::MissingFields)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = ArticleStore::new();
        for n in 0..3 {
            store.create(NewArticle::new(format!("t{n}"), "b")).unwrap();
        }

        store.delete(2);
        let created = store.create(NewArticle::new("t3", "b")).unwrap();

        assert_eq!(created.id, 4);
        let ids: Vec<_> = store.list().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_seeded_store_continues_numbering() {
        let mut store = ArticleStore::seeded();
        assert_eq!(store.len(), 2);

        let created = store.create(NewArticle::new("third", "body")).unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = two_articles();

        assert_eq!(store.delete(42), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_single_field() {
        let mut store = two_articles();

        let updated = store.update(1, ArticlePatch::default().title("renamed")).unwrap();
        assert_eq!(updated, Article::new(1, "renamed", "one"));

        let updated = store.update(1, ArticlePatch::default().body("rewritten")).unwrap();
        assert_eq!(updated, Article::new(1, "renamed", "rewritten"));
    }

    #[test]
    fn test_update_with_empty_strings_changes_nothing() {
        let mut store = two_articles();

        let updated = store
            .update(2, ArticlePatch::default().title("").body(""))
            .unwrap();
        assert_eq!(updated, Article::new(2, "second", "two"));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = two_articles();
        assert_eq!(
            store.update(9, ArticlePatch::default().title("x")),
            Err(StoreError::NotFound)
        );
    }

    #[test]
    fn test_paginate_windows() {
        let store = two_articles();

        let page = store.paginate(2, 1);
        assert_eq!(page.total, 2);
        assert_eq!(page.results, vec![Article::new(2, "second", "two")]);

        let page = store.paginate(3, 1);
        assert_eq!(page.total, 2);
        assert!(page.results.is_empty());

        let page = store.paginate(DEFAULT_PAGE, DEFAULT_LIMIT);
        assert_eq!(page.results.len(), 2);
        assert_eq!((page.page, page.limit), (1, 5));
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let store = two_articles();

        for (page, limit) in [(-1, 5), (i64::MAX, 5), (i64::MIN, 5), (1, -2)] {
            let window = store.paginate(page, limit);
            assert!(window.results.is_empty(), "page {page} limit {limit}");
            assert_eq!(window.total, 2);
        }
    }
}
