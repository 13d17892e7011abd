use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{aggregator::Aggregator, store::ArticleStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ArticleStore>>,
    pub aggregator: Aggregator,
}

impl AppState {
    pub fn new(store: ArticleStore, aggregator: Aggregator) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            aggregator,
        }
    }
}
