use crate::server::config::{Credentials, ServerConfig};
use chrono::Local;
use kata::{Clock, NewYorkTimesService, NewsService, SystemClock};
use std::sync::Arc;

pub type SharedClock = Arc<dyn Clock<Local> + Send + Sync>;
pub type SharedNews = Arc<dyn NewsService + Send + Sync>;

/// State shared by every handler.
///
/// Collaborators sit behind trait objects so tests can swap in a fixed clock
/// or a recording news service.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<Credentials>,
    pub clock: SharedClock,
    pub news: SharedNews,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            credentials: Arc::new(config.credentials.clone()),
            clock: Arc::new(SystemClock),
            news: Arc::new(NewYorkTimesService),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_news(mut self, news: SharedNews) -> Self {
        self.news = news;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            credentials: Arc::new(Credentials::default()),
            clock: Arc::new(SystemClock),
            news: Arc::new(NewYorkTimesService),
        }
    }
}
