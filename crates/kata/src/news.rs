//! Pluggable news statistics.
//!
//! [`NewsService`] is the seam between callers and whatever backend provides
//! news counts. [`NewYorkTimesService`] is the production implementation and
//! [`RecordingNewsService`] is a test double that answers with a canned value
//! and remembers every call it receives.

use parking_lot::Mutex;
use std::sync::Arc;

/// A source of news statistics.
pub trait NewsService {
    /// Returns how many news items were published in the trailing `hours`.
    fn total_news_by_hours(&self, hours: u32) -> u64;
}

impl<S: NewsService + ?Sized> NewsService for &S {
    fn total_news_by_hours(&self, hours: u32) -> u64 {
        (**self).total_news_by_hours(hours)
    }
}

impl<S: NewsService + ?Sized> NewsService for Arc<S> {
    fn total_news_by_hours(&self, hours: u32) -> u64 {
        (**self).total_news_by_hours(hours)
    }
}

/// News statistics backed by The New York Times.
///
/// The remote API is not wired up; every query reports a fixed count of
/// [`NewYorkTimesService::TOTAL`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NewYorkTimesService;

impl NewYorkTimesService {
    pub const TOTAL: u64 = 100;
}

impl NewsService for NewYorkTimesService {
    fn total_news_by_hours(&self, _hours: u32) -> u64 {
        Self::TOTAL
    }
}

/// A [`NewsService`] test double.
///
/// Every call returns the configured total and appends its `hours` argument to
/// an internal log, which tests can inspect with [`calls`] or
/// [`was_called_with`].
///
/// [`calls`]: RecordingNewsService::calls
/// [`was_called_with`]: RecordingNewsService::was_called_with
#[derive(Debug, Default)]
pub struct RecordingNewsService {
    total: u64,
    calls: Mutex<Vec<u32>>,
}

impl RecordingNewsService {
    pub fn returning(total: u64) -> Self {
        Self {
            total,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Arguments of every call received so far, oldest first.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().clone()
    }

    pub fn was_called_with(&self, hours: u32) -> bool {
        self.calls.lock().contains(&hours)
    }
}

impl NewsService for RecordingNewsService {
    fn total_news_by_hours(&self, hours: u32) -> u64 {
        self.calls.lock().push(hours);
        self.total
    }
}

/// Returns the number of news items published in the trailing `hours`,
/// according to `news`.
pub fn news_statistics<S: NewsService + ?Sized>(hours: u32, news: &S) -> u64 {
    news.total_news_by_hours(hours)
}
