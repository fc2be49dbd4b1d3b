//! Application state for one search-and-compare session.
//!
//! [`ComparisonSession`] is the single owner of everything the front end
//! shows: the current query and type filter, the visible result page, the
//! pagination position, the two comparison slots and the last user-facing
//! message. Front ends hold one session and call into it per user action.
//!
//! Searches are ticketed. [`ComparisonSession::begin_search`] hands out a
//! [`SearchRequest`] carrying a monotonically increasing ticket, and
//! [`ComparisonSession::apply_search`] drops any response whose ticket is
//! older than the newest one issued, so a slow response can never overwrite
//! the results of a later search. [`ComparisonSession::search`] does both
//! steps in sequence for callers that await each request in turn.

use crate::core::charts::ChartData;
use crate::core::pagination::Pagination;
use crate::core::selector::{ComparisonSelector, ComparisonSlots, SelectOutcome};
use crate::domain::model::{SearchItem, SearchPage, SearchType};
use crate::domain::ports::TitleSource;
use crate::utils::error::{CompareError, Result};

pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No results found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: u64,
    pub query: String,
    pub search_type: SearchType,
    pub page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query, nothing was sent.
    Skipped,
    Loaded { count: usize },
    NoResults,
    Failed,
    /// A newer search was issued before this response was applied.
    Stale,
}

pub struct ComparisonSession<S: TitleSource> {
    source: S,
    query: String,
    search_type: SearchType,
    results: Vec<SearchItem>,
    pagination: Pagination,
    selector: ComparisonSelector,
    message: Option<String>,
    latest_ticket: u64,
    pending: usize,
}

impl<S: TitleSource> ComparisonSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            query: String::new(),
            search_type: SearchType::All,
            results: Vec::new(),
            pagination: Pagination::default(),
            selector: ComparisonSelector::new(),
            message: None,
            latest_ticket: 0,
            pending: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn set_search_type(&mut self, search_type: SearchType) {
        self.search_type = search_type;
    }

    pub fn results(&self) -> &[SearchItem] {
        &self.results
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn slots(&self) -> &ComparisonSlots {
        self.selector.slots()
    }

    pub fn chart_data(&self) -> Option<ChartData> {
        self.selector.slots().chart_data()
    }

    /// Last user-visible message, if the most recent action produced one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while a request handed out by this session has not come back.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Issues a ticket for searching the current query at `page`. Returns
    /// `None` for a blank query.
    pub fn begin_search(&mut self, page: u32) -> Option<SearchRequest> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }

        self.latest_ticket += 1;
        self.pending += 1;
        self.message = None;
        Some(SearchRequest {
            ticket: self.latest_ticket,
            query: query.to_string(),
            search_type: self.search_type,
            page: page.max(1),
        })
    }

    /// Folds a search response into the session state.
    pub fn apply_search(
        &mut self,
        request: &SearchRequest,
        response: Result<SearchPage>,
    ) -> SearchOutcome {
        self.pending = self.pending.saturating_sub(1);

        if request.ticket < self.latest_ticket {
            tracing::debug!(
                "Discarding stale search response (ticket {} < {})",
                request.ticket,
                self.latest_ticket
            );
            return SearchOutcome::Stale;
        }

        match response {
            Ok(page) if !page.items.is_empty() => {
                let count = page.items.len();
                tracing::info!(
                    "Loaded {} results for '{}' (page {}, {} total)",
                    count,
                    request.query,
                    request.page,
                    page.total_results
                );
                self.results = page.items;
                self.pagination = Pagination::new(request.page, page.total_results);
                self.message = None;
                SearchOutcome::Loaded { count }
            }
            Ok(_) => {
                self.clear_results(DEFAULT_NO_RESULTS_MESSAGE.to_string());
                SearchOutcome::NoResults
            }
            Err(CompareError::NoResults { message }) => {
                tracing::info!("No results for '{}': {}", request.query, message);
                let message = if message.trim().is_empty() {
                    DEFAULT_NO_RESULTS_MESSAGE.to_string()
                } else {
                    message
                };
                self.clear_results(message);
                SearchOutcome::NoResults
            }
            Err(e) => {
                tracing::error!("Search for '{}' failed: {}", request.query, e);
                self.message = Some(e.user_friendly_message());
                SearchOutcome::Failed
            }
        }
    }

    fn clear_results(&mut self, message: String) {
        self.results.clear();
        self.pagination.reset();
        self.message = Some(message);
    }

    /// Searches the current query and type filter at `page`.
    pub async fn search(&mut self, page: u32) -> SearchOutcome {
        let Some(request) = self.begin_search(page) else {
            return SearchOutcome::Skipped;
        };
        let response = self
            .source
            .search(&request.query, request.search_type, request.page)
            .await;
        self.apply_search(&request, response)
    }

    /// Next page of the current search; `Skipped` on the last page.
    ///
    /// The page is fetched for whatever query and type filter the session
    /// holds now, not the ones that produced the results on screen: changing
    /// the filter and then paging starts that filter at the adjacent page.
    pub async fn next_page(&mut self) -> SearchOutcome {
        match self.pagination.next() {
            Some(page) => self.search(page).await,
            None => SearchOutcome::Skipped,
        }
    }

    /// Previous page, under the same rules as [`next_page`](Self::next_page);
    /// `Skipped` on the first page.
    pub async fn previous_page(&mut self) -> SearchOutcome {
        match self.pagination.previous() {
            Some(page) => self.search(page).await,
            None => SearchOutcome::Skipped,
        }
    }

    /// Fetches the full record for `imdb_id` and places it in a slot.
    /// On failure the slots are untouched and a message is recorded.
    pub async fn select(&mut self, imdb_id: &str) -> Option<SelectOutcome> {
        self.pending += 1;
        let fetched = self.source.fetch_title(imdb_id).await;
        self.pending = self.pending.saturating_sub(1);

        match fetched {
            Ok(title) => {
                self.message = None;
                let outcome = self.selector.select(title);
                if outcome.completed {
                    tracing::info!("Comparison ready");
                }
                Some(outcome)
            }
            Err(e) => {
                tracing::warn!("Could not load details for {}: {}", imdb_id, e);
                self.message = Some(e.user_friendly_message());
                None
            }
        }
    }

    /// Selects the `position`-th (1-based) entry of the visible results.
    pub async fn select_result(&mut self, position: usize) -> Result<Option<SelectOutcome>> {
        let imdb_id = position
            .checked_sub(1)
            .and_then(|i| self.results.get(i))
            .map(|item| item.imdb_id.clone())
            .ok_or_else(|| CompareError::InvalidInput {
                message: format!(
                    "No result #{} on this page ({} shown)",
                    position,
                    self.results.len()
                ),
            })?;
        Ok(self.select(&imdb_id).await)
    }

    pub fn clear(&mut self) {
        self.selector.clear();
    }
}
