use crate::domain::model::{SearchPage, SearchType, Title};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// Where titles come from. The session only talks to this trait, so tests
/// can drive it with canned data instead of a live API.
#[async_trait]
pub trait TitleSource: Send + Sync {
    /// One page (1-based) of search results. An API-reported miss is
    /// `Err(CompareError::NoResults)`.
    async fn search(&self, query: &str, search_type: SearchType, page: u32) -> Result<SearchPage>;

    /// Full detail record for an imdbID.
    async fn fetch_title(&self, imdb_id: &str) -> Result<Title>;
}
