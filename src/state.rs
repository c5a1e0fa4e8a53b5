use listing::CmsFetcher;
use serde::Deserialize;
use std::sync::Arc;

/// Query string of the load-more endpoint. The cursor is the literal URL
/// the CMS handed back with the previous page.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub next_page: Option<String>,
}

pub type SharedState = AppState;

/// The fetcher owns the CMS configuration; see `CmsConfig`.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<CmsFetcher>,
}
