use crate::error::AppError;
use crate::state::{PaginationQuery, SharedState};
use axum::{
    extract::{Query, State},
    response::Json,
};
use blog_core::PostPage;

/// Load-more endpoint the listing page's script calls. Proxies the cursor
/// URL so the normalization stays server-side, and returns the next batch
/// plus the cursor after it.
pub async fn pagination(
    State(state): State<SharedState>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<PostPage>, AppError> {
    let cursor = params
        .next_page
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing next_page cursor".to_string()))?;

    tracing::info!(cursor = %cursor, "Loading more posts");

    let page = listing::load_more(state.fetcher.as_ref(), &cursor).await?;
    Ok(Json(page))
}
