use crate::error::AppError;
use crate::render;
use crate::state::SharedState;
use axum::{extract::State, response::Html};

/// The listing page. Fetches page one from the CMS on every request,
/// normalizes it and renders the whole document server-side.
pub async fn home(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let listing = listing::initial_listing(state.fetcher.as_ref()).await?;

    tracing::info!(
        cms = %state.fetcher.config().api_url,
        posts = listing.posts.len(),
        has_more = listing.can_load_more(),
        "Rendered listing page"
    );

    Ok(Html(render::render_home(&listing)))
}
