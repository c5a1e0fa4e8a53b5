use crate::api::{FetchError, PageFetcher, RawPage, RawPost};
use blog_core::{date, Post, PostData, PostPage};

/// Turns one CMS record into display form: uid copied, publication date
/// localized, text fields copied. Runs exactly once per record.
pub fn normalize_post(raw: RawPost) -> Post {
    let first_publication_date = match raw.first_publication_date {
        Some(iso) => {
            let formatted = date::format_publication_date(&iso);
            if formatted.is_none() {
                tracing::warn!(uid = ?raw.uid, date = %iso, "Unparseable publication date, rendering placeholder");
            }
            formatted
        }
        None => None,
    };

    Post {
        uid: raw.uid,
        first_publication_date,
        data: PostData {
            title: raw.data.title,
            subtitle: raw.data.subtitle,
            author: raw.data.author,
        },
    }
}

pub fn normalize_page(raw: RawPage) -> PostPage {
    // Some CMS backends signal the end with "" instead of null.
    let next_page = raw.next_page.filter(|url| !url.is_empty());

    PostPage {
        next_page,
        results: raw.results.into_iter().map(normalize_post).collect(),
    }
}

/// The listing's whole view state. Transitions return a fresh value rather
/// than mutating in place, so every cursor swap is explicit.
///
/// Invariants: `posts` only ever grows, existing items keep their order,
/// and `next_page` is always the cursor for the page after the most
/// recently appended batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub posts: Vec<Post>,
    pub next_page: Option<String>,
}

impl ListingState {
    pub fn from_page(page: PostPage) -> Self {
        Self {
            posts: page.results,
            next_page: page.next_page,
        }
    }

    /// Applies one load-more batch: new posts go after the existing ones,
    /// the stored cursor is replaced by the incoming one.
    pub fn append(&self, page: PostPage) -> Self {
        let mut posts = self.posts.clone();
        posts.extend(page.results);

        Self {
            posts,
            next_page: page.next_page,
        }
    }

    /// Whether the load-more control should exist at all.
    pub fn can_load_more(&self) -> bool {
        self.next_page.is_some()
    }
}

/// Initial server-side fetch: query the CMS, normalize, build the state the
/// page renders from.
pub async fn initial_listing<F: PageFetcher>(fetcher: &F) -> Result<ListingState, FetchError> {
    let raw = fetcher.initial_page().await?;
    Ok(ListingState::from_page(normalize_page(raw)))
}

/// One load-more step: fetch the cursor URL and normalize the batch. The
/// caller decides what state to merge it into.
pub async fn load_more<F: PageFetcher>(fetcher: &F, cursor: &str) -> Result<PostPage, FetchError> {
    let raw = fetcher.page_at(cursor).await?;
    Ok(normalize_page(raw))
}
