pub mod api;
pub mod logic;

pub use api::{
    cursor_matches_origin, CmsConfig, CmsFetcher, FetchError, PageFetcher, RawPage, RawPost,
    RawPostData,
};
pub use logic::{initial_listing, load_more, normalize_page, normalize_post, ListingState};
