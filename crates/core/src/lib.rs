pub mod date;

use serde::{Deserialize, Serialize};

/// One blog post in display form. `first_publication_date` is already
/// localized; normalization happens exactly once, at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub data: PostData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// One page of results as handed to the browser: the posts of this batch
/// plus the cursor for the page after it. A `null` cursor means the end of
/// pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub next_page: Option<String>,
    pub results: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The wire shape shared with the browser script: `next_page` is an
    /// explicit null at the end of pagination, never omitted.
    #[test]
    fn test_post_page_serializes_null_cursor() {
        let page = PostPage {
            next_page: None,
            results: vec![],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("next_page").unwrap().is_null());
    }

    #[test]
    fn test_post_round_trips() {
        let post = Post {
            uid: Some("como-utilizar-hooks".to_string()),
            first_publication_date: Some("15 mar 2021".to_string()),
            data: PostData {
                title: "Como utilizar Hooks".to_string(),
                subtitle: "Pensando em sincronização em vez de ciclos de vida".to_string(),
                author: "Joseph Oliveira".to_string(),
            },
        };
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }
}
