use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use url::Url;

/// A page of records as the CMS returns them, publication dates still in
/// ISO form.
#[derive(Debug, Deserialize, Clone)]
pub struct RawPage {
    pub next_page: Option<String>,
    pub results: Vec<RawPost>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawPost {
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub data: RawPostData,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawPostData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// What can go wrong talking to the CMS. Transport, upstream status and
/// parse failures stay distinguishable all the way up to the HTTP layer;
/// a cursor pointing somewhere other than the CMS never leaves the service.
#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Status(StatusCode),
    Malformed(serde_json::Error),
    ForeignCursor(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(err) => write!(f, "CMS request failed: {}", err),
            FetchError::Status(status) => write!(f, "CMS responded with status {}", status),
            FetchError::Malformed(err) => write!(f, "CMS payload is not a page: {}", err),
            FetchError::ForeignCursor(url) => {
                write!(f, "cursor URL is not on the CMS origin: {}", url)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request(err) => Some(err),
            FetchError::Status(_) => None,
            FetchError::Malformed(err) => Some(err),
            FetchError::ForeignCursor(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err)
    }
}

/// Whether `cursor` points at the same origin (scheme, host, port) as the
/// CMS API itself. Cursors come in from the query string, so anything off
/// the CMS origin is refused before a request leaves the service.
pub fn cursor_matches_origin(api_url: &str, cursor: &str) -> bool {
    let (Ok(api), Ok(cursor)) = (Url::parse(api_url), Url::parse(cursor)) else {
        return false;
    };

    cursor.scheme() == api.scheme()
        && cursor.host_str() == api.host_str()
        && cursor.port_or_known_default() == api.port_or_known_default()
}

#[async_trait::async_trait]
pub trait PageFetcher {
    /// The fixed search query for the first page of the listing.
    async fn initial_page(&self) -> Result<RawPage, FetchError>;

    /// Plain GET of a cursor URL handed back by a previous page.
    async fn page_at(&self, url: &str) -> Result<RawPage, FetchError>;
}

#[derive(Clone, Debug)]
pub struct CmsConfig {
    pub api_url: String,
    pub content_type: String,
    pub page_size: usize,
}

/// Fetcher for a Prismic-style REST endpoint: a `/documents/search` query
/// filtered on one document type, with a fixed field set and page size.
pub struct CmsFetcher {
    client: Client,
    config: CmsConfig,
}

impl CmsFetcher {
    pub fn new(client: Client, config: CmsConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    async fn decode(res: reqwest::Response) -> Result<RawPage, FetchError> {
        if !res.status().is_success() {
            return Err(FetchError::Status(res.status()));
        }
        let body = res.text().await?;
        serde_json::from_str(&body).map_err(FetchError::Malformed)
    }
}

#[async_trait::async_trait]
impl PageFetcher for CmsFetcher {
    async fn initial_page(&self) -> Result<RawPage, FetchError> {
        let url = format!(
            "{}/documents/search",
            self.config.api_url.trim_end_matches('/')
        );
        let predicate = format!("[[at(document.type,\"{}\")]]", self.config.content_type);
        let fields = format!(
            "{ct}.title,{ct}.subtitle,{ct}.author",
            ct = self.config.content_type
        );

        let res = self
            .client
            .get(&url)
            .query(&[
                ("q", predicate.as_str()),
                ("fetch", fields.as_str()),
                ("pageSize", self.config.page_size.to_string().as_str()),
            ])
            .send()
            .await?;

        Self::decode(res).await
    }

    async fn page_at(&self, url: &str) -> Result<RawPage, FetchError> {
        if !cursor_matches_origin(&self.config.api_url, url) {
            return Err(FetchError::ForeignCursor(url.to_string()));
        }

        let res = self.client.get(url).send().await?;
        Self::decode(res).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_page_deserializes_cms_shape() {
        let json = r#"{
            "next_page": "https://cms.example/page/2",
            "results": [
                {
                    "uid": "primeiro-post",
                    "first_publication_date": "2021-03-15T10:00:00+0000",
                    "data": {
                        "title": "Primeiro post",
                        "subtitle": "Um subtítulo",
                        "author": "Ana Souza"
                    }
                }
            ]
        }"#;

        let page: RawPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page.as_deref(), Some("https://cms.example/page/2"));
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].uid.as_deref(), Some("primeiro-post"));
    }

    #[test]
    fn test_raw_page_tolerates_missing_uid_and_date() {
        let json = r#"{
            "next_page": null,
            "results": [
                {
                    "uid": null,
                    "first_publication_date": null,
                    "data": { "title": "t", "subtitle": "s", "author": "a" }
                }
            ]
        }"#;

        let page: RawPage = serde_json::from_str(json).unwrap();
        assert!(page.next_page.is_none());
        assert!(page.results[0].first_publication_date.is_none());
    }

    #[test]
    fn test_non_page_payload_is_malformed() {
        let err = serde_json::from_str::<RawPage>(r#"{"unexpected": true}"#)
            .map_err(FetchError::Malformed)
            .unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
        assert!(err.to_string().contains("not a page"));
    }

    // Cursor origin validation

    const API: &str = "https://cms.example/api/v2";

    #[test]
    fn test_cursor_on_cms_origin_is_allowed() {
        assert!(cursor_matches_origin(API, "https://cms.example/page/2"));
        assert!(cursor_matches_origin(
            API,
            "https://cms.example/api/v2/documents/search?page=2"
        ));
    }

    #[test]
    fn test_explicit_default_port_still_matches() {
        assert!(cursor_matches_origin(API, "https://cms.example:443/page/2"));
    }

    #[test]
    fn test_other_host_is_rejected() {
        assert!(!cursor_matches_origin(API, "https://evil.example/page/2"));
        // Host must match exactly, not merely start with the CMS host.
        assert!(!cursor_matches_origin(
            API,
            "https://cms.example.evil.example/page/2"
        ));
    }

    #[test]
    fn test_scheme_and_port_must_match() {
        assert!(!cursor_matches_origin(API, "http://cms.example/page/2"));
        assert!(!cursor_matches_origin(API, "https://cms.example:8443/page/2"));
    }

    #[test]
    fn test_unparseable_cursor_is_rejected() {
        assert!(!cursor_matches_origin(API, "page/2"));
        assert!(!cursor_matches_origin(API, ""));
        assert!(!cursor_matches_origin("not a url", "https://cms.example/x"));
    }
}
