use reqwest::Client;
use serde::{Deserialize, Serialize};
use snooscope_core::{AppConfig, Comment, CoreError, FetchError, REDDIT_BASE_URL};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Listing children of this kind are comments; anything else is skipped.
const COMMENT_KIND: &str = "t1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub kind: String,
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingData<T> {
    pub children: Vec<ListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub dist: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingChild<T> {
    pub kind: String,
    pub data: T,
}

/// Raw comment payload from the listing endpoint. Fields are optional
/// because the endpoint does not guarantee any of them per record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentData {
    pub subreddit: Option<String>,
    pub score: Option<i64>,
    pub body: Option<String>,
    pub created_utc: Option<f64>,
    pub permalink: Option<String>,
}

impl From<CommentData> for Comment {
    fn from(data: CommentData) -> Self {
        Self {
            subreddit: data.subreddit,
            score: data.score,
            body: data.body,
            created_utc: data.created_utc,
            permalink: data.permalink,
        }
    }
}

/// Client for the unauthenticated per-user comment listing.
///
/// Pagination is strictly sequential: one page in flight at a time, no
/// retry, no backoff. Any failure terminates the run and discards every
/// comment accumulated so far.
#[derive(Debug)]
pub struct UserCommentsClient {
    http_client: Client,
    page_limit: u32,
}

impl UserCommentsClient {
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| FetchError::Network {
                message: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            page_limit: config.page_limit,
        })
    }

    /// Fetch the user's complete comment history, following the `after`
    /// cursor until the endpoint stops returning one.
    pub async fn fetch_user_comments(&self, username: &str) -> Result<Vec<Comment>, CoreError> {
        let mut comments = Vec::new();
        let mut after: Option<String> = None;
        let mut pages = 0usize;

        info!("Fetching comment history for u/{}", username);

        loop {
            let url = page_url(username, self.page_limit, after.as_deref());
            debug!("Requesting page {} for u/{}", pages + 1, username);

            let response = self
                .http_client
                .get(&url)
                .send()
                .await
                .map_err(map_transport_error)?;

            let status = response.status().as_u16();
            if let Some(err) = classify_status(status) {
                warn!(
                    "Listing request for u/{} failed with status {}",
                    username, status
                );
                return Err(err.into());
            }

            let body = response.text().await.map_err(map_transport_error)?;
            let listing: Listing<CommentData> =
                serde_json::from_str(&body).map_err(|e| {
                    warn!("Malformed listing body for u/{}: {}", username, e);
                    FetchError::NotFound {
                        username: username.to_string(),
                    }
                })?;

            let batch = extract_comments(listing.data.children);
            debug!("Page {} carried {} comments", pages + 1, batch.len());
            comments.extend(batch);
            pages += 1;

            match next_cursor(listing.data.after) {
                Some(cursor) => after = Some(cursor),
                None => break,
            }
        }

        info!(
            "Fetched {} comments for u/{} across {} pages",
            comments.len(),
            username,
            pages
        );
        Ok(comments)
    }
}

pub(crate) fn page_url(username: &str, limit: u32, after: Option<&str>) -> String {
    let mut url = format!("{REDDIT_BASE_URL}/user/{username}/comments.json?limit={limit}");
    if let Some(cursor) = after {
        url.push_str("&after=");
        url.push_str(cursor);
    }
    url
}

/// `None` means the response is usable; anything else is terminal.
pub(crate) fn classify_status(status: u16) -> Option<FetchError> {
    match status {
        200 => None,
        403 => Some(FetchError::AccessBlocked),
        status => Some(FetchError::FetchFailed { status }),
    }
}

fn map_transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network {
            message: err.to_string(),
        }
    }
}

pub(crate) fn extract_comments(children: Vec<ListingChild<CommentData>>) -> Vec<Comment> {
    children
        .into_iter()
        .filter(|child| child.kind == COMMENT_KIND)
        .map(|child| child.data.into())
        .collect()
}

/// The endpoint signals the last page with a null or empty `after`.
pub(crate) fn next_cursor(after: Option<String>) -> Option<String> {
    after.filter(|cursor| !cursor.is_empty())
}
