use persona_core::{ActivityItem, ActivityKind, CoreError, RedditApiError};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

const REDDIT_API_BASE: &str = "https://www.reddit.com";

/// Reddit caps listing pages at 100 children.
const LISTING_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub dist: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPostData {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    pub subreddit: String,
    pub permalink: String,
    pub created_utc: f64,
    pub score: i64,
    #[serde(default)]
    pub num_comments: u32,
    #[serde(default)]
    pub is_self: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditCommentData {
    pub id: String,
    pub body: String,
    pub subreddit: String,
    pub permalink: String,
    pub created_utc: f64,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditUserData {
    pub name: String,
    pub created_utc: f64,
    pub link_karma: i64,
    pub comment_karma: i64,
}

#[derive(Debug)]
pub struct RedditApiClient {
    http_client: Client,
    user_agent: String,
    base_url: String,
}

impl RedditApiClient {
    pub fn new(user_agent: String) -> Self {
        Self::with_base_url(user_agent, REDDIT_API_BASE.to_string())
    }

    /// Client against a non-default endpoint. Tests point this at a local
    /// or unroutable address.
    pub fn with_base_url(user_agent: String, base_url: String) -> Self {
        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            user_agent,
            base_url,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    async fn make_request(
        &self,
        username: &str,
        endpoint: &str,
        query_params: Option<&[(&str, &str)]>,
    ) -> Result<Response, CoreError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request_builder = self
            .http_client
            .get(&url)
            .header("User-Agent", &self.user_agent);

        if let Some(params) = query_params {
            request_builder = request_builder.query(params);
        }

        info!("Making Reddit API request: GET {}", endpoint);
        let response = match request_builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Network error for GET {}: {}", endpoint, e);
                if e.is_timeout() {
                    return Err(CoreError::RedditApi(RedditApiError::RequestTimeout));
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!("Request successful: {} {}", status, endpoint);
            return Ok(response);
        }

        error!("Request failed with status: {} for {}", status, endpoint);
        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                warn!("Rate limited, retry after {} seconds", retry_after);
                Err(CoreError::RedditApi(RedditApiError::RateLimitExceeded {
                    retry_after,
                }))
            }
            401 => Err(CoreError::RedditApi(RedditApiError::Unauthorized {
                endpoint: endpoint.to_string(),
            })),
            403 => Err(CoreError::RedditApi(RedditApiError::Forbidden {
                resource: endpoint.to_string(),
            })),
            404 => Err(CoreError::RedditApi(RedditApiError::UserNotFound {
                username: username.to_string(),
            })),
            code if status.is_server_error() => {
                Err(CoreError::RedditApi(RedditApiError::ServerError {
                    status_code: code,
                }))
            }
            code => Err(CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("Unexpected status {code} for {endpoint}"),
            })),
        }
    }

    pub async fn get_user_about(&self, username: &str) -> Result<RedditUserData, CoreError> {
        let endpoint = format!("/user/{username}/about.json");
        let response = self.make_request(username, &endpoint, None).await?;

        let about: RedditListingChild<RedditUserData> = response.json().await.map_err(|e| {
            error!("Failed to parse user metadata: {}", e);
            CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("Failed to parse metadata for u/{username}"),
            })
        })?;

        debug!("Retrieved account metadata for u/{}", about.data.name);
        Ok(about.data)
    }

    /// Up to `limit` most recent posts, newest first.
    pub async fn list_user_posts(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<RedditPostData>, CoreError> {
        let endpoint = format!("/user/{username}/submitted.json");
        let posts = self.list_pages(username, &endpoint, limit).await?;
        info!("Retrieved {} posts for u/{}", posts.len(), username);
        Ok(posts)
    }

    /// Up to `limit` most recent comments, newest first.
    pub async fn list_user_comments(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<RedditCommentData>, CoreError> {
        let endpoint = format!("/user/{username}/comments.json");
        let comments = self.list_pages(username, &endpoint, limit).await?;
        info!("Retrieved {} comments for u/{}", comments.len(), username);
        Ok(comments)
    }

    /// Walks a newest-first listing endpoint page by page, following the
    /// `after` cursor until `limit` records are collected or the listing
    /// runs out.
    async fn list_pages<T: DeserializeOwned>(
        &self,
        username: &str,
        endpoint: &str,
        limit: u32,
    ) -> Result<Vec<T>, CoreError> {
        let mut collected: Vec<T> = Vec::new();
        let mut after: Option<String> = None;

        while (collected.len() as u32) < limit {
            let page_limit = page_request_size(limit, collected.len());
            let page_limit_str = page_limit.to_string();
            let mut params = vec![("sort", "new"), ("limit", page_limit_str.as_str())];
            if let Some(cursor) = after.as_deref() {
                params.push(("after", cursor));
            }

            let response = self
                .make_request(username, endpoint, Some(params.as_slice()))
                .await?;

            let listing: RedditListing<T> = response.json().await.map_err(|e| {
                error!("Failed to parse listing page: {}", e);
                CoreError::RedditApi(RedditApiError::InvalidResponse {
                    details: format!("Failed to parse listing from {endpoint}"),
                })
            })?;

            let page_len = listing.data.children.len();
            debug!("Listing page from {}: {} children", endpoint, page_len);
            collected.extend(listing.data.children.into_iter().map(|child| child.data));
            after = listing.data.after;

            if page_len == 0 || after.is_none() {
                break;
            }
        }

        collected.truncate(limit as usize);
        Ok(collected)
    }
}

/// Size to request for the next page: the listing cap, or the remaining
/// shortfall if that is smaller.
fn page_request_size(limit: u32, collected: usize) -> u32 {
    LISTING_PAGE_SIZE.min(limit.saturating_sub(collected as u32))
}

impl From<RedditPostData> for ActivityItem {
    fn from(post: RedditPostData) -> Self {
        Self {
            kind: ActivityKind::Post,
            id: post.id,
            subreddit: post.subreddit,
            score: post.score,
            created_utc: post.created_utc as i64,
            url: format!("https://reddit.com{}", post.permalink),
            title: Some(post.title),
            body: post.selftext,
        }
    }
}

impl From<RedditCommentData> for ActivityItem {
    fn from(comment: RedditCommentData) -> Self {
        Self {
            kind: ActivityKind::Comment,
            id: comment.id,
            subreddit: comment.subreddit,
            score: comment.score,
            created_utc: comment.created_utc as i64,
            url: format!("https://reddit.com{}", comment.permalink),
            title: None,
            body: comment.body,
        }
    }
}
