use chrono::{DateTime, TimeZone, Utc};
use persona_core::{ActivityCollection, CoreError, RedditApiError, UserProfile};
use reddit_client::RedditApiClient;
use tracing::info;

/// Applies independently to posts and to comments.
pub const DEFAULT_ITEM_LIMIT: u32 = 100;

/// One fetch session: account metadata first, then posts, then comments,
/// strictly in sequence. Any collaborator error aborts the whole fetch;
/// partial results are never returned.
pub struct ActivityFetcher {
    client: RedditApiClient,
}

impl ActivityFetcher {
    pub fn new(client: RedditApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch_user(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<(UserProfile, ActivityCollection), CoreError> {
        info!("Fetching activity for u/{}", username);

        let about = self.client.get_user_about(username).await?;
        let created = Utc
            .timestamp_opt(about.created_utc as i64, 0)
            .single()
            .ok_or_else(|| {
                CoreError::RedditApi(RedditApiError::InvalidResponse {
                    details: format!("Unrepresentable creation time for u/{username}"),
                })
            })?;
        let profile = UserProfile {
            username: username.to_string(),
            account_age_days: account_age_days(created, Utc::now()),
            post_karma: about.link_karma,
            comment_karma: about.comment_karma,
        };

        let mut collection = ActivityCollection::new();
        for post in self.client.list_user_posts(username, limit).await? {
            collection.push(post.into());
        }
        for comment in self.client.list_user_comments(username, limit).await? {
            collection.push(comment.into());
        }

        info!(
            "Fetched {} posts and {} comments for u/{}",
            collection.post_count(),
            collection.comment_count(),
            username
        );
        Ok((profile, collection))
    }
}

fn account_age_days(created: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created).num_days()
}
