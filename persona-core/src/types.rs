use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Account-level metadata for the profiled user. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub account_age_days: i64,
    pub post_karma: i64,
    pub comment_karma: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Post,
    Comment,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Post => "Post",
            ActivityKind::Comment => "Comment",
        }
    }
}

/// One fetched post or comment. Created during fetch, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub id: String,
    pub subreddit: String,
    pub score: i64,
    pub created_utc: i64,
    pub url: String,
    /// Post title. Comments have none.
    pub title: Option<String>,
    /// Post selftext or comment body.
    pub body: String,
}

impl ActivityItem {
    /// Text quoted as evidence: the title for posts, the body otherwise.
    pub fn excerpt_source(&self) -> &str {
        match &self.title {
            Some(title) if !title.is_empty() => title,
            _ => &self.body,
        }
    }
}

/// Everything fetched for one user, in fetch order: all posts, then all
/// comments, each batch newest-first as Reddit delivered it.
///
/// `push` is the only mutator and records the subreddit count and timestamp
/// alongside the item, so the frequency map's total always equals `len()`.
#[derive(Debug, Default)]
pub struct ActivityCollection {
    items: Vec<ActivityItem>,
    subreddit_counts: IndexMap<String, usize>,
    timestamps: Vec<i64>,
    post_count: usize,
    comment_count: usize,
}

impl ActivityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ActivityItem) {
        *self
            .subreddit_counts
            .entry(item.subreddit.clone())
            .or_insert(0) += 1;
        self.timestamps.push(item.created_utc);
        match item.kind {
            ActivityKind::Post => self.post_count += 1,
            ActivityKind::Comment => self.comment_count += 1,
        }
        self.items.push(item);
    }

    pub fn items(&self) -> &[ActivityItem] {
        &self.items
    }

    /// Subreddit -> occurrence count, in first-encounter order.
    pub fn subreddit_counts(&self) -> &IndexMap<String, usize> {
        &self.subreddit_counts
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn post_count(&self) -> usize {
        self.post_count
    }

    pub fn comment_count(&self) -> usize {
        self.comment_count
    }
}
