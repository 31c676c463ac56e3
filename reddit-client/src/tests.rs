use crate::{
    RedditCommentData, RedditListing, RedditListingChild, RedditPostData, RedditUserData,
};

// Captured shapes of the public JSON endpoints, trimmed to the fields the
// client deserializes. Reddit sends many more keys; serde ignores them.

const ABOUT_JSON: &str = r#"{
    "kind": "t2",
    "data": {
        "name": "alice",
        "created_utc": 1262304000.0,
        "link_karma": 1200,
        "comment_karma": 3400
    }
}"#;

const SUBMITTED_JSON: &str = r#"{
    "kind": "Listing",
    "data": {
        "after": "t3_next",
        "before": null,
        "dist": 2,
        "children": [
            {
                "kind": "t3",
                "data": {
                    "id": "p1",
                    "title": "Why I switched to Go",
                    "selftext": "Long story.",
                    "subreddit": "golang",
                    "permalink": "/r/golang/comments/p1/why_i_switched_to_go/",
                    "created_utc": 1755007200.0,
                    "score": 120,
                    "num_comments": 33,
                    "is_self": true
                }
            },
            {
                "kind": "t3",
                "data": {
                    "id": "p2",
                    "title": "Weekly screenshot thread",
                    "selftext": "",
                    "subreddit": "gamedev",
                    "permalink": "/r/gamedev/comments/p2/weekly_screenshot_thread/",
                    "created_utc": 1754920800.0,
                    "score": 9,
                    "num_comments": 0,
                    "is_self": false
                }
            }
        ]
    }
}"#;

const COMMENTS_JSON: &str = r#"{
    "kind": "Listing",
    "data": {
        "after": null,
        "before": null,
        "dist": 1,
        "children": [
            {
                "kind": "t1",
                "data": {
                    "id": "c1",
                    "body": "Channels are fine for this.",
                    "subreddit": "golang",
                    "permalink": "/r/golang/comments/p9/some_post/c1/",
                    "created_utc": 1755010800.0,
                    "score": 15
                }
            }
        ]
    }
}"#;

#[test]
fn test_deserialize_user_about() {
    let about: RedditListingChild<RedditUserData> = serde_json::from_str(ABOUT_JSON).unwrap();
    assert_eq!(about.kind, "t2");
    assert_eq!(about.data.name, "alice");
    assert_eq!(about.data.link_karma, 1200);
    assert_eq!(about.data.comment_karma, 3400);
    assert_eq!(about.data.created_utc as i64, 1262304000);
}

#[test]
fn test_deserialize_submitted_listing() {
    let listing: RedditListing<RedditPostData> = serde_json::from_str(SUBMITTED_JSON).unwrap();
    assert_eq!(listing.kind, "Listing");
    assert_eq!(listing.data.after.as_deref(), Some("t3_next"));
    assert_eq!(listing.data.children.len(), 2);

    let first = &listing.data.children[0].data;
    assert_eq!(first.id, "p1");
    assert_eq!(first.subreddit, "golang");
    assert_eq!(first.score, 120);
    assert!(first.is_self);

    let second = &listing.data.children[1].data;
    assert!(second.selftext.is_empty());
    assert!(!second.is_self);
}

#[test]
fn test_deserialize_comments_listing() {
    let listing: RedditListing<RedditCommentData> = serde_json::from_str(COMMENTS_JSON).unwrap();
    assert!(listing.data.after.is_none());
    assert_eq!(listing.data.children.len(), 1);

    let comment = &listing.data.children[0].data;
    assert_eq!(comment.id, "c1");
    assert_eq!(comment.body, "Channels are fine for this.");
    assert_eq!(comment.subreddit, "golang");
}

#[test]
fn test_deserialize_post_with_missing_optional_fields() {
    // Link posts sometimes omit selftext entirely.
    let json = r#"{
        "id": "p3",
        "title": "A link post",
        "subreddit": "rust",
        "permalink": "/r/rust/comments/p3/a_link_post/",
        "created_utc": 1755000000.0,
        "score": 3
    }"#;
    let post: RedditPostData = serde_json::from_str(json).unwrap();
    assert!(post.selftext.is_empty());
    assert_eq!(post.num_comments, 0);
    assert!(!post.is_self);
}
