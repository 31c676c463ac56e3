pub mod aggregate;
pub mod fetcher;
pub mod profile_url;
pub mod report;

pub use aggregate::{aggregate, Aggregates, RECENT_WINDOW_DAYS, TOP_SUBREDDIT_COUNT};
pub use fetcher::{ActivityFetcher, DEFAULT_ITEM_LIMIT};
pub use profile_url::extract_username;
pub use report::{render, report_filename, write_report};
