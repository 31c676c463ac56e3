pub mod api;

pub use api::{
    RedditApiClient, RedditCommentData, RedditListing, RedditListingChild, RedditListingData,
    RedditPostData, RedditUserData,
};

#[cfg(test)]
mod tests;
