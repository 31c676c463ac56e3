use persona_core::{CoreError, ErrorExt};
use persona_engine::{
    aggregate, extract_username, render, report_filename, write_report, ActivityFetcher,
    DEFAULT_ITEM_LIMIT,
};
use reddit_client::RedditApiClient;
use std::io::{self, Write};
use std::path::PathBuf;

const DEFAULT_USER_AGENT: &str = "redditpersona/0.1 (public activity summarizer)";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("redditpersona=info,persona_engine=info,reddit_client=info")
        .init();

    println!("Reddit User Persona Generator");
    println!("{}", "=".repeat(40));
    print!("Enter Reddit profile URL: ");
    let _ = io::stdout().flush();

    let mut profile_url = String::new();
    if let Err(e) = io::stdin().read_line(&mut profile_url) {
        eprintln!("Error: failed to read input: {e}");
        std::process::exit(1);
    }

    match run(profile_url.trim()).await {
        Ok(path) => println!("Saved full persona to {}", path.display()),
        Err(err) => {
            err.log_error();
            eprintln!("Error: {}", err.user_friendly_message());
            std::process::exit(1);
        }
    }
}

async fn run(profile_url: &str) -> Result<PathBuf, CoreError> {
    let username = extract_username(profile_url)?;
    tracing::info!("Generating persona for u/{}", username);

    let user_agent =
        std::env::var("REDDIT_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    let client = RedditApiClient::new(user_agent);
    let fetcher = ActivityFetcher::new(client);

    let (profile, collection) = fetcher.fetch_user(&username, DEFAULT_ITEM_LIMIT).await?;
    println!(
        "Scraped {} posts and {} comments",
        collection.post_count(),
        collection.comment_count()
    );

    let aggregates = aggregate(&collection, chrono::Local::now());
    let report = render(&profile, &collection, &aggregates);
    let path = PathBuf::from(report_filename(&username));
    write_report(&path, &report)?;
    Ok(path)
}
