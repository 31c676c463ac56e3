use crate::aggregate::Aggregates;
use persona_core::{ActivityCollection, ActivityItem, CoreError, UserProfile};
use std::path::Path;
use tracing::info;

const SECTION_RULE_LEN: usize = 60;
const CLAIM_RULE_LEN: usize = 40;
const EVIDENCE_PER_CLAIM: usize = 3;
const EXCERPT_CHARS: usize = 50;

pub fn report_filename(username: &str) -> String {
    format!("{username}_persona.txt")
}

/// Renders the two-section persona document. Deterministic for fixed
/// inputs: all "now"-relative numbers live in `aggregates`.
pub fn render(
    profile: &UserProfile,
    collection: &ActivityCollection,
    aggregates: &Aggregates,
) -> String {
    let section_rule = "=".repeat(SECTION_RULE_LEN);
    let claim_rule = "-".repeat(CLAIM_RULE_LEN);
    let mut out = String::new();

    out.push_str(&format!("{section_rule}\n"));
    out.push_str(&format!("USER PERSONA: u/{}\n", profile.username));
    out.push_str(&format!("{section_rule}\n\n"));

    out.push_str("BASIC INFORMATION:\n");
    out.push_str(&format!("Account Age: {} days\n", profile.account_age_days));
    out.push_str(&format!("Post Karma: {}\n", profile.post_karma));
    out.push_str(&format!("Comment Karma: {}\n", profile.comment_karma));
    out.push_str(&format!("Total Posts: {}\n", collection.post_count()));
    out.push_str(&format!("Total Comments: {}\n", collection.comment_count()));
    out.push_str(&format!(
        "Active Subreddits: {}\n\n",
        collection.subreddit_counts().len()
    ));

    out.push_str("INTERESTS:\n");
    for (name, _) in &aggregates.top_subreddits {
        out.push_str(&format!("• Active in r/{name}\n"));
    }
    out.push('\n');

    out.push_str("PERSONALITY TRAITS:\n");
    out.push_str("• Balanced emotional expression\n\n");

    out.push_str("ACTIVITY PATTERNS:\n");
    out.push_str(&format!("• Most active around {}:00\n", aggregates.peak_hour));
    out.push_str(&format!("• Most active on {}s\n", aggregates.peak_day));
    out.push_str(&format!(
        "• Posted {} times in the last 30 days\n\n",
        aggregates.recent_count
    ));

    out.push_str("EXPERTISE AREAS:\n\n");

    out.push_str("TOP SUBREDDITS:\n");
    for (name, count) in &aggregates.top_subreddits {
        out.push_str(&format!("• r/{name}: {count} posts/comments\n"));
    }
    out.push('\n');

    out.push_str(&format!("{section_rule}\n"));
    out.push_str("CITATIONS AND EVIDENCE\n");
    out.push_str(&format!("{section_rule}\n\n"));

    out.push_str("INTERESTS:\n");
    out.push_str(&format!("{claim_rule}\n"));
    for (name, _) in &aggregates.top_subreddits {
        out.push_str(&format!("Characteristic: Active in r/{name}\n"));
        out.push_str("Evidence:\n");
        for item in evidence_for(collection, name) {
            out.push_str(&format!(
                "  • {}: '{}' ({})\n",
                item.kind.label(),
                excerpt(item.excerpt_source()),
                item.url
            ));
        }
        out.push('\n');
    }

    out.push_str("PERSONALITY TRAITS:\n");
    out.push_str(&format!("{claim_rule}\n"));
    out.push_str("Characteristic: Balanced emotional expression\n");
    out.push_str("Evidence:\n\n");

    let analyzed = collection.len();
    out.push_str("ACTIVITY PATTERNS:\n");
    out.push_str(&format!("{claim_rule}\n"));
    out.push_str(&format!(
        "Characteristic: Most active around {}:00\n",
        aggregates.peak_hour
    ));
    out.push_str(&format!(
        "Evidence:\n  • Based on analysis of {analyzed} posts and comments\n\n"
    ));
    out.push_str(&format!(
        "Characteristic: Most active on {}s\n",
        aggregates.peak_day
    ));
    out.push_str(&format!(
        "Evidence:\n  • Based on analysis of {analyzed} posts and comments\n\n"
    ));
    out.push_str(&format!(
        "Characteristic: Posted {} times in the last 30 days\n",
        aggregates.recent_count
    ));
    out.push_str(&format!(
        "Evidence:\n  • Based on analysis of {analyzed} posts and comments\n\n"
    ));

    out.push_str("EXPERTISE AREAS:\n");
    out.push_str(&format!("{claim_rule}\n\n"));

    out
}

pub fn write_report(path: &Path, contents: &str) -> Result<(), CoreError> {
    std::fs::write(path, contents)?;
    info!("Saved persona report to {}", path.display());
    Ok(())
}

/// Supporting examples for one subreddit claim, in collection encounter
/// order (posts before comments).
fn evidence_for<'a>(
    collection: &'a ActivityCollection,
    subreddit: &str,
) -> impl Iterator<Item = &'a ActivityItem> {
    let subreddit = subreddit.to_string();
    collection
        .items()
        .iter()
        .filter(move |item| item.subreddit == subreddit)
        .take(EVIDENCE_PER_CLAIM)
}

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}
