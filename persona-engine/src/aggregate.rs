use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Timelike};
use indexmap::IndexMap;
use persona_core::ActivityCollection;

pub const TOP_SUBREDDIT_COUNT: usize = 5;
pub const RECENT_WINDOW_DAYS: i64 = 30;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Sentinel when no timestamps exist to pick a peak day from.
pub const UNKNOWN_DAY: &str = "Unknown";

/// Derived statistics over one fetched collection. Recomputed per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    /// Highest-count subreddits, count descending, at most
    /// [`TOP_SUBREDDIT_COUNT`] entries. Ties keep first-encounter order.
    pub top_subreddits: Vec<(String, usize)>,
    pub peak_hour: u32,
    pub peak_day: &'static str,
    /// Items newer than `now` minus [`RECENT_WINDOW_DAYS`].
    pub recent_count: usize,
}

/// Single pass over the collection's timestamps, converting each to the
/// local calendar. `now` is a parameter so renders can be pinned in tests.
pub fn aggregate(collection: &ActivityCollection, now: DateTime<Local>) -> Aggregates {
    let mut hour_counts: IndexMap<u32, usize> = IndexMap::new();
    let mut day_counts: IndexMap<u32, usize> = IndexMap::new();

    for &ts in collection.timestamps() {
        // Out-of-range timestamps cannot come from Reddit; skip rather
        // than poison the whole aggregation.
        let Some(local) = Local.timestamp_opt(ts, 0).single() else {
            continue;
        };
        *hour_counts.entry(local.hour()).or_insert(0) += 1;
        *day_counts
            .entry(local.weekday().num_days_from_monday())
            .or_insert(0) += 1;
    }

    let peak_hour = peak_key(&hour_counts).unwrap_or(0);
    let peak_day = peak_key(&day_counts)
        .map(|day| WEEKDAY_NAMES[day as usize])
        .unwrap_or(UNKNOWN_DAY);

    let cutoff = (now - Duration::days(RECENT_WINDOW_DAYS)).timestamp();
    let recent_count = collection
        .timestamps()
        .iter()
        .filter(|&&ts| ts > cutoff)
        .count();

    Aggregates {
        top_subreddits: top_subreddits(collection),
        peak_hour,
        peak_day,
        recent_count,
    }
}

/// First-encountered key holding the maximum count.
fn peak_key(counts: &IndexMap<u32, usize>) -> Option<u32> {
    let mut best: Option<(u32, usize)> = None;
    for (&key, &count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

fn top_subreddits(collection: &ActivityCollection) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = collection
        .subreddit_counts()
        .iter()
        .map(|(name, &count)| (name.clone(), count))
        .collect();
    // Stable sort keeps insertion order among equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(TOP_SUBREDDIT_COUNT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::{ActivityItem, ActivityKind};

    fn item(subreddit: &str, created_utc: i64) -> ActivityItem {
        ActivityItem {
            kind: ActivityKind::Comment,
            id: format!("c{created_utc}"),
            subreddit: subreddit.to_string(),
            score: 1,
            created_utc,
            url: String::new(),
            title: None,
            body: String::new(),
        }
    }

    fn local_ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("unambiguous local time")
            .timestamp()
    }

    fn now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 9, 1, 12, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_empty_collection_uses_defaults() {
        let aggregates = aggregate(&ActivityCollection::new(), now());
        assert_eq!(aggregates.peak_hour, 0);
        assert_eq!(aggregates.peak_day, UNKNOWN_DAY);
        assert_eq!(aggregates.recent_count, 0);
        assert!(aggregates.top_subreddits.is_empty());
    }

    #[test]
    fn test_peak_hour_and_day() {
        let mut collection = ActivityCollection::new();
        // Two items on a Wednesday at 14:xx, one on a Thursday morning.
        collection.push(item("rust", local_ts(2025, 8, 20, 14, 0)));
        collection.push(item("rust", local_ts(2025, 8, 20, 14, 30)));
        collection.push(item("rust", local_ts(2025, 8, 21, 9, 0)));

        let aggregates = aggregate(&collection, now());
        assert_eq!(aggregates.peak_hour, 14);
        assert_eq!(aggregates.peak_day, "Wednesday");
    }

    #[test]
    fn test_peak_ties_go_to_first_encountered() {
        let mut collection = ActivityCollection::new();
        collection.push(item("rust", local_ts(2025, 8, 20, 10, 0)));
        collection.push(item("rust", local_ts(2025, 8, 21, 12, 0)));

        let aggregates = aggregate(&collection, now());
        // One observation each; the hour seen first wins.
        assert_eq!(aggregates.peak_hour, 10);
        assert_eq!(aggregates.peak_day, "Wednesday");
    }

    #[test]
    fn test_recency_window_is_strict() {
        let mut collection = ActivityCollection::new();
        let cutoff = (now() - Duration::days(RECENT_WINDOW_DAYS)).timestamp();
        collection.push(item("rust", cutoff)); // exactly on the boundary
        collection.push(item("rust", cutoff + 1));
        collection.push(item("rust", cutoff - 86_400));

        let aggregates = aggregate(&collection, now());
        assert_eq!(aggregates.recent_count, 1);
    }

    #[test]
    fn test_top_subreddits_order_and_truncation() {
        let mut collection = ActivityCollection::new();
        let ts = local_ts(2025, 8, 20, 14, 0);
        for _ in 0..3 {
            collection.push(item("rust", ts));
        }
        for _ in 0..3 {
            collection.push(item("golang", ts));
        }
        for sub in ["python", "cpp", "zig", "haskell", "elixir"] {
            collection.push(item(sub, ts));
        }

        let aggregates = aggregate(&collection, now());
        assert_eq!(aggregates.top_subreddits.len(), TOP_SUBREDDIT_COUNT);
        // rust before golang: equal counts, rust was encountered first.
        assert_eq!(aggregates.top_subreddits[0], ("rust".to_string(), 3));
        assert_eq!(aggregates.top_subreddits[1], ("golang".to_string(), 3));
        assert_eq!(aggregates.top_subreddits[2], ("python".to_string(), 1));

        let total: usize = aggregates.top_subreddits.iter().map(|(_, c)| c).sum();
        assert!(total <= collection.len());
    }
}
