use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::Serialize;
use snooscope_core::Comment;
use std::collections::HashMap;
use tracing::info;

/// Both subreddit tables keep at most this many rows.
pub const TOP_TABLE_LIMIT: usize = 10;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubredditCount {
    pub subreddit: String,
    pub comments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubredditKarma {
    pub subreddit: String,
    pub karma: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyActivity {
    pub hour: u32,
    pub comments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
    pub day: Weekday,
    pub comments: u64,
}

impl DailyActivity {
    pub fn day_name(&self) -> &'static str {
        match self.day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// Aggregates computed once over a fetched comment collection.
///
/// Statistics that depend on a field the listing may omit are `Option`:
/// `None` means the field was absent across the whole collection, which is
/// not the same thing as a legitimate zero.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub total_comments: usize,
    pub total_karma: Option<i64>,
    pub average_karma: Option<f64>,
    pub top_subreddits_by_count: Option<Vec<SubredditCount>>,
    pub top_subreddits_by_karma: Option<Vec<SubredditKarma>>,
    pub activity_by_hour: Option<Vec<HourlyActivity>>,
    pub activity_by_day: Option<Vec<DailyActivity>>,
    pub first_comment: Option<DateTime<Utc>>,
    pub last_comment: Option<DateTime<Utc>>,
    pub days_active: Option<i64>,
    pub comments_per_day: Option<f64>,
    pub most_upvoted: Option<Comment>,
    pub most_downvoted: Option<Comment>,
    pub average_body_chars: Option<f64>,
    /// All comment bodies joined with single spaces, kept opaque here; the
    /// presentation layer derives its word-frequency view from it.
    pub body_blob: Option<String>,
}

/// Compute every statistic in one deterministic pass over the collection.
/// Returns `None` for an empty collection: "user exists but has nothing"
/// stays distinguishable from the fetcher's NotFound.
pub fn analyze(comments: &[Comment]) -> Option<AnalysisResult> {
    if comments.is_empty() {
        return None;
    }

    let total_comments = comments.len();
    let total_karma = karma_total(comments);
    let average_karma = total_karma.map(|sum| sum as f64 / total_comments as f64);

    let activity = activity_stats(comments, total_comments);
    let extremes = extremal_comments(comments);

    let result = AnalysisResult {
        total_comments,
        total_karma,
        average_karma,
        top_subreddits_by_count: subreddit_counts(comments),
        top_subreddits_by_karma: subreddit_karma(comments),
        activity_by_hour: activity.as_ref().map(|a| a.by_hour.clone()),
        activity_by_day: activity.as_ref().map(|a| a.by_day.clone()),
        first_comment: activity.as_ref().map(|a| a.first),
        last_comment: activity.as_ref().map(|a| a.last),
        days_active: activity.as_ref().map(|a| a.days_active),
        comments_per_day: activity.as_ref().map(|a| a.comments_per_day),
        most_upvoted: extremes.as_ref().map(|(most, _)| (*most).clone()),
        most_downvoted: extremes.as_ref().map(|(_, least)| (*least).clone()),
        average_body_chars: mean_body_chars(comments),
        body_blob: body_blob(comments),
    };

    info!(
        "Analyzed {} comments ({} karma across {} subreddits)",
        total_comments,
        result.total_karma.unwrap_or(0),
        result
            .top_subreddits_by_count
            .as_ref()
            .map(|t| t.len())
            .unwrap_or(0)
    );
    Some(result)
}

fn karma_total(comments: &[Comment]) -> Option<i64> {
    let scores: Vec<i64> = comments.iter().filter_map(|c| c.score).collect();
    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum())
    }
}

/// Occurrences per subreddit, most frequent first. The sort is stable over
/// first-encountered order, so equal counts keep their original order.
fn subreddit_counts(comments: &[Comment]) -> Option<Vec<SubredditCount>> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();

    for comment in comments {
        let Some(subreddit) = comment.subreddit.as_deref() else {
            continue;
        };
        *counts.entry(subreddit).or_insert_with(|| {
            seen_order.push(subreddit);
            0
        }) += 1;
    }

    if seen_order.is_empty() {
        return None;
    }

    let mut table: Vec<SubredditCount> = seen_order
        .into_iter()
        .map(|subreddit| SubredditCount {
            subreddit: subreddit.to_string(),
            comments: counts[subreddit],
        })
        .collect();
    table.sort_by(|a, b| b.comments.cmp(&a.comments));
    table.truncate(TOP_TABLE_LIMIT);
    Some(table)
}

/// Score summed per subreddit, highest first. A comment without a score
/// still lands in its subreddit's row, contributing zero.
fn subreddit_karma(comments: &[Comment]) -> Option<Vec<SubredditKarma>> {
    let mut sums: HashMap<&str, i64> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();

    for comment in comments {
        let Some(subreddit) = comment.subreddit.as_deref() else {
            continue;
        };
        *sums.entry(subreddit).or_insert_with(|| {
            seen_order.push(subreddit);
            0
        }) += comment.score.unwrap_or(0);
    }

    if seen_order.is_empty() {
        return None;
    }

    let mut table: Vec<SubredditKarma> = seen_order
        .into_iter()
        .map(|subreddit| SubredditKarma {
            subreddit: subreddit.to_string(),
            karma: sums[subreddit],
        })
        .collect();
    table.sort_by(|a, b| b.karma.cmp(&a.karma));
    table.truncate(TOP_TABLE_LIMIT);
    Some(table)
}

struct ActivityStats {
    by_hour: Vec<HourlyActivity>,
    by_day: Vec<DailyActivity>,
    first: DateTime<Utc>,
    last: DateTime<Utc>,
    days_active: i64,
    comments_per_day: f64,
}

fn activity_stats(comments: &[Comment], total_comments: usize) -> Option<ActivityStats> {
    let timestamps: Vec<DateTime<Utc>> =
        comments.iter().filter_map(Comment::created_at).collect();

    let first = timestamps.iter().copied().min()?;
    let last = timestamps.iter().copied().max()?;

    let mut hours = [0u64; 24];
    let mut days = [0u64; 7];
    for ts in &timestamps {
        hours[ts.hour() as usize] += 1;
        days[ts.weekday().num_days_from_monday() as usize] += 1;
    }

    let by_hour = hours
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(hour, &count)| HourlyActivity {
            hour: hour as u32,
            comments: count,
        })
        .collect();

    let by_day = WEEK
        .iter()
        .filter(|day| days[day.num_days_from_monday() as usize] > 0)
        .map(|&day| DailyActivity {
            day,
            comments: days[day.num_days_from_monday() as usize],
        })
        .collect();

    let days_active = (last - first).num_days();
    let comments_per_day = if days_active > 0 {
        total_comments as f64 / days_active as f64
    } else {
        0.0
    };

    Some(ActivityStats {
        by_hour,
        by_day,
        first,
        last,
        days_active,
        comments_per_day,
    })
}

/// Stable argmax/argmin over present scores: strict comparisons keep the
/// first-encountered record on ties.
fn extremal_comments(comments: &[Comment]) -> Option<(&Comment, &Comment)> {
    let mut most: Option<&Comment> = None;
    let mut least: Option<&Comment> = None;

    for comment in comments {
        let Some(score) = comment.score else { continue };
        if most.and_then(|c| c.score).map_or(true, |best| score > best) {
            most = Some(comment);
        }
        if least.and_then(|c| c.score).map_or(true, |worst| score < worst) {
            least = Some(comment);
        }
    }

    Some((most?, least?))
}

fn mean_body_chars(comments: &[Comment]) -> Option<f64> {
    let lengths: Vec<usize> = comments
        .iter()
        .filter_map(|c| c.body.as_ref().map(|body| body.chars().count()))
        .collect();

    if lengths.is_empty() {
        None
    } else {
        Some(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
    }
}

fn body_blob(comments: &[Comment]) -> Option<String> {
    let bodies: Vec<&str> = comments.iter().filter_map(|c| c.body.as_deref()).collect();
    if bodies.is_empty() {
        None
    } else {
        Some(bodies.join(" "))
    }
}
