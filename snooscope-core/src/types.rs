use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Base URL used to turn relative permalinks into clickable links.
pub const REDDIT_BASE_URL: &str = "https://www.reddit.com";

/// One user-authored comment as returned by the public listing endpoint.
///
/// Every field is optional: listing payloads do not reliably carry all
/// attributes, and a missing field must stay distinguishable from an empty
/// or zero value downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    pub subreddit: Option<String>,
    pub score: Option<i64>,
    pub body: Option<String>,
    pub created_utc: Option<f64>,
    pub permalink: Option<String>,
}

impl Comment {
    /// Creation time as a UTC datetime, truncated to whole seconds.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.created_utc?;
        Utc.timestamp_opt(secs as i64, 0).single()
    }

    /// Absolute permalink for display, reconstructed from the relative one.
    pub fn full_permalink(&self) -> Option<String> {
        self.permalink
            .as_ref()
            .map(|path| format!("{REDDIT_BASE_URL}{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_created_at_conversion() {
        let comment = Comment {
            created_utc: Some(1640995200.7),
            ..Default::default()
        };

        let created = comment.created_at().unwrap();
        assert_eq!(created.timestamp(), 1640995200);
        assert_eq!(created.hour(), 0);

        let missing = Comment::default();
        assert!(missing.created_at().is_none());
    }

    #[test]
    fn test_full_permalink() {
        let comment = Comment {
            permalink: Some("/r/rust/comments/abc/def/".to_string()),
            ..Default::default()
        };

        assert_eq!(
            comment.full_permalink().unwrap(),
            "https://www.reddit.com/r/rust/comments/abc/def/"
        );
        assert!(Comment::default().full_permalink().is_none());
    }
}
