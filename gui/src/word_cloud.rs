use std::collections::HashMap;

/// Common English words that would otherwise dominate every word list.
const STOP_WORDS: &[&str] = &[
    "about", "after", "all", "also", "and", "any", "are", "because", "been", "but", "can",
    "could", "did", "does", "dont", "for", "from", "get", "had", "has", "have", "her", "him",
    "his", "how", "into", "its", "just", "like", "more", "most", "not", "now", "one", "only",
    "other", "our", "out", "over", "she", "should", "some", "than", "that", "the", "their",
    "them", "then", "there", "they", "this", "was", "were", "what", "when", "which", "who",
    "why", "will", "with", "would", "you", "your",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Frequency table over the analyzer's opaque body blob, for the word-list
/// rendering. Casing, punctuation, and stop-word policy live here, on the
/// presentation side.
pub fn top_words(blob: &str, limit: usize) -> Vec<WordCount> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for token in blob.split_whitespace() {
        let word: String = token
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        if word.chars().count() < 3 || STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(limit);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_orders_by_frequency() {
        let words = top_words("rust rust rust borrow borrow checker", 10);
        assert_eq!(
            words,
            vec![
                WordCount { word: "rust".to_string(), count: 3 },
                WordCount { word: "borrow".to_string(), count: 2 },
                WordCount { word: "checker".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_strips_punctuation_and_case() {
        let words = top_words("Rust! rust, RUST.", 10);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "rust");
        assert_eq!(words[0].count, 3);
    }

    #[test]
    fn test_drops_stop_words_and_short_tokens() {
        let words = top_words("the cat is in the hat", 10);
        let listed: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(listed, vec!["cat", "hat"]);
    }

    #[test]
    fn test_equal_counts_order_alphabetically() {
        let words = top_words("zebra apple mango", 10);
        let listed: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(listed, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_limit_is_respected() {
        let words = top_words("one two three four five six seven eight nine ten eleven", 3);
        assert_eq!(words.len(), 3);
    }
}
