//! Keyword-overlap sentiment classifier for comment text.

/// Keywords that mark a comment as positive.
///
/// Entries are lowercase and matched as substrings of the lowercased text,
/// so multi-word entries like `"thank you"` match across word boundaries.
pub(crate) const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "great",
    "love",
    "amazing",
    "excellent",
    "awesome",
    "thanks",
    "thank you",
];

/// Keywords that mark a comment as negative.
pub(crate) const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "poor",
    "hate",
    "terrible",
    "awful",
    "worst",
    "disappointing",
];

/// Sentiment class assigned to a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Classify one comment text by keyword overlap.
///
/// Lowercases the text and counts how many keywords from each set occur as
/// a substring, each keyword at most once regardless of repetitions. More
/// positive hits than negative is positive, the reverse is negative, and a
/// tie (including zero hits on both sides) is neutral.
#[must_use]
pub fn classify(text: &str) -> Sentiment {
    let text = text.to_lowercase();
    let positive_hits = keyword_hits(&text, POSITIVE_KEYWORDS);
    let negative_hits = keyword_hits(&text, NEGATIVE_KEYWORDS);

    match positive_hits.cmp(&negative_hits) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

/// Counts the keywords that occur in `text` as a substring.
fn keyword_hits(text: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|&&keyword| text.contains(keyword))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_neutral() {
        assert_eq!(classify(""), Sentiment::Neutral);
    }

    #[test]
    fn unknown_text_is_neutral() {
        assert_eq!(classify("the quick brown fox"), Sentiment::Neutral);
    }

    #[test]
    fn positive_keyword_classifies_positive() {
        assert_eq!(classify("great video, thanks!"), Sentiment::Positive);
    }

    #[test]
    fn negative_keyword_classifies_negative() {
        assert_eq!(classify("the audio was terrible"), Sentiment::Negative);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("GREAT STUFF"), Sentiment::Positive);
        assert_eq!(classify("The Worst"), Sentiment::Negative);
    }

    #[test]
    fn equal_hits_tie_to_neutral() {
        // good (+1) vs bad (-1)
        assert_eq!(classify("good but bad"), Sentiment::Neutral);
        // love, thanks (+2) vs hate, awful (-2)
        assert_eq!(classify("love it, thanks, but I hate the awful intro"), Sentiment::Neutral);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        // "bad" once vs "good" three times still ties 1-1.
        assert_eq!(classify("good good good bad"), Sentiment::Neutral);
    }

    #[test]
    fn keywords_match_inside_larger_words() {
        // Substring matching is intentional: "badge" contains "bad".
        assert_eq!(classify("nice badge"), Sentiment::Negative);
        assert_eq!(classify("thanksgiving special"), Sentiment::Positive);
    }

    #[test]
    fn multi_word_keyword_matches() {
        assert_eq!(classify("thank you so much"), Sentiment::Positive);
    }
}
