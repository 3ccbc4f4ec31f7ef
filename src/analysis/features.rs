//! Lexical feature extraction.

/// Lightweight signals computed from the raw review text.
///
/// Derived per request; never stored independently of a prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFeatures {
    /// Character count of the text.
    pub length: usize,
    pub exclamation_count: usize,
    pub question_count: usize,
    /// Uppercase characters over total characters, in [0, 1].
    pub uppercase_ratio: f64,
}

/// Compute [`TextFeatures`] for a text. Pure.
pub fn extract(text: &str) -> TextFeatures {
    let length = text.chars().count();
    let uppercase = text.chars().filter(|c| c.is_uppercase()).count();
    TextFeatures {
        length,
        exclamation_count: text.chars().filter(|&c| c == '!').count(),
        question_count: text.chars().filter(|&c| c == '?').count(),
        // max(1) guards the division for empty text, which validation
        // rejects upstream anyway.
        uppercase_ratio: uppercase as f64 / length.max(1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_punctuation_and_length() {
        let features = extract("Wow!! Really?");
        assert_eq!(features.length, 13);
        assert_eq!(features.exclamation_count, 2);
        assert_eq!(features.question_count, 1);
    }

    #[test]
    fn uppercase_ratio_in_range() {
        let features = extract("ABcd");
        assert!((features.uppercase_ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_text_does_not_divide_by_zero() {
        let features = extract("");
        assert_eq!(features.length, 0);
        assert_eq!(features.uppercase_ratio, 0.0);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(extract("héllo").length, 5);
    }
}
