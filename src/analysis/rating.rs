//! Sentiment banding and star-rating derivation.
//!
//! Both functions are pure and total. Rounding is half-to-even
//! throughout, matching the behavior the rating thresholds were tuned
//! against; half-up would shift ratings in the half-integer adjustment
//! cases.

use super::features::TextFeatures;
use crate::types::Sentiment;

/// Map a unified 0-1 score onto a sentiment category.
///
/// The neutral band is inclusive on both ends: 0.4 and 0.6 are neutral.
pub fn band(score: f64) -> Sentiment {
    if score < 0.4 {
        Sentiment::Negative
    } else if score <= 0.6 {
        Sentiment::Neutral
    } else {
        Sentiment::Positive
    }
}

/// Unified score as an integer percentage.
pub fn score_percent(score: f64) -> u8 {
    (score * 100.0).round_ties_even() as u8
}

/// Derive a 1-5 star rating from the unified score and lexical features.
///
/// Base is `1 + floor(score * 4)` (truncation, not rounding). Heavy
/// exclamation use amplifies the existing polarity; long text nudges the
/// rating up regardless of polarity (an accepted asymmetry); heavy
/// uppercase amplifies polarity. The adjusted value is rounded
/// half-to-even and clamped to 1-5.
pub fn rate(score: f64, features: &TextFeatures) -> u8 {
    let base = 1 + (score * 4.0).trunc() as i32;

    let mut adjustment = 0.0_f64;

    if features.exclamation_count > 3 {
        adjustment += if score > 0.5 { 0.5 } else { -0.5 };
    }

    if features.length > 200 {
        adjustment += 0.3;
    }

    if features.uppercase_ratio > 0.2 {
        adjustment += if score > 0.5 { 0.3 } else { -0.3 };
    }

    let rating = (base as f64 + adjustment).round_ties_even() as i32;
    rating.clamp(1, 5) as u8
}
