//! Keyword candidate extraction and heuristic intent scoring. Etsy tags are
//! capped at 20 chars; shortening substitutes text and never slices inside a
//! word (overlong candidates are dropped instead).

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::models::KeywordCandidate;
use crate::normalize::sanitize_keyword;

pub const ETSY_TAG_MAX_LEN: usize = 20;
pub const CANDIDATE_CAP: usize = 25;

/// First-word terms that signal buyer intent; phrases like "made to order"
/// match as a keyword prefix.
pub const HIGH_INTENT_TERMS: &[&str] = &[
    "personalized", "custom", "handmade", "gift", "printable", "made to order",
    "unique", "artisan",
];

/// Too broad to stand alone as a tag; allowed when paired (e.g. "gift for mom").
pub const GENERIC_ONLY: &[&str] = &[
    "etsy", "handmade", "unique", "gift", "modern", "minimalist", "wall art", "decor",
];

/// Keywords containing these count as recipient/occasion.
pub const RECIPIENT_OCCASION_TERMS: &[&str] = &[
    "mom", "mother", "dad", "father", "girlfriend", "boyfriend", "wife", "husband",
    "mothers day", "mother's day", "fathers day", "father's day", "birthday", "memorial",
    "wedding", "anniversary", "baby", "bridesmaid", "graduation", "christmas", "valentine",
];

/// Keywords containing these count as product-type.
pub const PRODUCT_TYPE_TERMS: &[&str] = &[
    "necklace", "pendant", "bracelet", "earring", "ring", "printable", "template",
    "sticker", "mug", "poster", "art", "print", "keychain", "coaster", "candle",
    "tumbler", "shirt", "hoodie", "blanket", "pillow", "ornament", "card", "invitation",
];

fn term_regex(term: &str) -> Regex {
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?i)\b{body}\b")).unwrap()
}

static RECIPIENT_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    RECIPIENT_OCCASION_TERMS.iter().map(|t| (*t, term_regex(t))).collect()
});
static PRODUCT_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PRODUCT_TYPE_TERMS.iter().map(|t| (*t, term_regex(t))).collect()
});
static CANDIDATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9\s]+$").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SUB_PERSONALIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpersonalized\b").unwrap());
static SUB_MOTHERS_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmothers\s+day\b").unwrap());
static SUB_MOTHERS_DAY_APOS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmother's\s+day\b").unwrap());
static SUB_PRINTABLE_TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bprintable\s+template\b").unwrap());
static SUB_STOPWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(for|the|and|with)\b").unwrap());

pub fn first_word(keyword: &str) -> &str {
    keyword.split_whitespace().next().unwrap_or("")
}

/// First word of the keyword is a high-intent term (or the keyword leads
/// with the "made to order" phrase).
pub fn starts_high_intent(keyword: &str) -> bool {
    let k = keyword.to_lowercase();
    let first = first_word(&k);
    HIGH_INTENT_TERMS.contains(&first) || k.starts_with("made to order")
}

pub fn is_generic_only(keyword: &str) -> bool {
    let k = keyword.trim().to_lowercase();
    if GENERIC_ONLY.contains(&k.as_str()) {
        return true;
    }
    let mut words = k.split_whitespace();
    match (words.next(), words.next()) {
        (Some(w), None) => GENERIC_ONLY.contains(&w),
        _ => false,
    }
}

pub fn is_recipient_occasion(keyword: &str) -> bool {
    RECIPIENT_RES.iter().any(|(_, re)| re.is_match(keyword))
}

pub fn is_product_type(keyword: &str) -> bool {
    PRODUCT_RES.iter().any(|(_, re)| re.is_match(keyword))
}

/// First recipient/occasion term matching anywhere in `text`, in table order.
pub fn first_recipient_term(text: &str) -> Option<&'static str> {
    RECIPIENT_RES.iter().find(|(_, re)| re.is_match(text)).map(|(t, _)| *t)
}

/// First product-type term matching anywhere in `text`, in table order.
pub fn first_product_term(text: &str) -> Option<&'static str> {
    PRODUCT_RES.iter().find(|(_, re)| re.is_match(text)).map(|(t, _)| *t)
}

/// Keep a tag as-is when it fits; otherwise shorten by textual substitution
/// and stopword removal. `None` when still over the cap: the candidate is
/// unusable as a tag and must be dropped, never mid-word truncated.
pub fn shorten_tag(tag: &str) -> Option<String> {
    let t = WHITESPACE.replace_all(tag.trim(), " ").into_owned();
    if t.chars().count() <= ETSY_TAG_MAX_LEN {
        return Some(t);
    }
    let t = SUB_PERSONALIZED.replace_all(&t, "custom");
    let t = SUB_MOTHERS_DAY.replace_all(&t, "mother day");
    let t = SUB_MOTHERS_DAY_APOS.replace_all(&t, "mother day");
    let t = SUB_PRINTABLE_TEMPLATE.replace_all(&t, "template");
    let t = SUB_STOPWORDS.replace_all(&t, " ");
    let t = WHITESPACE.replace_all(t.trim(), " ").into_owned();
    (t.chars().count() <= ETSY_TAG_MAX_LEN).then_some(t)
}

/// Higher competitor result count suppresses final scores; always >= 1.
pub fn compute_difficulty(result_count: Option<u64>) -> f64 {
    match result_count {
        Some(rc) if rc > 0 => (rc as f64 + 10.0).log10(),
        _ => 1.0,
    }
}

pub struct ScoreSignals {
    /// Rank among autocomplete suggestions, if the keyword appears there.
    pub suggestion_position: Option<usize>,
    /// How many sample competitor titles contain the keyword as a substring.
    pub appears_in_titles: usize,
    pub result_count: Option<u64>,
}

/// Heuristic buyer-intent score in [0, 100].
pub fn score_keyword(keyword: &str, signals: &ScoreSignals) -> u8 {
    let mut score: f64 = 50.0;
    if let Some(pos) = signals.suggestion_position {
        if pos < 20 {
            score += 15.0 - pos as f64 * 0.5;
        }
    }
    score += (signals.appears_in_titles as f64 * 3.0).min(15.0);
    let word_count = keyword.split_whitespace().count();
    if (2..=4).contains(&word_count) {
        score += 10.0;
    }
    if starts_high_intent(keyword) {
        score += 12.0;
    }
    match signals.result_count {
        Some(rc) if rc < 5_000 => score += 10.0, // low competition
        Some(rc) if rc > 50_000 => score -= 10.0, // oversaturated
        _ => {}
    }
    let len = keyword.chars().count();
    if (15..=35).contains(&len) {
        score += 5.0; // sweet spot for buyer-search phrasing
    }
    score.round().clamp(0.0, 100.0) as u8
}

/// Candidate set: micro itself, idea words (>= 3 chars), every suggestion,
/// and 2..4-grams of each sample title. Deduped case-insensitively in
/// first-found order, filtered to plausible tag shapes, capped at 25.
pub fn build_keyword_candidates(
    idea: &str,
    micro: &str,
    suggestions: &[String],
    sample_titles: &[String],
) -> Vec<String> {
    let mut raw: Vec<String> = Vec::new();

    let mut add = |s: &str| {
        let t = sanitize_keyword(s).to_lowercase();
        let len = t.chars().count();
        if (2..=80).contains(&len) {
            raw.push(t);
        }
    };

    add(micro);
    for w in idea.split_whitespace().filter(|w| w.chars().count() >= 3) {
        add(w);
    }
    for s in suggestions {
        add(s);
    }
    for title in sample_titles {
        let words: Vec<&str> = title
            .split_whitespace()
            .filter(|w| w.chars().count() >= 2)
            .collect();
        for n in 2..=4usize {
            for gram in words.windows(n) {
                add(&gram.join(" "));
            }
        }
    }

    raw.into_iter()
        .unique()
        .filter(|c| {
            let words = c.split_whitespace().count();
            let len = c.chars().count();
            (1..=6).contains(&words)
                && (10..=40).contains(&len)
                && CANDIDATE_SHAPE.is_match(c)
        })
        .take(CANDIDATE_CAP)
        .collect()
}

/// Score every non-generic candidate. `final_score = intent / difficulty`
/// is the universal sort key downstream.
pub fn score_candidates(
    raw_candidates: &[String],
    suggestions: &[String],
    sample_titles: &[String],
    result_count: Option<u64>,
) -> Vec<KeywordCandidate> {
    let difficulty = compute_difficulty(result_count);
    let suggestions_lower: Vec<String> =
        suggestions.iter().map(|s| s.to_lowercase()).collect();
    let titles_lower: Vec<String> =
        sample_titles.iter().map(|t| t.to_lowercase()).collect();

    raw_candidates
        .iter()
        .filter(|c| !is_generic_only(c))
        .map(|keyword| {
            let suggestion_position =
                suggestions_lower.iter().position(|s| s == keyword);
            let appears_in_titles =
                titles_lower.iter().filter(|t| t.contains(keyword.as_str())).count();
            let intent_score = score_keyword(
                keyword,
                &ScoreSignals {
                    suggestion_position,
                    appears_in_titles,
                    result_count,
                },
            );
            KeywordCandidate {
                term: keyword.clone(),
                intent_score,
                difficulty,
                final_score: intent_score as f64 / difficulty,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_only_blocks_standalone_terms() {
        assert!(is_generic_only("gift"));
        assert!(is_generic_only("  Handmade "));
        assert!(is_generic_only("wall art"));
        assert!(!is_generic_only("gift for mom"));
        assert!(!is_generic_only("custom pet mug"));
    }

    #[test]
    fn shorten_keeps_short_tags_unchanged() {
        assert_eq!(shorten_tag("custom pet mug"), Some("custom pet mug".into()));
        assert_eq!(shorten_tag("  spaced   out  "), Some("spaced out".into()));
    }

    #[test]
    fn shorten_substitutes_then_checks_length() {
        // "custom dog portrait mug" is still 23 chars and has no
        // removable stopwords, so the candidate is dropped
        assert_eq!(shorten_tag("personalized dog portrait mug"), None);
        // substitution brings it under the cap
        assert_eq!(
            shorten_tag("personalized mug gift"),
            Some("custom mug gift".into())
        );
        // substitution + stopword removal still leaves 23 chars: dropped
        assert_eq!(shorten_tag("mothers day gift for grandma"), None);
        assert_eq!(
            shorten_tag("mother's day mug gift"),
            Some("mother day mug gift".into())
        );
    }

    #[test]
    fn shorten_never_truncates_mid_word() {
        // 25 chars, nothing substitutable: must be dropped, not sliced
        let c = "weatherproof outdoorsware";
        assert_eq!(c.chars().count(), 25);
        assert_eq!(shorten_tag(c), None);
    }

    #[test]
    fn difficulty_floor_is_one() {
        assert_eq!(compute_difficulty(None), 1.0);
        assert_eq!(compute_difficulty(Some(0)), 1.0);
        assert!(compute_difficulty(Some(3_000)) > 1.0);
        assert!((compute_difficulty(Some(990)) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn score_rewards_intent_signals() {
        let base = score_keyword(
            "blue widget",
            &ScoreSignals { suggestion_position: None, appears_in_titles: 0, result_count: None },
        );
        let boosted = score_keyword(
            "custom pet portrait",
            &ScoreSignals {
                suggestion_position: Some(0),
                appears_in_titles: 3,
                result_count: Some(3_000),
            },
        );
        assert!(boosted > base);
        assert!(boosted <= 100);
    }

    #[test]
    fn oversaturation_penalizes() {
        let low = score_keyword(
            "dog portrait gift",
            &ScoreSignals { suggestion_position: None, appears_in_titles: 0, result_count: Some(1_000) },
        );
        let high = score_keyword(
            "dog portrait gift",
            &ScoreSignals { suggestion_position: None, appears_in_titles: 0, result_count: Some(100_000) },
        );
        assert!(low > high);
    }

    #[test]
    fn candidates_capped_and_shaped() {
        let titles: Vec<String> = (0..30)
            .map(|i| format!("Custom Pet Portrait Mug Gift Edition {i} Deluxe"))
            .collect();
        let cands = build_keyword_candidates("handmade ceramic mugs", "pet mugs", &[], &titles);
        assert!(cands.len() <= CANDIDATE_CAP);
        for c in &cands {
            let words = c.split_whitespace().count();
            assert!((1..=6).contains(&words), "{c:?}");
            let len = c.chars().count();
            assert!((10..=40).contains(&len), "{c:?}");
            assert!(c.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == ' '));
        }
    }

    #[test]
    fn candidates_dedupe_case_insensitive() {
        let cands = build_keyword_candidates(
            "",
            "Custom Pet Mug",
            &["custom pet mug".into(), "CUSTOM PET MUG".into()],
            &[],
        );
        assert_eq!(cands.iter().filter(|c| c.as_str() == "custom pet mug").count(), 1);
    }

    #[test]
    fn term_matching_uses_word_boundaries() {
        assert!(is_recipient_occasion("gift for mom"));
        assert!(!is_recipient_occasion("mommy blog graphic")); // "mom" not a word here
        assert!(is_product_type("ceramic mug set"));
        assert!(!is_product_type("smug slogan decal"));
    }

    #[test]
    fn first_term_resolution_scans_in_table_order() {
        assert_eq!(first_product_term("a mug and a necklace"), Some("necklace"));
        assert_eq!(first_recipient_term("wedding gift for mom"), Some("mom"));
        assert_eq!(first_product_term("nothing relevant"), None);
    }
}
