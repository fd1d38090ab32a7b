//! Keyword plan assembly: rank scored candidates, bucket them, and build the
//! exactly-13 tag set under the 20-char cap. Never fails; empty external
//! data degrades to filler templates and pool padding.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{KeywordCandidate, KeywordPlan};
use crate::pools;
use crate::score::{
    build_keyword_candidates, first_product_term, first_recipient_term, is_generic_only,
    is_product_type, is_recipient_occasion, score_candidates, shorten_tag,
    starts_high_intent, ETSY_TAG_MAX_LEN,
};

pub const PLAN_TAG_COUNT: usize = 13;
const MAX_GIFT_FOR: usize = 2;
const MAX_MOTHER_DAY: usize = 1;
const MAX_NECKLACE: usize = 2;

fn word_count(t: &str) -> usize {
    t.split_whitespace().count()
}

/// Product-type filler term: search the combined idea+micro text, then the
/// candidate pool, then fall back to the micro's last word, then "gift".
fn resolve_product_term(combined: &str, candidates: &[String], micro: &str) -> String {
    if let Some(t) = first_product_term(combined) {
        return t.to_string();
    }
    if let Some(t) = candidates.iter().find_map(|c| first_product_term(c)) {
        return t.to_string();
    }
    micro
        .split_whitespace()
        .filter(|w| w.chars().count() >= 2)
        .next_back()
        .map(|w| w.to_lowercase())
        .unwrap_or_else(|| "gift".to_string())
}

/// Recipient filler term, resolved the same way, defaulting to "her".
fn resolve_recipient_term(combined: &str, candidates: &[String]) -> String {
    first_recipient_term(combined)
        .or_else(|| candidates.iter().find_map(|c| first_recipient_term(c)))
        .unwrap_or("her")
        .to_string()
}

struct TagSet {
    tags: Vec<String>,
    used: HashSet<String>,
}

impl TagSet {
    fn new() -> Self {
        Self { tags: Vec::with_capacity(PLAN_TAG_COUNT), used: HashSet::new() }
    }

    fn full(&self) -> bool {
        self.tags.len() >= PLAN_TAG_COUNT
    }

    fn push(&mut self, tag: String) -> bool {
        if self.used.insert(tag.to_lowercase()) {
            self.tags.push(tag);
            true
        } else {
            false
        }
    }

    fn take_from_bucket(&mut self, bucket: &[&KeywordCandidate], max: usize) {
        let mut n = 0;
        for c in bucket {
            if n >= max || self.full() {
                break;
            }
            let Some(t) = shorten_tag(&c.term) else { continue };
            if t.chars().count() < 2 || is_generic_only(&c.term) {
                continue;
            }
            if self.push(t) {
                n += 1;
            }
        }
    }
}

/// At most 2 "gift for ..." tags, 1 "mother(')s day ..." tag, and 2
/// "necklace..." tags; the fill stages can otherwise crowd the set with one
/// phrase family. Applied in tag order, case-insensitive.
fn apply_diversity_guard(tags: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(tags.len());
    let (mut gift_for, mut mother_day, mut necklace) = (0usize, 0usize, 0usize);
    for t in tags {
        let lower = t.trim().to_lowercase();
        let is_gift_for = lower.starts_with("gift for ");
        let is_mother_day =
            lower.starts_with("mother day") || lower.starts_with("mothers day") || lower.starts_with("mother's day");
        let is_necklace = lower.starts_with("necklace");
        if is_gift_for && gift_for >= MAX_GIFT_FOR {
            continue;
        }
        if is_mother_day && mother_day >= MAX_MOTHER_DAY {
            continue;
        }
        if is_necklace && necklace >= MAX_NECKLACE {
            continue;
        }
        gift_for += usize::from(is_gift_for);
        mother_day += usize::from(is_mother_day);
        necklace += usize::from(is_necklace);
        out.push(t);
    }
    out.truncate(PLAN_TAG_COUNT);
    out
}

pub fn build_keyword_plan(
    idea: &str,
    micro: &str,
    suggestions: &[String],
    sample_titles: &[String],
    result_count: Option<u64>,
) -> KeywordPlan {
    let raw_candidates = build_keyword_candidates(idea, micro, suggestions, sample_titles);
    let mut scored = score_candidates(&raw_candidates, suggestions, sample_titles, result_count);
    // stable: ties keep first-found candidate order
    scored.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

    let long_tail: Vec<&KeywordCandidate> =
        scored.iter().filter(|c| word_count(&c.term) >= 2).collect();
    let recipient_bucket: Vec<&KeywordCandidate> =
        scored.iter().filter(|c| is_recipient_occasion(&c.term)).collect();
    let product_bucket: Vec<&KeywordCandidate> =
        scored.iter().filter(|c| is_product_type(&c.term)).collect();

    let title_keywords: Vec<String> = scored
        .iter()
        .filter(|c| word_count(&c.term) <= 3 && starts_high_intent(&c.term))
        .take(5)
        .map(|c| c.term.clone())
        .collect();

    let niche_qualifiers: Vec<String> = scored
        .iter()
        .filter(|c| word_count(&c.term) >= 3)
        .take(6)
        .map(|c| c.term.clone())
        .collect();

    let mut set = TagSet::new();
    set.take_from_bucket(&long_tail, 5);
    set.take_from_bucket(&recipient_bucket, 3);
    set.take_from_bucket(&product_bucket, 3);

    // backfill from the full score-sorted list; only raw terms already
    // within the tag cap qualify here
    for c in &scored {
        if set.full() {
            break;
        }
        if c.term.chars().count() > ETSY_TAG_MAX_LEN {
            continue;
        }
        if let Some(t) = shorten_tag(&c.term) {
            if t.chars().count() >= 2 {
                set.push(t);
            }
        }
    }

    let combined = format!("{micro} {idea}");
    let product_term = resolve_product_term(&combined, &raw_candidates, micro);
    let recipient_term = resolve_recipient_term(&combined, &raw_candidates);
    debug!(
        "filler terms resolved - product={}, recipient={}",
        product_term, recipient_term
    );

    let filler_templates: Vec<String> = vec![
        format!("custom {product_term}"),
        format!("{product_term} gift"),
        "gift for mom".to_string(),
        "gift for her".to_string(),
        "gift for him".to_string(),
        format!("{} gift", micro.trim()),
        "mother day gift".to_string(),
    ];

    while !set.full() {
        let mut added = false;
        for raw in &filler_templates {
            if set.full() {
                break;
            }
            let Some(t) = shorten_tag(raw) else { continue };
            if t.chars().count() < 2 || is_generic_only(&t) || set.used.contains(&t.to_lowercase()) {
                continue;
            }
            set.push(t);
            added = true;
            break;
        }
        if !added {
            break;
        }
    }

    let mut tag_keywords = apply_diversity_guard(set.tags);

    // templates alone cannot always reach 13 (degenerate inputs, guard
    // drops); pad from the fixed tag pool, which holds enough non-generic
    // entries to close any shortfall
    if tag_keywords.len() < PLAN_TAG_COUNT {
        let mut used: HashSet<String> =
            tag_keywords.iter().map(|t| t.to_lowercase()).collect();
        for entry in pools::TAG_POOL {
            if tag_keywords.len() >= PLAN_TAG_COUNT {
                break;
            }
            if is_generic_only(entry) || entry.chars().count() < 2 {
                continue;
            }
            if used.insert(entry.to_lowercase()) {
                tag_keywords.push(entry.to_string());
            }
        }
    }

    debug!(
        "tag plan assembled - tags={}, candidates={}, title_kws={}, niche={}",
        tag_keywords.len(),
        scored.len(),
        title_keywords.len(),
        niche_qualifiers.len()
    );

    KeywordPlan { title_keywords, tag_keywords, niche_qualifiers }
}
