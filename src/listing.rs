//! Paid-tier listing generator: title, exactly 13 tags, description with a
//! fixed "How to order" block, and a short rationale. Seeded like the
//! analysis generator.

use std::collections::HashSet;

use tracing::debug;

use crate::analysis::synth_scores;
use crate::models::MockListing;
use crate::pools;
use crate::seeded::SeededStream;

/// Etsy's hard cap per tag.
pub const TAG_MAX_LEN: usize = 20;
/// Etsy's tag slot count; the tags list always has exactly this many.
pub const TAG_COUNT: usize = 13;
/// Etsy's title cap.
pub const TITLE_MAX_LEN: usize = 140;

/// Cut at `max` chars, dropping one extra char and trailing whitespace so a
/// cut never ends in a dangling space.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    cut.trim_end().to_string()
}

pub fn generate_mock_listing(seed: &str) -> MockListing {
    let mut rand = SeededStream::from_str(seed);

    let (before_score, after_score) = synth_scores(&mut rand);

    let title_raw = format!(
        "{} {} {}",
        rand.pick(pools::TITLE_STARTS),
        rand.pick(pools::TITLE_MIDDLES),
        rand.pick(pools::TITLE_ENDS)
    );
    let title = truncate(&title_raw, TITLE_MAX_LEN);

    let shuffled = rand.sample(pools::TAG_POOL, pools::TAG_POOL.len());
    let mut tags: Vec<String> = Vec::with_capacity(TAG_COUNT);
    let mut seen: HashSet<String> = HashSet::new();
    let mut i = 0;
    while tags.len() < TAG_COUNT && i < pools::TAG_POOL.len() * 2 {
        let t = truncate(shuffled[i % shuffled.len()], TAG_MAX_LEN);
        if t.chars().count() >= 2 && seen.insert(t.to_lowercase()) {
            tags.push(t);
        }
        i += 1;
    }
    // pool exhausted before 13 uniques: synthesize filler tags
    while tags.len() < TAG_COUNT {
        let t = truncate(&format!("tag{}", rand.base36(8)), TAG_MAX_LEN);
        if seen.insert(t.to_lowercase()) {
            tags.push(t);
        }
    }

    let word_target = rand.pick_range(120, 101) as usize;
    let sentence_count = pools::SENTENCES.len().min((word_target / 18).max(6));
    let picked = rand.sample(pools::SENTENCES, sentence_count);
    let main_block = picked.join(" ");
    let how_to_block = pools::HOW_TO_ORDER
        .iter()
        .map(|line| format!("\u{2022} {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    let description = format!("{main_block}\n\nHow to order:\n{how_to_block}");

    let n_bullets = rand.pick_range(3, 3) as usize;
    let rationale = rand
        .sample(pools::RATIONALE, n_bullets)
        .into_iter()
        .map(|b| format!("\u{2022} {b}"))
        .collect::<Vec<_>>()
        .join("\n");

    debug!(
        "listing generated - title_len={}, tags={}, before={}, after={}",
        title.chars().count(),
        tags.len(),
        before_score,
        after_score
    );

    MockListing {
        title,
        tags,
        description,
        rationale,
        before_score,
        after_score,
    }
}
