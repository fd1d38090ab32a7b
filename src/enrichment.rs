//! Market-data enrichment: everything derived from one round of externally
//! observed Etsy data (autocomplete suggestions, sample competitor titles
//! and prices, an approximate result count). The collaborator that fetches
//! that data lives outside this crate and hands it over as plain values;
//! empty lists and a missing count are legitimate inputs here.

use std::collections::HashSet;

use tracing::debug;

use crate::listing::{truncate, TAG_COUNT, TITLE_MAX_LEN};
use crate::models::{
    Breakdown, Competition, CompetitionLevel, MarketSnapshot, MockListing,
};
use crate::normalize::price_stats;
use crate::plan::build_keyword_plan;

/// One observation from the external search/autocomplete collaborator.
#[derive(Debug, Clone, Default)]
pub struct MarketObservation {
    pub suggestions: Vec<String>,
    pub sample_titles: Vec<String>,
    pub sample_prices: Vec<f64>,
    pub result_count: Option<u64>,
}

pub fn competition_level(result_count: Option<u64>) -> CompetitionLevel {
    match result_count {
        None => CompetitionLevel::Unknown,
        Some(rc) if rc < 5_000 => CompetitionLevel::Low,
        Some(rc) if rc < 25_000 => CompetitionLevel::Med,
        Some(_) => CompetitionLevel::High,
    }
}

/// Combine an observation with the keyword plan into the snapshot merged
/// into the analyze response.
pub fn build_market_snapshot(idea: &str, micro: &str, obs: &MarketObservation) -> MarketSnapshot {
    let keyword_plan = build_keyword_plan(
        idea,
        micro,
        &obs.suggestions,
        &obs.sample_titles,
        obs.result_count,
    );
    debug!(
        "market snapshot - suggestions={}, titles={}, result_count={:?}",
        obs.suggestions.len(),
        obs.sample_titles.len(),
        obs.result_count
    );
    MarketSnapshot {
        suggestions: obs.suggestions.clone(),
        competition: Competition {
            result_count: obs.result_count,
            level: competition_level(obs.result_count),
        },
        price: price_stats(&obs.sample_prices),
        keyword_plan,
    }
}

fn clamp_signal(n: f64) -> u8 {
    n.round().clamp(0.0, 100.0) as u8
}

/// Etsy-driven 0-100 bars for the analyze page; only applied when a
/// snapshot exists, otherwise the seeded breakdown stands.
pub fn breakdown_signals(snapshot: &MarketSnapshot) -> Breakdown {
    let rc = snapshot.competition.result_count.unwrap_or(0) as f64;
    let competition_signal = ((rc + 10.0).log10() / 6.0).min(1.0);
    let competition = clamp_signal(competition_signal * 100.0);

    let saturation_signal = match snapshot.competition.level {
        CompetitionLevel::Low => 0.2,
        CompetitionLevel::Med => 0.5,
        _ => 0.8,
    };
    let saturation = clamp_signal(saturation_signal * 100.0);

    let mut price_room = 50u8;
    if let Some(price) = &snapshot.price {
        let spread = if price.median > 0.0 {
            (price.max - price.min) / price.median
        } else {
            0.0
        };
        let median_reasonable = price.median >= 5.0 && price.median <= 2_000.0;
        if median_reasonable && (0.2..=1.5).contains(&spread) {
            price_room = clamp_signal(55.0 + spread * 20.0);
        } else if median_reasonable {
            price_room = clamp_signal(40.0 + spread * 5.0);
        }
    }

    let tags = &snapshot.keyword_plan.tag_keywords;
    let long_tail_share = tags
        .iter()
        .filter(|t| t.split_whitespace().count() >= 2)
        .count() as f64
        / tags.len().max(1) as f64;
    let demand_signal = if snapshot.suggestions.len() >= 8 && long_tail_share >= 0.35 {
        0.75
    } else if snapshot.suggestions.len() >= 3 {
        0.55
    } else {
        0.4
    };
    let demand = clamp_signal(demand_signal * 100.0);

    Breakdown { demand, competition, price_room, saturation }
}

// Title keywords leading with these add nothing when prefixed to a
// generator title that already opens the same way.
const GENERIC_TITLE_STARTS: &[&str] = &["handmade", "collection"];

/// Fold a keyword plan into a seeded listing: prefix the title with up to
/// two plan keywords it does not already contain (capped at 140 chars) and
/// swap in the plan's tags, padded from the generator's own tags back to
/// exactly 13.
pub fn merge_plan_into_listing(listing: &MockListing, snapshot: &MarketSnapshot) -> MockListing {
    let plan = &snapshot.keyword_plan;

    let non_generic: Vec<&String> = plan
        .title_keywords
        .iter()
        .filter(|kw| {
            let first = kw.split_whitespace().next().unwrap_or("").to_lowercase();
            !GENERIC_TITLE_STARTS.contains(&first.as_str())
        })
        .collect();
    let pool: Vec<&String> = if non_generic.len() >= 2 {
        non_generic
    } else {
        plan.title_keywords.iter().collect()
    };
    let title_lower = listing.title.to_lowercase();
    let prefix = pool
        .into_iter()
        .take(2)
        .filter(|kw| !kw.trim().is_empty() && !title_lower.contains(&kw.trim().to_lowercase()))
        .map(|kw| kw.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let title = if prefix.is_empty() {
        listing.title.clone()
    } else {
        let joined = format!("{prefix} {}", listing.title);
        let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
        truncate(&collapsed, TITLE_MAX_LEN)
    };

    let mut tags: Vec<String> = Vec::with_capacity(TAG_COUNT);
    let mut seen: HashSet<String> = HashSet::new();
    for t in plan.tag_keywords.iter().chain(listing.tags.iter()) {
        if tags.len() >= TAG_COUNT {
            break;
        }
        if seen.insert(t.to_lowercase()) {
            tags.push(t.clone());
        }
    }

    MockListing {
        title,
        tags,
        description: listing.description.clone(),
        rationale: listing.rationale.clone(),
        before_score: listing.before_score,
        after_score: listing.after_score,
    }
}
