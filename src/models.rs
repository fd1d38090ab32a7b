use serde::{Deserialize, Serialize};

/// Demand/competition bars shown on the analyze page. All 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub demand: u8,
    pub competition: u8,
    pub price_room: u8,
    pub saturation: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub title: String,
    pub tags: Vec<String>,    // exactly 5
    pub bullets: Vec<String>, // exactly 3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Premium {
    pub winning_keywords: Vec<String>, // 3-6
    pub optimized_title: String,
    pub listing_structure: Vec<String>, // 3-5
}

/// Free-tier analysis, built fresh per request from a seed. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockAnalysis {
    pub before_score: u8, // 30-70
    pub after_score: u8,  // >= before_score, <= 95
    pub diagnosis: String,
    pub micro_niches: [String; 3],
    pub best_micro: String, // one of micro_niches
    pub preview: Preview,
    pub breakdown: Breakdown,
    pub summary: String,
    pub why: String,
    pub blockers: Vec<String>, // 3-4
    pub actions: Vec<String>,  // 3-4
    pub premium: Premium,
}

/// Paid-tier listing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockListing {
    pub title: String,     // <= 140 chars
    pub tags: Vec<String>, // exactly 13, each <= 20 chars
    pub description: String,
    pub rationale: String, // 3-5 bullet lines
    pub before_score: u8,
    pub after_score: u8,
}

/// Transient scoring record; only lives during plan assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCandidate {
    pub term: String,
    pub intent_score: u8, // 0-100
    pub difficulty: f64,  // >= 1
    pub final_score: f64, // intent_score / difficulty
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordPlan {
    pub title_keywords: Vec<String>,   // <= 5
    pub tag_keywords: Vec<String>,     // exactly 13 after padding, each <= 20 chars
    pub niche_qualifiers: Vec<String>, // <= 6
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    Med,
    High,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub result_count: Option<u64>,
    pub level: CompetitionLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuartiles {
    pub p25: f64,
    pub p75: f64,
}

/// Everything derived from one round of external market data, merged into
/// the analyze response alongside the seeded analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub suggestions: Vec<String>,
    pub competition: Competition,
    pub price: Option<PriceStats>,
    pub keyword_plan: KeywordPlan,
}
