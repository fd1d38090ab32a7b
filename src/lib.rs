pub mod analysis;
pub mod enrichment;
pub mod listing;
pub mod models;
pub mod normalize;
pub mod plan;
pub mod pools;
pub mod render;
pub mod score;
pub mod seeded;

pub use analysis::generate_mock_analysis;
pub use enrichment::{build_market_snapshot, merge_plan_into_listing, MarketObservation};
pub use listing::generate_mock_listing;
pub use models::{KeywordPlan, MarketSnapshot, MockAnalysis, MockListing};
pub use plan::build_keyword_plan;
