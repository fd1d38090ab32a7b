use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use rankonetsy::enrichment::{build_market_snapshot, merge_plan_into_listing, MarketObservation};
use rankonetsy::render::{render_analysis_text, render_listing_text, render_seo_notes};
use rankonetsy::{generate_mock_analysis, generate_mock_listing};

/// RankOnEtsy listing core - deterministic analysis/listing generation and
/// keyword planning from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Render human-readable text instead of JSON
    #[arg(long, global = true)]
    text: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the free-tier analysis for a seed (uid|idea|micro)
    Analyze {
        /// Seed string; identical seeds reproduce identical output
        seed: String,
    },
    /// Generate the paid-tier listing for a seed, optionally folding in a
    /// keyword plan built from market data
    Listing {
        /// Seed string; identical seeds reproduce identical output
        seed: String,
        /// Product idea, enables the keyword-plan merge
        #[arg(long)]
        idea: Option<String>,
        /// Micro-niche used for keyword targeting
        #[arg(long, default_value = "")]
        micro: String,
        /// Autocomplete suggestion, most relevant first (repeatable)
        #[arg(long = "suggestion")]
        suggestions: Vec<String>,
        /// Sample competitor listing title (repeatable)
        #[arg(long = "sample-title")]
        sample_titles: Vec<String>,
        /// Approximate competing-listing count
        #[arg(long)]
        result_count: Option<u64>,
    },
    /// Build a market snapshot (keyword plan + competition + price bars)
    Plan {
        /// Product idea free text
        idea: String,
        /// Micro-niche used for keyword targeting
        #[arg(long, default_value = "")]
        micro: String,
        /// Autocomplete suggestion, most relevant first (repeatable)
        #[arg(long = "suggestion")]
        suggestions: Vec<String>,
        /// Sample competitor listing title (repeatable)
        #[arg(long = "sample-title")]
        sample_titles: Vec<String>,
        /// Sample competitor price (repeatable)
        #[arg(long = "sample-price")]
        sample_prices: Vec<f64>,
        /// Approximate competing-listing count
        #[arg(long)]
        result_count: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    let args = Args::parse();
    info!("Starting rankonetsy");

    match args.command {
        Command::Analyze { seed } => {
            debug!("analyze - seed_len={}", seed.chars().count());
            let analysis = generate_mock_analysis(&seed);
            if args.text {
                print!("{}", render_analysis_text(&analysis));
            } else {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            }
        }
        Command::Listing {
            seed,
            idea,
            micro,
            suggestions,
            sample_titles,
            result_count,
        } => {
            let mut listing = generate_mock_listing(&seed);
            if let Some(idea) = idea {
                let obs = MarketObservation {
                    suggestions,
                    sample_titles,
                    sample_prices: vec![],
                    result_count,
                };
                let snapshot = build_market_snapshot(&idea, &micro, &obs);
                listing = merge_plan_into_listing(&listing, &snapshot);
                if let Some(notes) = render_seo_notes(&snapshot) {
                    info!("seo notes:\n{notes}");
                }
            }
            if args.text {
                print!("{}", render_listing_text(&listing));
            } else {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
        }
        Command::Plan {
            idea,
            micro,
            suggestions,
            sample_titles,
            sample_prices,
            result_count,
        } => {
            let obs = MarketObservation {
                suggestions,
                sample_titles,
                sample_prices,
                result_count,
            };
            let snapshot = build_market_snapshot(&idea, &micro, &obs);
            if args.text {
                match render_seo_notes(&snapshot) {
                    Some(notes) => println!("{notes}"),
                    None => println!("(no market signals)"),
                }
                println!("\nTags:");
                for t in &snapshot.keyword_plan.tag_keywords {
                    println!("- {t}");
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
        }
    }

    Ok(())
}
