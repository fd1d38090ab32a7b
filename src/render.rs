use crate::models::{CompetitionLevel, MarketSnapshot, MockAnalysis, MockListing};

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Seller-facing SEO notes bullets; `None` when the snapshot has nothing
/// worth saying.
pub fn render_seo_notes(snapshot: &MarketSnapshot) -> Option<String> {
    let mut bullets: Vec<String> = Vec::new();

    if let Some(rc) = snapshot.competition.result_count {
        let tier = match snapshot.competition.level {
            CompetitionLevel::Low => "Low",
            CompetitionLevel::Med => "Medium",
            CompetitionLevel::High => "High",
            CompetitionLevel::Unknown => "Unknown",
        };
        bullets.push(format!(
            "Competition: {} (~{} listings)",
            tier,
            group_thousands(rc)
        ));
    }

    if let Some(price) = &snapshot.price {
        if price.median > 0.0 {
            let lo = (price.median * 0.85).max(0.0);
            let hi = price.median * 1.15;
            bullets.push(format!(
                "Suggested price band: ${:.0}\u{2013}${:.0} (median ${:.0})",
                lo, hi, price.median
            ));
        }
    }

    let phrases: Vec<&str> = snapshot
        .keyword_plan
        .title_keywords
        .iter()
        .take(3)
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    if !phrases.is_empty() {
        bullets.push(format!("Top phrases: {}", phrases.join(", ")));
    }

    if bullets.is_empty() { None } else { Some(bullets.join("\n")) }
}

pub fn render_listing_text(l: &MockListing) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", l.title));
    out.push_str(&format!(
        "\nScore: {} \u{2192} {}\n",
        l.before_score, l.after_score
    ));

    out.push_str("\nTags:\n");
    for t in &l.tags {
        out.push_str(&format!("- {t}\n"));
    }

    out.push_str("\nDescription:\n");
    out.push_str(&format!("{}\n", l.description.trim()));

    out.push_str("\nWhy this works:\n");
    out.push_str(&format!("{}\n", l.rationale.trim()));

    out
}

pub fn render_analysis_text(a: &MockAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Score: {} \u{2192} {}\n",
        a.before_score, a.after_score
    ));
    out.push_str(&format!("\n{}\n", a.diagnosis.trim()));

    out.push_str("\nMicro-niches:\n");
    for m in &a.micro_niches {
        let marker = if *m == a.best_micro { " (best fit)" } else { "" };
        out.push_str(&format!("- {m}{marker}\n"));
    }

    out.push_str(&format!("\nPreview title: {}\n", a.preview.title));
    out.push_str(&format!("Preview tags: {}\n", a.preview.tags.join(", ")));

    out.push_str("\nBreakdown:\n");
    out.push_str(&format!("- demand: {}\n", a.breakdown.demand));
    out.push_str(&format!("- competition: {}\n", a.breakdown.competition));
    out.push_str(&format!("- price room: {}\n", a.breakdown.price_room));
    out.push_str(&format!("- saturation: {}\n", a.breakdown.saturation));

    if !a.blockers.is_empty() {
        out.push_str("\nBlockers:\n");
        for b in &a.blockers {
            out.push_str(&format!("- {b}\n"));
        }
    }

    if !a.actions.is_empty() {
        out.push_str("\nNext actions:\n");
        for s in &a.actions {
            out.push_str(&format!("- {s}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::generate_mock_analysis;
    use crate::enrichment::{build_market_snapshot, MarketObservation};
    use crate::listing::generate_mock_listing;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12_000), "12,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn seo_notes_empty_snapshot_is_none_or_phrases_only() {
        let snap = build_market_snapshot("", "", &MarketObservation::default());
        // no count, no prices, no title keywords from empty input
        assert_eq!(render_seo_notes(&snap), None);
    }

    #[test]
    fn seo_notes_include_competition_tier() {
        let snap = build_market_snapshot(
            "custom pet portrait mugs",
            "pet mugs",
            &MarketObservation {
                result_count: Some(12_000),
                ..Default::default()
            },
        );
        let notes = render_seo_notes(&snap).unwrap();
        assert!(notes.contains("Competition: Medium (~12,000 listings)"), "{notes}");
    }

    #[test]
    fn listing_and_analysis_render_nonempty() {
        let l = generate_mock_listing("render|a|b");
        assert!(render_listing_text(&l).contains("Tags:"));
        let a = generate_mock_analysis("render|a|b");
        assert!(render_analysis_text(&a).contains("Micro-niches:"));
    }
}
