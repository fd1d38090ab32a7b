//! Input sanitization for keyword candidates plus price-text parsing for
//! scraped listing prices (e.g. "$12.34", "US$ 9.99", "\u{20ac}10,50").

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::models::{PriceQuartiles, PriceStats};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").unwrap());
static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\u{20ac}$\u{a3}]|US\s*\$?|USD|GBP|EUR").unwrap());
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").unwrap());
static PRICE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:US\s*\$?|USD|\u{20ac}|\u{a3}|\$)\s*[0-9,]+\.?[0-9]*|[0-9,]+\.?[0-9]*\s*(?:USD|EUR|GBP)?",
    )
    .unwrap()
});

/// Trim, collapse runs of whitespace, strip everything that is not a letter,
/// digit, or space, and cap at 80 chars.
pub fn sanitize_keyword(s: &str) -> String {
    let normalized: String = s.nfc().collect();
    let collapsed = WHITESPACE.replace_all(normalized.trim(), " ");
    let stripped = NON_WORD.replace_all(&collapsed, "");
    stripped.chars().take(80).collect()
}

/// Normalize a search query: lower, trim, collapse spaces, limit 80 chars.
/// Safe as a cache key and for URL encoding.
pub fn normalize_query(q: &str) -> String {
    let collapsed = WHITESPACE.replace_all(q.trim(), " ");
    collapsed.to_lowercase().chars().take(80).collect()
}

/// Parse a price string to a number; `None` if not parseable.
pub fn parse_price(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let no_ws = WHITESPACE.replace_all(text, "");
    let no_currency = CURRENCY.replace_all(&no_ws, "");
    let normalized = no_currency.replacen(',', ".", 1);
    let m = NUMBER.find(&normalized)?;
    let n: f64 = m.as_str().parse().ok()?;
    n.is_finite().then_some(n)
}

/// All price-like numbers in a blob (e.g. "From $9.99 to $24.99").
pub fn extract_prices(text: &str) -> Vec<f64> {
    PRICE_LIKE
        .find_iter(text)
        .filter_map(|m| parse_price(m.as_str()))
        .filter(|&n| n > 0.0 && n < 1e6)
        .collect()
}

pub fn price_stats(prices: &[f64]) -> Option<PriceStats> {
    if prices.is_empty() {
        return None;
    }
    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    Some(PriceStats { min, max, median, mean })
}

pub fn price_quartiles(prices: &[f64]) -> Option<PriceQuartiles> {
    if prices.len() < 2 {
        return None;
    }
    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let p25 = sorted[(sorted.len() as f64 * 0.25) as usize];
    let p75 = sorted[(sorted.len() as f64 * 0.75) as usize];
    Some(PriceQuartiles { p25, p75 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_punctuation_and_caps() {
        assert_eq!(sanitize_keyword("  custom   pet-mug!  "), "custom petmug");
        assert_eq!(sanitize_keyword("caf\u{e9} art"), "caf\u{e9} art");
        let long = "x".repeat(200);
        assert_eq!(sanitize_keyword(&long).chars().count(), 80);
    }

    #[test]
    fn normalize_query_lowers_and_collapses() {
        assert_eq!(normalize_query("  Custom   PET Mug "), "custom pet mug");
    }

    #[test]
    fn parses_common_price_formats() {
        assert_eq!(parse_price("$12.34"), Some(12.34));
        assert_eq!(parse_price("US$ 9.99"), Some(9.99));
        assert_eq!(parse_price("\u{20ac}10,50"), Some(10.50));
        assert_eq!(parse_price("no price here"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn extracts_multiple_prices() {
        let ps = extract_prices("From $9.99 to $24.99");
        assert!(ps.contains(&9.99));
        assert!(ps.contains(&24.99));
    }

    #[test]
    fn stats_on_empty_is_none() {
        assert!(price_stats(&[]).is_none());
        assert!(price_quartiles(&[5.0]).is_none());
    }

    #[test]
    fn even_length_median_is_middle_mean() {
        let s = price_stats(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(s.median, 25.0);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 40.0);
        assert_eq!(s.mean, 25.0);
    }
}
