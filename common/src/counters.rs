//! Count-up animations and number formatting for the stat counters.

use num_format::{CustomFormat, Grouping, Locale, ToFormattedString};

/// Duration of a count-up animation in milliseconds.
pub const COUNT_UP_MS: f64 = 2000.0;

/// Ease-out quartic: fast start, slow landing.
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Value shown `elapsed_ms` into a count-up from `start` to `end`.
pub fn count_up(start: u64, end: u64, elapsed_ms: f64) -> u64 {
    if end <= start {
        return end;
    }
    let eased = ease_out_quart(elapsed_ms / COUNT_UP_MS);
    start + ((end - start) as f64 * eased).floor() as u64
}

/// Hero formatting: millions collapse to one decimal (`1M`, `2.4M`),
/// thousands get western grouping (`12,000`).
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000 {
        let millions = format!("{:.1}", value as f64 / 1_000_000.0);
        format!("{}M", millions.replace(".0", ""))
    } else {
        value.to_formatted_string(&Locale::en)
    }
}

/// Indian digit grouping (`24,00,000`) used by the metrics band.
pub fn format_indian(value: u64) -> String {
    match CustomFormat::builder()
        .grouping(Grouping::Indian)
        .separator(",")
        .build()
    {
        Ok(format) => value.to_formatted_string(&format),
        Err(err) => {
            log::warn!("indian number format unavailable: {}", err);
            value.to_formatted_string(&Locale::en)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_up_starts_at_start_and_lands_on_end() {
        assert_eq!(count_up(9_000, 12_000, 0.0), 9_000);
        assert_eq!(count_up(9_000, 12_000, COUNT_UP_MS), 12_000);
        assert_eq!(count_up(9_000, 12_000, COUNT_UP_MS * 3.0), 12_000);
        let halfway = count_up(0, 100, COUNT_UP_MS / 2.0);
        assert!(halfway > 50, "ease-out should be past the midpoint, got {halfway}");
    }

    #[test]
    fn compact_format_matches_the_hero_copy() {
        assert_eq!(format_compact(100), "100");
        assert_eq!(format_compact(12_000), "12,000");
        assert_eq!(format_compact(1_000_000), "1M");
        assert_eq!(format_compact(2_400_000), "2.4M");
    }

    #[test]
    fn metrics_use_indian_grouping() {
        assert_eq!(format_indian(2_400_000), "24,00,000");
        assert_eq!(format_indian(12_000), "12,000");
        assert_eq!(format_indian(90), "90");
    }
}
