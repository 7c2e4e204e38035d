//! Per-subject horizontal bar chart.
//!
//! Fills are emitted at `width: 0%`; the adapter animates each fill to
//! its entry in [`bar_targets`] on the second animation frame after
//! injection so the CSS transition registers instead of jumping.

use super::{escape_html, format_score};
use crate::model::SubjectAverages;

/// Known subjects keep their own color; anything else reuses the Math
/// style rather than failing.
fn bar_class(subject: &str) -> &'static str {
    match subject {
        "Math" => "bar-math",
        "Science" => "bar-science",
        "English" => "bar-english",
        "History" => "bar-history",
        "Geography" => "bar-geography",
        _ => "bar-math",
    }
}

/// One labeled bar row per entry, in document order.
pub fn subject_bars(averages: &SubjectAverages) -> String {
    let mut out = String::new();
    for (subject, avg) in averages.iter() {
        out.push_str(&format!(
            concat!(
                "<div class=\"subject-bar-row\">",
                "<span class=\"subject-bar-label\">{label}</span>",
                "<div class=\"subject-bar-track\">",
                "<div class=\"subject-bar-fill {class}\" style=\"width: 0%\">{value}%</div>",
                "</div>",
                "</div>"
            ),
            label = escape_html(subject),
            class = bar_class(subject),
            value = format_score(avg),
        ));
    }
    out
}

/// Target fill widths in the same order as the emitted rows, clamped
/// to [0, 100].
pub fn bar_targets(averages: &SubjectAverages) -> Vec<f64> {
    averages.iter().map(|(_, avg)| avg.clamp(0.0, 100.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // SUBJECT BAR TESTS
    // ==========================================================================

    #[test]
    fn test_one_row_per_subject_in_order() {
        let averages = SubjectAverages::from([("Math", 64.2), ("Science", 81.0)]);
        let html = subject_bars(&averages);

        assert_eq!(html.matches("subject-bar-row").count(), 2);
        let math_at = html.find("Math").unwrap();
        let science_at = html.find("Science").unwrap();
        assert!(math_at < science_at, "rows must follow document order");
    }

    #[test]
    fn test_fills_start_at_zero_width() {
        let averages = SubjectAverages::from([("Math", 64.2)]);
        let html = subject_bars(&averages);

        assert!(html.contains("style=\"width: 0%\""));
        assert!(html.contains("bar-math"));
        assert!(html.contains(">64.2%<"));
    }

    #[test]
    fn test_unknown_subject_uses_fallback_class() {
        let averages = SubjectAverages::from([("Astronomy", 88.0)]);
        let html = subject_bars(&averages);

        assert!(html.contains("bar-math"));
        assert!(html.contains("Astronomy"));
    }

    #[test]
    fn test_targets_are_clamped() {
        let averages = SubjectAverages::from([("Math", 104.5), ("Science", -3.0), ("English", 55.0)]);
        assert_eq!(bar_targets(&averages), vec![100.0, 0.0, 55.0]);
    }

    #[test]
    fn test_empty_map_renders_nothing() {
        let averages = SubjectAverages::default();
        assert!(subject_bars(&averages).is_empty());
        assert!(bar_targets(&averages).is_empty());
    }
}
