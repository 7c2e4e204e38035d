//! Narrative highlight cards.
//!
//! Four values come straight off the payload; the best and weakest
//! subject are the only statistics this layer derives itself. Both
//! reductions run fresh on every pass over `subjectAverages` with
//! seeds outside the valid 0-100 range, so any legitimate percentage
//! overrides them and ties go to the first subject in document order.

use super::{escape_html, format_score};
use crate::model::{AnalysisResult, SubjectAverages};

/// A client-derived subject highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedHighlight {
    pub name: String,
    pub average: f64,
}

/// Subject with the maximum average. Seeded below the valid range;
/// strict comparison keeps the first of any tied pair.
pub fn best_subject(averages: &SubjectAverages) -> DerivedHighlight {
    let mut best = DerivedHighlight { name: String::new(), average: -1.0 };
    for (name, avg) in averages.iter() {
        if avg > best.average {
            best = DerivedHighlight { name: name.to_string(), average: avg };
        }
    }
    best
}

/// Subject with the minimum average. Seeded above the valid range.
pub fn worst_subject(averages: &SubjectAverages) -> DerivedHighlight {
    let mut worst = DerivedHighlight { name: String::new(), average: 101.0 };
    for (name, avg) in averages.iter() {
        if avg < worst.average {
            worst = DerivedHighlight { name: name.to_string(), average: avg };
        }
    }
    worst
}

/// The five fixed highlight cards.
pub fn highlight_cards(result: &AnalysisResult) -> String {
    let best = best_subject(&result.subject_averages);
    let worst = worst_subject(&result.subject_averages);

    let cards = [
        (
            "\u{1F947}",
            "Highest Average".to_string(),
            escape_html(&result.highest_average.name),
            format!("{}%", format_score(result.highest_average.average)),
        ),
        (
            "\u{1F53B}",
            "Lowest Average".to_string(),
            escape_html(&result.lowest_average.name),
            format!("{}%", format_score(result.lowest_average.average)),
        ),
        (
            "\u{1F4CA}",
            "Class Average".to_string(),
            format!("{}%", format_score(result.class_average)),
            format!("Across {} students", result.total_students),
        ),
        (
            "\u{1F4D6}",
            "Best Subject".to_string(),
            escape_html(&best.name),
            format!("{}% class average", format_score(best.average)),
        ),
        (
            "\u{1F4C9}",
            "Weakest Subject".to_string(),
            escape_html(&worst.name),
            format!("{}% class average", format_score(worst.average)),
        ),
    ];

    let mut out = String::new();
    for (icon, title, value, sub) in cards {
        out.push_str(&format!(
            concat!(
                "<div class=\"highlight-card\">",
                "<div class=\"highlight-icon\">{icon}</div>",
                "<div class=\"highlight-title\">{title}</div>",
                "<div class=\"highlight-value\">{value}</div>",
                "<div class=\"highlight-sub\">{sub}</div>",
                "</div>"
            ),
            icon = icon,
            title = title,
            value = value,
            sub = sub,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_result;

    // ==========================================================================
    // DERIVED HIGHLIGHT TESTS
    // ==========================================================================
    //
    // The two comparative reductions are the only statistics computed
    // client-side; everything else is projected verbatim.
    // ==========================================================================

    #[test]
    fn test_best_and_worst_subject() {
        let averages = SubjectAverages::from([
            ("Math", 40.0),
            ("Science", 95.0),
            ("English", 70.0),
        ]);

        assert_eq!(
            best_subject(&averages),
            DerivedHighlight { name: "Science".into(), average: 95.0 }
        );
        assert_eq!(
            worst_subject(&averages),
            DerivedHighlight { name: "Math".into(), average: 40.0 }
        );
    }

    #[test]
    fn test_ties_go_to_first_in_document_order() {
        let averages = SubjectAverages::from([
            ("History", 88.0),
            ("Geography", 88.0),
            ("Math", 12.0),
            ("Science", 12.0),
        ]);

        assert_eq!(best_subject(&averages).name, "History");
        assert_eq!(worst_subject(&averages).name, "Math");
    }

    #[test]
    fn test_boundary_values_override_the_seeds() {
        // 0 and 100 are legitimate averages and must beat the seeds.
        let zeros = SubjectAverages::from([("Math", 0.0)]);
        assert_eq!(worst_subject(&zeros).average, 0.0);
        assert_eq!(best_subject(&zeros).name, "Math");

        let full = SubjectAverages::from([("Science", 100.0)]);
        assert_eq!(best_subject(&full).average, 100.0);
        assert_eq!(worst_subject(&full).name, "Science");
    }

    #[test]
    fn test_empty_map_yields_seed_values() {
        let empty = SubjectAverages::default();
        assert_eq!(best_subject(&empty).name, "");
        assert_eq!(worst_subject(&empty).average, 101.0);
    }

    #[test]
    fn test_five_cards_with_expected_content() {
        let html = highlight_cards(&sample_result());

        assert_eq!(html.matches("highlight-card\"").count(), 5);
        for title in [
            "Highest Average",
            "Lowest Average",
            "Class Average",
            "Best Subject",
            "Weakest Subject",
        ] {
            assert!(html.contains(title), "missing card {title}");
        }
        assert!(html.contains("Asha Rao"));
        assert!(html.contains("Across 3 students"));
        assert!(html.contains(">Science<"), "best subject should be Science");
        assert!(html.contains("95% class average"));
        assert!(html.contains("40% class average"));
    }

    #[test]
    fn test_highlight_names_are_escaped() {
        let mut result = sample_result();
        result.highest_average.name = "<img src=x>".to_string();
        let html = highlight_cards(&result);

        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x&gt;"));
    }
}
