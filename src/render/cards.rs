//! Ranked-list student cards (top performers and at-risk).
//!
//! Both lists use the same renderer: an empty input produces only the
//! designated empty-state message, otherwise one card per entry in the
//! order the service gave them. Rank numbers are not shown here, only
//! in the full table.

use super::{escape_html, format_score, grade_class};
use crate::model::StudentSummary;

pub const NO_TOP_MSG: &str = "No top performers identified.";
pub const NO_RISK_MSG: &str = "No students currently at risk.";

/// Per-card stagger for the entrance animation, in seconds.
const CARD_STAGGER_SECS: f64 = 0.08;

pub fn student_cards(students: &[StudentSummary], empty_message: &str) -> String {
    if students.is_empty() {
        return format!(
            "<p class=\"empty-message\">{}</p>",
            escape_html(empty_message)
        );
    }

    let mut out = String::new();
    for (i, s) in students.iter().enumerate() {
        out.push_str(&student_card(s, i));
    }
    out
}

fn student_card(s: &StudentSummary, index: usize) -> String {
    let stats = [
        ("Math", s.math),
        ("Science", s.science),
        ("English", s.english),
        ("History", s.history),
        ("Geography", s.geography),
    ];

    let mut body = String::new();
    for (label, value) in stats {
        body.push_str(&format!(
            concat!(
                "<div class=\"student-card-stat\">",
                "<span class=\"student-card-stat-label\">{label}</span>",
                "<span class=\"student-card-stat-value\">{value}</span>",
                "</div>"
            ),
            label = label,
            value = format_score(value),
        ));
    }

    format!(
        concat!(
            "<div class=\"student-card\" style=\"animation-delay: {delay}s\">",
            "<div class=\"student-card-header\">",
            "<span class=\"student-card-name\">{name}</span>",
            "<span class=\"student-card-grade {grade_class}\">{grade}</span>",
            "</div>",
            "<div class=\"student-card-stats\">",
            "{stats}",
            "<div class=\"student-card-stat\">",
            "<span class=\"student-card-stat-label\">Attendance</span>",
            "<span class=\"student-card-stat-value\">{attendance}%</span>",
            "</div>",
            "<div class=\"card-avg-row\">",
            "<span class=\"student-card-stat-label\">Average</span>",
            "<span class=\"student-card-stat-value\">{average}%</span>",
            "</div>",
            "</div>",
            "</div>"
        ),
        delay = format_score(index as f64 * CARD_STAGGER_SECS),
        name = escape_html(&s.name),
        grade_class = grade_class(&s.grade),
        grade = escape_html(&s.grade),
        stats = body,
        attendance = format_score(s.attendance),
        average = format_score(s.average),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::student;

    // ==========================================================================
    // RANKED LIST TESTS
    // ==========================================================================

    #[test]
    fn test_empty_list_shows_empty_state_only() {
        let html = student_cards(&[], NO_TOP_MSG);

        assert!(html.contains(NO_TOP_MSG));
        assert!(html.contains("empty-message"));
        assert!(!html.contains("student-card-header"), "no cards for an empty list");
    }

    #[test]
    fn test_one_card_per_entry_in_input_order() {
        let students = vec![
            student(1, "Asha Rao", 92.4, "A+"),
            student(2, "Caro Diaz", 83.1, "A"),
        ];
        let html = student_cards(&students, NO_TOP_MSG);

        assert_eq!(html.matches("student-card-header").count(), 2);
        assert!(html.find("Asha Rao").unwrap() < html.find("Caro Diaz").unwrap());
        assert!(!html.contains(NO_TOP_MSG));
    }

    #[test]
    fn test_names_are_escaped() {
        let students = vec![student(1, "<script>alert(1)</script>", 50.0, "C")];
        let html = student_cards(&students, NO_TOP_MSG);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_card_shows_all_numeric_fields_and_grade_badge() {
        let mut s = student(1, "Asha Rao", 92.4, "A+");
        s.math = 95.0;
        s.attendance = 98.5;
        let html = student_cards(&[s], NO_TOP_MSG);

        for label in ["Math", "Science", "English", "History", "Geography", "Attendance", "Average"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains(">95<"));
        assert!(html.contains(">98.5%<"));
        assert!(html.contains(">92.4%<"));
        assert!(html.contains("student-card-grade grade-ap"));
    }

    #[test]
    fn test_unknown_grade_gets_fallback_badge() {
        let html = student_cards(&[student(1, "X", 50.0, "Z")], NO_TOP_MSG);
        assert!(html.contains("student-card-grade grade-c"));
    }

    #[test]
    fn test_cards_are_staggered() {
        let students = vec![
            student(1, "A", 50.0, "C"),
            student(2, "B", 50.0, "C"),
            student(3, "C", 50.0, "C"),
        ];
        let html = student_cards(&students, NO_TOP_MSG);

        assert!(html.contains("animation-delay: 0s"));
        assert!(html.contains("animation-delay: 0.08s"));
        assert!(html.contains("animation-delay: 0.16s"));
    }
}
