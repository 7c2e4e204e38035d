//! Full student table body.
//!
//! The service already sorts `allStudents` by descending average; rows
//! are emitted in that order and rank is just the 1-based position.
//! The top three ranks carry a medal badge class.

use super::{escape_html, format_score, grade_class};
use crate::model::StudentSummary;

/// `<tr>` rows for the table body, one per student.
pub fn student_rows(students: &[StudentSummary]) -> String {
    let mut out = String::new();
    for (i, s) in students.iter().enumerate() {
        out.push_str(&student_row(s, i + 1));
    }
    out
}

fn student_row(s: &StudentSummary, rank: usize) -> String {
    let rank_badge = if rank <= 3 {
        format!("<span class=\"rank-badge rank-{rank}\">{rank}</span>")
    } else {
        format!("<span class=\"rank-badge\">{rank}</span>")
    };

    format!(
        concat!(
            "<tr>",
            "<td>{rank_badge}</td>",
            "<td>{id}</td>",
            "<td>{name}</td>",
            "<td>{math}</td>",
            "<td>{science}</td>",
            "<td>{english}</td>",
            "<td>{history}</td>",
            "<td>{geography}</td>",
            "<td>{attendance}%</td>",
            "<td><strong>{average}%</strong></td>",
            "<td><span class=\"student-card-grade {grade_class}\">{grade}</span></td>",
            "</tr>"
        ),
        rank_badge = rank_badge,
        id = s.id,
        name = escape_html(&s.name),
        math = format_score(s.math),
        science = format_score(s.science),
        english = format_score(s.english),
        history = format_score(s.history),
        geography = format_score(s.geography),
        attendance = format_score(s.attendance),
        average = format_score(s.average),
        grade_class = grade_class(&s.grade),
        grade = escape_html(&s.grade),
    )
}
