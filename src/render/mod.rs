//! Results projection: `AnalysisResult` → UI fragments
//!
//! A pure, idempotent pipeline. One call to [`render`] produces a
//! [`RenderPass`] holding HTML fragment strings for each region of the
//! dashboard plus the bar-animation targets. Nothing here reads the
//! network, the DOM or any state across passes; the thin adapter in
//! `classlens-web` applies the pass to the live page.
//!
//! Each fragment replaces its target region wholesale; there is no
//! incremental diffing.
//!
//! All free-text fields (student names, grades, subject names) pass
//! through [`escape_html`] before interpolation. This is a hard
//! contract: a name containing `<script>` must render as literal text.

pub mod bars;
pub mod cards;
pub mod highlights;
pub mod table;

use crate::model::AnalysisResult;

/// Everything one render pass wants on the page.
///
/// String fields are HTML fragments keyed to a fixed target region;
/// `bar_targets` carries the clamped fill widths (document order) the
/// adapter animates to after injection.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub stat_total: String,
    pub stat_average: String,
    pub stat_top_count: String,
    pub stat_risk_count: String,
    pub subject_bars: String,
    pub bar_targets: Vec<f64>,
    pub top_performers: String,
    pub at_risk: String,
    pub table_body: String,
    pub highlights: String,
}

/// Project one service response onto the full set of fragments.
pub fn render(result: &AnalysisResult) -> RenderPass {
    RenderPass {
        stat_total: result.total_students.to_string(),
        stat_average: format!("{}%", format_score(result.class_average)),
        stat_top_count: result.top_performers.len().to_string(),
        stat_risk_count: result.at_risk_students.len().to_string(),
        subject_bars: bars::subject_bars(&result.subject_averages),
        bar_targets: bars::bar_targets(&result.subject_averages),
        top_performers: cards::student_cards(&result.top_performers, cards::NO_TOP_MSG),
        at_risk: cards::student_cards(&result.at_risk_students, cards::NO_RISK_MSG),
        table_body: table::student_rows(&result.all_students),
        highlights: highlights::highlight_cards(result),
    }
}

/// Entity-escape text destined for an HTML fragment.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a score the way the page shows numbers: at most two
/// decimals, trailing zeros trimmed. `86.25` → "86.25", `86.5` →
/// "86.5", `70.0` → "70".
pub fn format_score(value: f64) -> String {
    let mut s = format!("{value:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Grade badge visual category. Unrecognized grades get the "C" style
/// rather than failing.
pub fn grade_class(grade: &str) -> &'static str {
    match grade {
        "A+" => "grade-ap",
        "A" => "grade-a",
        "B" => "grade-b",
        "C" => "grade-c",
        "D" => "grade-d",
        "E" => "grade-e",
        "F" => "grade-f",
        _ => "grade-c",
    }
}
