//! Wire contract with the analysis service
//!
//! These types mirror the JSON payload returned by `POST /api/analyze`
//! verbatim. The service computes all statistics upstream; this layer
//! only deserializes them and derives the best/worst subject highlights
//! at render time.
//!
//! One deliberate deviation from a plain `HashMap`: `subjectAverages`
//! is kept as an ordered list of `(subject, average)` pairs in the
//! order the keys appear in the JSON document. The best/worst subject
//! reductions break ties by taking the first entry encountered, so the
//! iteration order must be deterministic and must match the document.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Full response payload from the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_students: u32,
    /// Class-wide average, 0-100, already rounded by the service.
    pub class_average: f64,
    pub highest_average: StudentHighlight,
    pub lowest_average: StudentHighlight,
    pub subject_averages: SubjectAverages,
    /// Already filtered and ordered by the service; not re-sorted here.
    pub top_performers: Vec<StudentSummary>,
    pub at_risk_students: Vec<StudentSummary>,
    /// Ordered by descending average; table ranks come from position.
    pub all_students: Vec<StudentSummary>,
}

/// The reduced `{name, average}` pair the service sends for the
/// highest- and lowest-average students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentHighlight {
    pub name: String,
    pub average: f64,
}

/// One student's scores as computed by the service.
///
/// `name` is untrusted user text and must be HTML-escaped before it is
/// interpolated into any fragment. `grade` is nominally one of
/// A+/A/B/C/D/E/F but is kept as a free string; unrecognized values
/// render with the fallback visual category instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i64,
    pub name: String,
    pub math: f64,
    pub science: f64,
    pub english: f64,
    pub history: f64,
    pub geography: f64,
    pub attendance: f64,
    pub average: f64,
    pub grade: String,
}

/// Per-subject class averages, preserving the key order of the JSON
/// object they were decoded from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectAverages(Vec<(String, f64)>);

impl SubjectAverages {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        SubjectAverages(entries)
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, avg)| (name.as_str(), *avg))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for SubjectAverages {
    fn from(entries: [(&str, f64); N]) -> Self {
        SubjectAverages(
            entries
                .iter()
                .map(|(name, avg)| (name.to_string(), *avg))
                .collect(),
        )
    }
}

impl Serialize for SubjectAverages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, avg) in &self.0 {
            map.serialize_entry(name, avg)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SubjectAverages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor;

        impl<'de> Visitor<'de> for OrderedMapVisitor {
            type Value = SubjectAverages;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of subject names to averages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, avg)) = access.next_entry::<String, f64>()? {
                    entries.push((name, avg));
                }
                Ok(SubjectAverages(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // WIRE FORMAT TESTS
    // ==========================================================================
    //
    // The service contract is camelCase JSON. These tests pin the field
    // names and the document-order guarantee for subjectAverages.
    // ==========================================================================

    fn sample_payload() -> &'static str {
        r#"{
            "totalStudents": 3,
            "classAverage": 71.5,
            "highestAverage": { "name": "Asha Rao", "average": 92.4 },
            "lowestAverage": { "name": "Ben Ito", "average": 38.2 },
            "subjectAverages": { "Math": 64.2, "Science": 81.0, "English": 70.1, "History": 68.9, "Geography": 73.3 },
            "topPerformers": [{
                "id": 1, "name": "Asha Rao", "math": 95, "science": 91, "english": 90,
                "history": 94, "geography": 92, "attendance": 98, "average": 92.4, "grade": "A+"
            }],
            "atRiskStudents": [],
            "allStudents": [{
                "id": 1, "name": "Asha Rao", "math": 95, "science": 91, "english": 90,
                "history": 94, "geography": 92, "attendance": 98, "average": 92.4, "grade": "A+"
            }]
        }"#
    }

    #[test]
    fn test_decodes_camel_case_payload() {
        let result: AnalysisResult = serde_json::from_str(sample_payload()).unwrap();

        assert_eq!(result.total_students, 3);
        assert_eq!(result.class_average, 71.5);
        assert_eq!(result.highest_average.name, "Asha Rao");
        assert_eq!(result.lowest_average.average, 38.2);
        assert_eq!(result.top_performers.len(), 1);
        assert!(result.at_risk_students.is_empty());
        assert_eq!(result.all_students[0].grade, "A+");
    }

    #[test]
    fn test_subject_averages_preserve_document_order() {
        let result: AnalysisResult = serde_json::from_str(sample_payload()).unwrap();

        let names: Vec<&str> = result.subject_averages.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Math", "Science", "English", "History", "Geography"]);
    }

    #[test]
    fn test_subject_averages_round_trip_keeps_order() {
        let averages = SubjectAverages::from([("Science", 81.0), ("Math", 64.2)]);

        let json = serde_json::to_string(&averages).unwrap();
        assert_eq!(json, r#"{"Science":81.0,"Math":64.2}"#);

        let back: SubjectAverages = serde_json::from_str(&json).unwrap();
        assert_eq!(back, averages);
    }

    #[test]
    fn test_unknown_subjects_are_kept() {
        // The fixed subject set is a service-side concern; an extra key
        // must survive decoding so it can render with the fallback bar.
        let json = r#"{ "Math": 50.0, "Astronomy": 88.0 }"#;
        let averages: SubjectAverages = serde_json::from_str(json).unwrap();

        assert_eq!(averages.len(), 2);
        assert_eq!(averages.iter().last(), Some(("Astronomy", 88.0)));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        // A partial body must fail decoding as a whole; the renderer
        // never sees half a payload.
        let truncated = r#"{ "totalStudents": 3, "classAverage": 71.5 }"#;
        assert!(serde_json::from_str::<AnalysisResult>(truncated).is_err());
    }
}
