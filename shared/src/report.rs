//! Pure assembly of the diagnosis result view. Everything here maps a
//! `DiagnosisResponse` to plain data the frontend can render; no browser
//! types are involved.

use serde::Serialize;
use strum_macros::Display;

use crate::{DiagnosisResponse, Recommendation};

/// List-valued sections show at most this many entries.
pub const MAX_LIST_ITEMS: usize = 3;

pub const UNKNOWN_DISEASE: &str = "Unknown";
pub const DEFAULT_FAILURE_REASON: &str = "Prediction failed!";

/// Failure reason with the service's fallback order: `error`, then
/// `message`, then the fixed default.
pub fn failure_reason(response: &DiagnosisResponse) -> String {
    response
        .error
        .clone()
        .or_else(|| response.message.clone())
        .unwrap_or_else(|| DEFAULT_FAILURE_REASON.to_string())
}

pub fn disease_label(response: &DiagnosisResponse) -> String {
    response
        .predicted_disease
        .clone()
        .unwrap_or_else(|| UNKNOWN_DISEASE.to_string())
}

pub fn confidence_percent(response: &DiagnosisResponse) -> f64 {
    response.confidence.unwrap_or(0.0)
}

/// Sole health/disease discriminator: a case-insensitive substring match
/// on the (already defaulted) disease label.
pub fn is_healthy_label(label: &str) -> bool {
    label.to_lowercase().contains("healthy")
}

/// Terminal message for a request that failed before a well-formed
/// response was available.
pub fn transport_failure(err: impl std::fmt::Display) -> String {
    format!("Server error: {}", err)
}

/// One titled recommendation block.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub tone: SectionTone,
    pub body: SectionBody,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum SectionBody {
    Text(String),
    List(Vec<String>),
}

#[derive(Display, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SectionTone {
    Fertilizer,
    Urgent,
    Organic,
    Chemical,
    Prevention,
}

impl SectionTone {
    pub fn css_class(self) -> String {
        format!("section-{}", self)
    }
}

fn text_section(title: &'static str, tone: SectionTone, value: Option<&str>) -> Option<Section> {
    let text = value?.to_string();
    Some(Section {
        title,
        tone,
        body: SectionBody::Text(text),
    })
}

fn list_section(title: &'static str, tone: SectionTone, items: Option<&[String]>) -> Option<Section> {
    let items = items?;
    if items.is_empty() {
        return None;
    }
    Some(Section {
        title,
        tone,
        body: SectionBody::List(items.iter().take(MAX_LIST_ITEMS).cloned().collect()),
    })
}

/// Blocks in their fixed order. A block is emitted only when its source
/// field is present (and non-empty for lists); no field implies another,
/// so `treatment` may contribute one side without the other.
pub fn recommendation_sections(rec: &Recommendation) -> Vec<Section> {
    let treatment = rec.treatment.as_ref();

    [
        text_section(
            "Fertilizer Recommendation",
            SectionTone::Fertilizer,
            rec.fertilizer.as_deref(),
        ),
        list_section(
            "Immediate Actions",
            SectionTone::Urgent,
            rec.immediate_actions.as_deref(),
        ),
        list_section(
            "Organic Treatment",
            SectionTone::Organic,
            treatment.and_then(|t| t.organic.as_deref()),
        ),
        list_section(
            "Chemical Treatment",
            SectionTone::Chemical,
            treatment.and_then(|t| t.chemical.as_deref()),
        ),
        list_section(
            "Prevention Tips",
            SectionTone::Prevention,
            rec.prevention.as_deref(),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Computed presentation of one successful diagnosis.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DiagnosisReport {
    pub healthy: bool,
    pub disease: String,
    pub confidence: f64,
    pub sections: Vec<Section>,
}

/// What the results area shows once a response (or its absence) is in.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum DiagnosisView {
    Failure(String),
    Report(DiagnosisReport),
}

impl DiagnosisView {
    pub fn from_response(response: &DiagnosisResponse) -> Self {
        if !response.success {
            return DiagnosisView::Failure(failure_reason(response));
        }

        let disease = disease_label(response);
        DiagnosisView::Report(DiagnosisReport {
            healthy: is_healthy_label(&disease),
            confidence: confidence_percent(response),
            sections: response
                .recommendation
                .as_ref()
                .map(recommendation_sections)
                .unwrap_or_default(),
            disease,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Treatment;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn response(value: serde_json::Value) -> DiagnosisResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn failure_reason_prefers_error_then_message_then_default() {
        let both = DiagnosisResponse {
            error: Some("Invalid file type".into()),
            message: Some("ignored".into()),
            ..Default::default()
        };
        assert_eq!(failure_reason(&both), "Invalid file type");

        let message_only = DiagnosisResponse {
            message: Some("Incorrect image!".into()),
            ..Default::default()
        };
        assert_eq!(failure_reason(&message_only), "Incorrect image!");

        assert_eq!(failure_reason(&DiagnosisResponse::default()), DEFAULT_FAILURE_REASON);
    }

    #[test]
    fn failed_response_renders_no_recommendation_content() {
        let view = DiagnosisView::from_response(&response(json!({
            "success": false,
            "error": "No file uploaded",
            "recommendation": { "fertilizer": "should never show" }
        })));
        assert_eq!(view, DiagnosisView::Failure("No file uploaded".into()));
    }

    #[test]
    fn absent_disease_and_confidence_fall_back_to_defaults() {
        let view = DiagnosisView::from_response(&response(json!({ "success": true })));
        let DiagnosisView::Report(report) = view else {
            panic!("expected report");
        };
        assert_eq!(report.disease, UNKNOWN_DISEASE);
        assert_eq!(report.confidence, 0.0);
        assert!(!report.healthy);
        assert!(report.sections.is_empty());
    }

    #[test]
    fn healthy_is_a_case_insensitive_substring_match() {
        assert!(is_healthy_label("Tomato Healthy"));
        assert!(!is_healthy_label("Tomato Leaf Blight"));
        assert!(is_healthy_label("PEPPER BELL HEALTHY"));
        assert!(is_healthy_label("Potato___healthy"));
        assert!(!is_healthy_label(UNKNOWN_DISEASE));
    }

    #[test]
    fn sections_appear_iff_present_and_non_empty_in_fixed_order() {
        let rec = Recommendation {
            fertilizer: Some("NPK 10-10-10".into()),
            immediate_actions: Some(strings(&["Isolate the plant"])),
            treatment: Some(Treatment {
                organic: Some(strings(&["Neem oil"])),
                chemical: Some(strings(&["Mancozeb"])),
            }),
            prevention: Some(strings(&["Rotate crops"])),
            ..Default::default()
        };

        let titles: Vec<_> = recommendation_sections(&rec).iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Fertilizer Recommendation",
                "Immediate Actions",
                "Organic Treatment",
                "Chemical Treatment",
                "Prevention Tips",
            ]
        );

        // treatment may carry one side only
        let chemical_only = Recommendation {
            treatment: Some(Treatment {
                organic: None,
                chemical: Some(strings(&["Copper fungicide"])),
            }),
            ..Default::default()
        };
        let titles: Vec<_> = recommendation_sections(&chemical_only)
            .iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["Chemical Treatment"]);

        // empty sequences are absent sections
        let empty_lists = Recommendation {
            immediate_actions: Some(vec![]),
            treatment: Some(Treatment {
                organic: Some(vec![]),
                chemical: None,
            }),
            prevention: Some(vec![]),
            ..Default::default()
        };
        assert!(recommendation_sections(&empty_lists).is_empty());
    }

    #[test]
    fn list_sections_cap_at_three_items() {
        let rec = Recommendation {
            prevention: Some(strings(&["Prune", "Spray", "Mulch", "Rake"])),
            immediate_actions: Some(strings(&["Isolate", "Water less"])),
            ..Default::default()
        };

        let sections = recommendation_sections(&rec);
        assert_eq!(
            sections[0].body,
            SectionBody::List(strings(&["Isolate", "Water less"]))
        );
        assert_eq!(
            sections[1].body,
            SectionBody::List(strings(&["Prune", "Spray", "Mulch"]))
        );
    }

    #[test]
    fn healthy_scenario_renders_banner_lines_and_no_sections() {
        let view = DiagnosisView::from_response(&response(json!({
            "success": true,
            "predicted_disease": "Apple Healthy",
            "confidence": 97,
            "recommendation": {}
        })));

        let DiagnosisView::Report(report) = view else {
            panic!("expected report");
        };
        assert!(report.healthy);
        assert_eq!(report.disease, "Apple Healthy");
        assert_eq!(format!("{}%", report.confidence), "97%");
        assert!(report.sections.is_empty());
    }

    #[test]
    fn diseased_scenario_renders_fertilizer_and_capped_prevention() {
        let view = DiagnosisView::from_response(&response(json!({
            "success": true,
            "predicted_disease": "Apple Scab",
            "confidence": 88,
            "recommendation": {
                "fertilizer": "NPK 10-10-10",
                "prevention": ["Prune", "Spray", "Mulch", "Rake"]
            }
        })));

        let DiagnosisView::Report(report) = view else {
            panic!("expected report");
        };
        assert!(!report.healthy);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].title, "Fertilizer Recommendation");
        assert_eq!(report.sections[0].body, SectionBody::Text("NPK 10-10-10".into()));
        assert_eq!(report.sections[1].title, "Prevention Tips");
        assert_eq!(
            report.sections[1].body,
            SectionBody::List(strings(&["Prune", "Spray", "Mulch"]))
        );
    }

    #[test]
    fn transport_failure_keeps_the_underlying_error_text() {
        let rendered = transport_failure("Failed to fetch");
        assert!(rendered.contains("Failed to fetch"));
        assert!(rendered.starts_with("Server error:"));
    }

    #[test]
    fn section_tones_map_to_css_classes() {
        assert_eq!(SectionTone::Fertilizer.css_class(), "section-fertilizer");
        assert_eq!(SectionTone::Urgent.css_class(), "section-urgent");
        assert_eq!(SectionTone::Prevention.css_class(), "section-prevention");
    }
}
