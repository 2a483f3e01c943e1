use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub mod report;
pub mod stage;

pub use report::{DiagnosisReport, DiagnosisView, Section, SectionBody, SectionTone};
pub use stage::Stage;

/// Diagnosis endpoint payload. Every field may be absent on the wire; the
/// renderer resolves defaults, never the deserializer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DiagnosisResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub predicted_disease: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

/// Treatment advice attached to a diagnosis. Each field is independently
/// optional; none implies any other.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Recommendation {
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub fertilizer: Option<String>,
    #[serde(default)]
    pub immediate_actions: Option<Vec<String>>,
    #[serde(default)]
    pub treatment: Option<Treatment>,
    #[serde(default)]
    pub prevention: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Treatment {
    #[serde(default)]
    pub organic: Option<Vec<String>>,
    #[serde(default)]
    pub chemical: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct WeatherReport {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub current_weather: CurrentWeather,
    #[serde(default)]
    pub forecast: Vec<ForecastEntry>,
    #[serde(default)]
    pub disease_risks: Vec<DiseaseRisk>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ForecastEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DiseaseRisk {
    #[serde(rename = "type", default)]
    pub risk_type: String,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub preventive_action: String,
}

impl DiseaseRisk {
    /// Visual tier for a risk entry. Levels other than the two the service
    /// names fall through to the low tier.
    pub fn severity(&self) -> RiskSeverity {
        match self.risk_level.as_str() {
            "HIGH" => RiskSeverity::Danger,
            "MEDIUM" => RiskSeverity::Warning,
            _ => RiskSeverity::Low,
        }
    }
}

/// Three-tier severity, displayed as the suffix of an `alert-*` class.
#[derive(Display, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum RiskSeverity {
    Danger,
    Warning,
    #[strum(serialize = "success")]
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn diagnosis_response_uses_wire_field_names() {
        let response: DiagnosisResponse = serde_json::from_value(json!({
            "success": true,
            "predicted_disease": "Tomato Early Blight",
            "confidence": 91.5,
            "recommendation": {
                "fertilizer": "NPK 19-19-19",
                "immediate_actions": ["Remove affected leaves"],
                "treatment": { "organic": ["Neem oil spray"] },
                "prevention": ["Rotate crops"]
            }
        }))
        .unwrap();

        assert!(response.success);
        assert_eq!(response.predicted_disease.as_deref(), Some("Tomato Early Blight"));
        assert_eq!(response.confidence, Some(91.5));

        let rec = response.recommendation.unwrap();
        assert_eq!(rec.fertilizer.as_deref(), Some("NPK 19-19-19"));
        assert_eq!(
            rec.immediate_actions.as_deref(),
            Some(&["Remove affected leaves".to_string()][..])
        );
        let treatment = rec.treatment.unwrap();
        assert_eq!(treatment.organic.as_deref(), Some(&["Neem oil spray".to_string()][..]));
        assert_eq!(treatment.chemical, None);
        assert_eq!(rec.prevention.as_deref(), Some(&["Rotate crops".to_string()][..]));
    }

    #[test]
    fn diagnosis_response_tolerates_absent_fields() {
        let response: DiagnosisResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert_eq!(response.predicted_disease, None);
        assert_eq!(response.confidence, None);
        assert_eq!(response.recommendation, None);

        let response: DiagnosisResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn risk_entries_deserialize_the_type_key() {
        let risk: DiseaseRisk = serde_json::from_value(json!({
            "type": "Blight",
            "risk_level": "HIGH",
            "reason": "High humidity",
            "preventive_action": "Apply preventive fungicide"
        }))
        .unwrap();
        assert_eq!(risk.risk_type, "Blight");
        assert_eq!(risk.severity(), RiskSeverity::Danger);
    }

    #[test]
    fn risk_severity_maps_three_tiers() {
        let risk = |level: &str| DiseaseRisk {
            risk_level: level.to_string(),
            ..Default::default()
        };

        assert_eq!(risk("HIGH").severity(), RiskSeverity::Danger);
        assert_eq!(risk("MEDIUM").severity(), RiskSeverity::Warning);
        assert_eq!(risk("LOW").severity(), RiskSeverity::Low);
        assert_eq!(risk("").severity(), RiskSeverity::Low);
        // Matching is exact: the service shouts these levels.
        assert_eq!(risk("high").severity(), RiskSeverity::Low);
    }

    #[test]
    fn risk_severity_displays_as_class_suffix() {
        assert_eq!(format!("alert-{}", RiskSeverity::Danger), "alert-danger");
        assert_eq!(format!("alert-{}", RiskSeverity::Warning), "alert-warning");
        assert_eq!(format!("alert-{}", RiskSeverity::Low), "alert-success");
    }

    #[test]
    fn chat_request_serializes_message_only() {
        let body = serde_json::to_value(ChatRequest {
            message: "What does NPK mean?".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "message": "What does NPK mean?" }));
    }
}
