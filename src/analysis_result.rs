use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// verdict for both chat participants; the shape served by default
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub analysis_type: String,
    pub name_person_1: String,
    pub name_person_2: String,
    pub result_1: String,
    pub result_2: String,
    pub analysis_1: String,
    pub analysis_2: String,
    pub indicators_1: Vec<String>,
    pub indicators_2: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// older single-verdict shape carrying the model's self-reported confidence
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LegacyAnalysisResult {
    pub analysis_type: String,
    pub primary_result: String,
    pub confidence_score: f64,
    pub detailed_analysis: String,
    pub key_indicators: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// which of the two result shapes a deployment serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultShape {
    Dual,
    Single,
}

impl ResultShape {
    pub fn name(&self) -> &'static str {
        match self {
            ResultShape::Dual => "dual",
            ResultShape::Single => "single",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dual" => Some(ResultShape::Dual),
            "single" => Some(ResultShape::Single),
            _ => None,
        }
    }
}

impl Default for ResultShape {
    fn default() -> Self {
        ResultShape::Dual
    }
}

/// a normalized verdict in whichever shape was requested
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Dual(AnalysisResult),
    Single(LegacyAnalysisResult),
}

impl AnalysisOutcome {
    pub fn analysis_type(&self) -> &str {
        match self {
            AnalysisOutcome::Dual(result) => &result.analysis_type,
            AnalysisOutcome::Single(result) => &result.analysis_type,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct AnalysisResponse {
    pub status: &'static str,
    pub results: AnalysisOutcome,
}

impl AnalysisResponse {
    pub fn success(results: AnalysisOutcome) -> Self {
        Self {
            status: "success",
            results,
        }
    }
}

/// body of `POST /analyze`
#[derive(Deserialize, Debug, Clone)]
pub struct AnalysisRequest {
    pub chat_content: String,
    pub analyzer_type: String,
}
