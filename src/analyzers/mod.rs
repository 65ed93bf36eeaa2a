pub mod boomer;
pub mod fields;
pub mod hogwarts;
pub mod red_flag;

use log::{error, info};
use serde::Serialize;
use std::fmt;
use std::time::Instant;

use crate::analysis_result::{AnalysisOutcome, AnalysisResult, LegacyAnalysisResult, ResultShape};
use crate::errors::{AnalysisError, ParseError};
use crate::llm::LlmGateway;
use crate::prompts;

/// one themed rubric: prompt builders and normalizers for both result shapes
pub struct AnalyzerProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    dual_prompt: fn() -> String,
    single_prompt: fn() -> String,
    normalize_dual: fn(&str) -> Result<AnalysisResult, ParseError>,
    normalize_single: fn(&str) -> Result<LegacyAnalysisResult, ParseError>,
}

impl fmt::Debug for AnalyzerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerProfile")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// entry of the `GET /analyzers` listing
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

static REGISTRY: [AnalyzerProfile; 3] = [
    AnalyzerProfile {
        id: hogwarts::ID,
        name: "Hogwarts House Sorting",
        description: "Determines which Hogwarts house best matches each chat participant's personality",
        dual_prompt: prompts::hogwarts::dual_prompt,
        single_prompt: prompts::hogwarts::single_prompt,
        normalize_dual: hogwarts::normalize_dual,
        normalize_single: hogwarts::normalize_single,
    },
    AnalyzerProfile {
        id: red_flag::ID,
        name: "Red Flag Analysis",
        description: "Rates each chat participant for red flags and concerning patterns",
        dual_prompt: prompts::red_flag::dual_prompt,
        single_prompt: prompts::red_flag::single_prompt,
        normalize_dual: red_flag::normalize_dual,
        normalize_single: red_flag::normalize_single,
    },
    AnalyzerProfile {
        id: boomer::ID,
        name: "Boomer Energy Meter",
        description: "Measures how much boomer energy each chat participant gives off",
        dual_prompt: prompts::boomer::dual_prompt,
        single_prompt: prompts::boomer::single_prompt,
        normalize_dual: boomer::normalize_dual,
        normalize_single: boomer::normalize_single,
    },
];

/// every registered analyzer, in listing order
pub fn all() -> &'static [AnalyzerProfile] {
    &REGISTRY
}

pub fn list() -> Vec<AnalyzerInfo> {
    REGISTRY.iter().map(AnalyzerProfile::info).collect()
}

/// exact, case-sensitive lookup
pub fn resolve(analyzer_type: &str) -> Result<&'static AnalyzerProfile, AnalysisError> {
    REGISTRY
        .iter()
        .find(|profile| profile.id == analyzer_type)
        .ok_or_else(|| AnalysisError::UnknownAnalyzer(analyzer_type.to_string()))
}

impl AnalyzerProfile {
    pub fn info(&self) -> AnalyzerInfo {
        AnalyzerInfo {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }

    pub fn system_prompt(&self, shape: ResultShape) -> String {
        match shape {
            ResultShape::Dual => (self.dual_prompt)(),
            ResultShape::Single => (self.single_prompt)(),
        }
    }

    pub fn normalize(&self, shape: ResultShape, raw: &str) -> Result<AnalysisOutcome, ParseError> {
        match shape {
            ResultShape::Dual => (self.normalize_dual)(raw).map(AnalysisOutcome::Dual),
            ResultShape::Single => (self.normalize_single)(raw).map(AnalysisOutcome::Single),
        }
    }

    /// prompt -> gateway -> normalize; either the whole result or an error
    pub async fn analyze(
        &self,
        gateway: &dyn LlmGateway,
        shape: ResultShape,
        transcript: &str,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let started = Instant::now();
        let system_prompt = self.system_prompt(shape);

        let raw = gateway.complete(&system_prompt, transcript).await?;

        match self.normalize(shape, &raw) {
            Ok(outcome) => {
                info!(
                    "{} analysis ({}) completed in {}ms",
                    outcome.analysis_type(),
                    shape.name(),
                    started.elapsed().as_millis()
                );
                Ok(outcome)
            }
            Err(e) => {
                error!("{} analysis returned an unusable answer: {}", self.id, e);
                Err(e.into())
            }
        }
    }
}
