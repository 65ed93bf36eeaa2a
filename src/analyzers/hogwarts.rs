use super::fields::{self, DualFields, SingleFields};
use crate::analysis_result::{AnalysisResult, LegacyAnalysisResult};
use crate::errors::ParseError;

pub const ID: &str = "hogwarts";

const DUAL: DualFields = DualFields {
    result: ["house_1", "house_2"],
    indicators: ["key_traits_1", "key_traits_2"],
};

const SINGLE: SingleFields = SingleFields {
    result: "house",
    indicators: "key_traits",
};

pub fn normalize_dual(raw: &str) -> Result<AnalysisResult, ParseError> {
    fields::normalize_dual(ID, raw, &DUAL)
}

pub fn normalize_single(raw: &str) -> Result<LegacyAnalysisResult, ParseError> {
    fields::normalize_single(ID, raw, &SINGLE)
}
