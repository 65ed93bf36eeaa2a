use super::fields::{self, DualFields, SingleFields};
use crate::analysis_result::{AnalysisResult, LegacyAnalysisResult};
use crate::errors::ParseError;

pub const ID: &str = "boomer";

const DUAL: DualFields = DualFields {
    result: ["boomer_level_1", "boomer_level_2"],
    indicators: ["boomer_traits_1", "boomer_traits_2"],
};

const SINGLE: SingleFields = SingleFields {
    result: "boomer_level",
    indicators: "boomer_traits",
};

pub fn normalize_dual(raw: &str) -> Result<AnalysisResult, ParseError> {
    fields::normalize_dual(ID, raw, &DUAL)
}

pub fn normalize_single(raw: &str) -> Result<LegacyAnalysisResult, ParseError> {
    fields::normalize_single(ID, raw, &SINGLE)
}
