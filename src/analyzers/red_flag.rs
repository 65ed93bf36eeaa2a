use super::fields::{self, DualFields, SingleFields};
use crate::analysis_result::{AnalysisResult, LegacyAnalysisResult};
use crate::errors::ParseError;

pub const ID: &str = "red_flag";

// levels are integers 0-5, stringified into result_1/result_2
const DUAL: DualFields = DualFields {
    result: ["red_flag_level_1", "red_flag_level_2"],
    indicators: ["identified_flags_1", "identified_flags_2"],
};

const SINGLE: SingleFields = SingleFields {
    result: "red_flag_level",
    indicators: "identified_flags",
};

pub fn normalize_dual(raw: &str) -> Result<AnalysisResult, ParseError> {
    fields::normalize_dual(ID, raw, &DUAL)
}

pub fn normalize_single(raw: &str) -> Result<LegacyAnalysisResult, ParseError> {
    fields::normalize_single(ID, raw, &SINGLE)
}
