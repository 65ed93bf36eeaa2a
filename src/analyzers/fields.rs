use chrono::Utc;
use serde_json::{Map, Value};

use crate::analysis_result::{AnalysisResult, LegacyAnalysisResult};
use crate::errors::ParseError;

/// analyzer-specific keys of the two-person answer
pub struct DualFields {
    pub result: [&'static str; 2],
    pub indicators: [&'static str; 2],
}

/// analyzer-specific keys of the single-verdict answer
pub struct SingleFields {
    pub result: &'static str,
    pub indicators: &'static str,
}

pub(crate) fn parse_object(raw: &str) -> Result<Map<String, Value>, ParseError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(ParseError::WrongType {
            field: "<root>",
            expected: "a JSON object",
        }),
    }
}

fn required<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, ParseError> {
    obj.get(field).ok_or(ParseError::MissingField(field))
}

pub(crate) fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, ParseError> {
    required(obj, field)?
        .as_str()
        .map(str::to_string)
        .ok_or(ParseError::WrongType {
            field,
            expected: "a string",
        })
}

/// labels pass through, numeric levels are stringified
pub(crate) fn required_verdict(obj: &Map<String, Value>, field: &'static str) -> Result<String, ParseError> {
    match required(obj, field)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(ParseError::WrongType {
            field,
            expected: "a string or a number",
        }),
    }
}

pub(crate) fn required_string_list(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, ParseError> {
    let wrong_type = ParseError::WrongType {
        field,
        expected: "an array of strings",
    };

    let Value::Array(items) = required(obj, field)? else {
        return Err(wrong_type);
    };

    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or(wrong_type)
}

pub(crate) fn required_number(obj: &Map<String, Value>, field: &'static str) -> Result<f64, ParseError> {
    required(obj, field)?.as_f64().ok_or(ParseError::WrongType {
        field,
        expected: "a number",
    })
}

/// maps a two-person answer onto the canonical result; any missing key fails the whole result
pub fn normalize_dual(
    analysis_type: &str,
    raw: &str,
    fields: &DualFields,
) -> Result<AnalysisResult, ParseError> {
    let obj = parse_object(raw)?;

    Ok(AnalysisResult {
        analysis_type: analysis_type.to_string(),
        name_person_1: required_str(&obj, "name_person_1")?,
        name_person_2: required_str(&obj, "name_person_2")?,
        result_1: required_verdict(&obj, fields.result[0])?,
        result_2: required_verdict(&obj, fields.result[1])?,
        analysis_1: required_str(&obj, "analysis_1")?,
        analysis_2: required_str(&obj, "analysis_2")?,
        indicators_1: required_string_list(&obj, fields.indicators[0])?,
        indicators_2: required_string_list(&obj, fields.indicators[1])?,
        timestamp: Utc::now(),
    })
}

pub fn normalize_single(
    analysis_type: &str,
    raw: &str,
    fields: &SingleFields,
) -> Result<LegacyAnalysisResult, ParseError> {
    let obj = parse_object(raw)?;

    Ok(LegacyAnalysisResult {
        analysis_type: analysis_type.to_string(),
        primary_result: required_verdict(&obj, fields.result)?,
        confidence_score: required_number(&obj, "confidence")?,
        detailed_analysis: required_str(&obj, "analysis")?,
        key_indicators: required_string_list(&obj, fields.indicators)?,
        timestamp: Utc::now(),
    })
}
