use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// failures of the outbound LLM call
#[derive(Debug)]
pub enum LlmError {
    Http(reqwest::Error),
    Status { status: u16, body: String },
    Timeout(Duration),
    EmptyResponse,
    MalformedEnvelope(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Http(e) => write!(f, "LLM request failed: {}", e),
            LlmError::Status { status, body } => {
                write!(f, "LLM provider returned HTTP {}: {}", status, body)
            }
            LlmError::Timeout(deadline) => {
                write!(f, "LLM call timed out after {}s", deadline.as_secs())
            }
            LlmError::EmptyResponse => write!(f, "LLM provider returned an empty response"),
            LlmError::MalformedEnvelope(msg) => {
                write!(f, "LLM provider response could not be read: {}", msg)
            }
        }
    }
}

impl Error for LlmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LlmError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Http(err)
    }
}

/// failures turning the model's raw text into a result
#[derive(Debug)]
pub enum ParseError {
    InvalidJson(serde_json::Error),
    MissingField(&'static str),
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidJson(e) => write!(f, "Failed to parse LLM response: {}", e),
            ParseError::MissingField(field) => {
                write!(f, "Failed to parse LLM response: missing field `{}`", field)
            }
            ParseError::WrongType { field, expected } => write!(
                f,
                "Failed to parse LLM response: field `{}` must be {}",
                field, expected
            ),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::InvalidJson(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidJson(err)
    }
}

/// request-level failures, each mapped to one HTTP status
#[derive(Debug)]
pub enum AnalysisError {
    InvalidRequest(String),
    UnknownAnalyzer(String),
    NoMessages,
    UnsupportedFile(String),
    InvalidEncoding,
    MissingFile,
    Multipart(String),
    Gateway(LlmError),
    Parse(ParseError),
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::InvalidRequest(_)
            | AnalysisError::UnknownAnalyzer(_)
            | AnalysisError::NoMessages
            | AnalysisError::UnsupportedFile(_)
            | AnalysisError::InvalidEncoding
            | AnalysisError::MissingFile
            | AnalysisError::Multipart(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Gateway(_) | AnalysisError::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AnalysisError::UnknownAnalyzer(kind) => write!(f, "Unknown analyzer type: {}", kind),
            AnalysisError::NoMessages => write!(f, "No valid messages found in the chat content"),
            AnalysisError::UnsupportedFile(name) => {
                write!(f, "Only .txt files are allowed (got `{}`)", name)
            }
            AnalysisError::InvalidEncoding => write!(
                f,
                "File encoding not supported. Please ensure the file is UTF-8 encoded."
            ),
            AnalysisError::MissingFile => write!(f, "Missing multipart field `file`"),
            AnalysisError::Multipart(msg) => write!(f, "Invalid multipart upload: {}", msg),
            AnalysisError::Gateway(e) => write!(f, "Analysis failed: {}", e),
            AnalysisError::Parse(e) => write!(f, "Analysis failed: {}", e),
        }
    }
}

impl Error for AnalysisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AnalysisError::Gateway(e) => Some(e),
            AnalysisError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        AnalysisError::Gateway(err)
    }
}

impl From<ParseError> for AnalysisError {
    fn from(err: ParseError) -> Self {
        AnalysisError::Parse(err)
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: "error",
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// startup configuration problems; these stop the process before it serves
#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => {
                write!(f, "{} environment variable is required", key)
            }
            ConfigError::Invalid { key, value } => {
                write!(f, "{} has an invalid value: `{}`", key, value)
            }
        }
    }
}

impl Error for ConfigError {}
