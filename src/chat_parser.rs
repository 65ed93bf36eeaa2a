use chrono::NaiveDateTime;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::errors::AnalysisError;

/// timestamp layout used by the export, e.g. `01.02.2023, 10:00:05`
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

// [DD.MM.YYYY, HH:MM:SS] sender: content
static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn line_pattern() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| {
        Regex::new(r"^\[(\d{2}\.\d{2}\.\d{4},\s\d{2}:\d{2}:\d{2})\]\s([^:]+):\s(.+)$")
            .expect("chat line pattern is a valid regex")
    })
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub content: String,
}

/// parses a single physical line, `None` when it is not a message line.
///
/// a sender that is blank after trimming does not count as a message line.
pub fn parse_line(line: &str) -> Option<ChatMessage> {
    let caps = line_pattern().captures(line)?;

    let sender = caps[2].trim();
    if sender.is_empty() {
        return None;
    }

    let timestamp = NaiveDateTime::parse_from_str(&caps[1], TIMESTAMP_FORMAT).ok()?;

    Some(ChatMessage {
        timestamp,
        sender: sender.to_string(),
        content: caps[3].trim().to_string(),
    })
}

/// parses an exported chat into messages, dropping every unrecognized line.
///
/// continuation lines of multi-line messages carry no timestamp and are dropped
/// as well; they are not appended to the previous message.
pub fn parse_chat(raw_text: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::new();
    let mut skipped = 0usize;

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(message) => messages.push(message),
            None => skipped += 1,
        }
    }

    debug!(
        "Parsed {} chat messages ({} lines skipped)",
        messages.len(),
        skipped
    );
    messages
}

/// like [`parse_chat`] but treats an empty result as a request failure
pub fn parse_non_empty(raw_text: &str) -> Result<Vec<ChatMessage>, AnalysisError> {
    let messages = parse_chat(raw_text);
    if messages.is_empty() {
        return Err(AnalysisError::NoMessages);
    }
    Ok(messages)
}

/// renders messages back into the export line format for the LLM
pub fn format_for_llm(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            format!(
                "[{}] {}: {}",
                msg.timestamp.format(TIMESTAMP_FORMAT),
                msg.sender,
                msg.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// validates an uploaded transcript file and decodes it as UTF-8
pub fn decode_transcript(filename: &str, bytes: Vec<u8>) -> Result<String, AnalysisError> {
    if !filename.ends_with(".txt") {
        return Err(AnalysisError::UnsupportedFile(filename.to_string()));
    }

    String::from_utf8(bytes).map_err(|_| AnalysisError::InvalidEncoding)
}

/// reads a `.txt` export from disk and parses it, failing when no message is recognized
pub fn load_transcript(path: &Path) -> Result<Vec<ChatMessage>, Box<dyn Error + Send + Sync>> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let bytes = fs::read(path)?;
    let text = decode_transcript(filename, bytes)?;
    Ok(parse_non_empty(&text)?)
}
