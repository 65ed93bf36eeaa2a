use axum::extract::Multipart;
use axum::Json;
use log::{info, warn};
use serde::Serialize;

use crate::chat_parser::{self, ChatMessage};
use crate::errors::AnalysisError;

pub const FILE_FIELD: &str = "file";

#[derive(Serialize, Debug)]
pub struct UploadResponse {
    pub status: &'static str,
    pub message_count: usize,
    pub messages: Vec<ChatMessage>,
}

pub struct UploadHandler;

impl UploadHandler {
    pub async fn handle(multipart: Multipart) -> Result<Json<UploadResponse>, AnalysisError> {
        match Self::parse_upload(multipart).await {
            Ok(messages) => {
                info!("Parsed {} messages from uploaded chat", messages.len());
                Ok(Json(UploadResponse {
                    status: "success",
                    message_count: messages.len(),
                    messages,
                }))
            }
            Err(e) => {
                warn!("Rejected chat upload: {}", e);
                Err(e)
            }
        }
    }

    async fn parse_upload(mut multipart: Multipart) -> Result<Vec<ChatMessage>, AnalysisError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AnalysisError::Multipart(e.body_text()))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AnalysisError::Multipart(e.body_text()))?;

            let text = chat_parser::decode_transcript(&filename, bytes.to_vec())?;
            return chat_parser::parse_non_empty(&text);
        }

        Err(AnalysisError::MissingFile)
    }
}
