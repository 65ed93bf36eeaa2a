use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::{error, info, warn};
use std::sync::Arc;

use crate::analysis_result::{AnalysisRequest, AnalysisResponse};
use crate::analyzers;
use crate::chat_parser;
use crate::errors::AnalysisError;
use crate::server::AppState;

pub struct AnalyzeHandler;

impl AnalyzeHandler {
    pub async fn handle(
        State(state): State<Arc<AppState>>,
        payload: Result<Json<AnalysisRequest>, JsonRejection>,
    ) -> Result<Json<AnalysisResponse>, AnalysisError> {
        let Json(request) =
            payload.map_err(|rejection| AnalysisError::InvalidRequest(rejection.body_text()))?;

        match Self::run(&state, &request).await {
            Ok(response) => Ok(Json(response)),
            Err(e) if e.is_client_error() => {
                warn!("Rejected {} analysis request: {}", request.analyzer_type, e);
                Err(e)
            }
            Err(e) => {
                error!("{} analysis failed: {}", request.analyzer_type, e);
                Err(e)
            }
        }
    }

    async fn run(
        state: &AppState,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let profile = analyzers::resolve(&request.analyzer_type)?;

        let messages = chat_parser::parse_non_empty(&request.chat_content)?;
        info!(
            "Running {} analysis over {} messages",
            profile.id,
            messages.len()
        );

        let transcript = chat_parser::format_for_llm(&messages);
        let outcome = profile
            .analyze(state.gateway.as_ref(), state.result_shape, &transcript)
            .await?;

        Ok(AnalysisResponse::success(outcome))
    }
}
