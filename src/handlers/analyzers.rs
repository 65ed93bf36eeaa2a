use axum::Json;
use serde::Serialize;

use crate::analyzers::{self, AnalyzerInfo};

#[derive(Serialize)]
pub struct AnalyzerList {
    pub analyzers: Vec<AnalyzerInfo>,
}

/// lists exactly the registry's analyzers
pub async fn list_analyzers() -> Json<AnalyzerList> {
    Json(AnalyzerList {
        analyzers: analyzers::list(),
    })
}
