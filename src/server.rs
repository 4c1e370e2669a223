//! HTTP route in front of the pipeline.
//!
//! `GET /emotionDetector?text=...` answers with the summary sentence, 400 for
//! blank or rejected text, and 500 when the emotion service fails.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;

use crate::model::profile::AnalysisResult;
use crate::pipeline::{EmotionAnalyzer, run_pipeline};
use crate::report::text::{INVALID_TEXT_MESSAGE, UNAVAILABLE_MESSAGE, render_summary_text};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn router(analyzer: Arc<EmotionAnalyzer>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/emotionDetector", get(detect_handler))
        .with_state(analyzer)
}

pub async fn serve(analyzer: Arc<EmotionAnalyzer>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        endpoint = %analyzer.config().endpoint,
        schema = %analyzer.config().schema,
        "emotion detector listening"
    );
    axum::serve(listener, router(analyzer)).await
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn detect_handler(
    State(analyzer): State<Arc<EmotionAnalyzer>>,
    Query(params): Query<Vec<(String, String)>>,
) -> (StatusCode, String) {
    // repeated `text` parameters: the first one wins
    let text = params
        .iter()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.as_str());
    match run_pipeline(&analyzer, text).await {
        Ok(AnalysisResult::Scored(profile)) => (StatusCode::OK, render_summary_text(&profile)),
        Ok(AnalysisResult::NoResult(reason)) => {
            tracing::info!(reason = reason.describe(), "no emotion result");
            (StatusCode::BAD_REQUEST, INVALID_TEXT_MESSAGE.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "emotion analysis failed");
            (err.status_code(), UNAVAILABLE_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/server.rs"]
mod tests;
