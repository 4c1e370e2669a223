use super::*;
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use tracing_test::traced_test;

use crate::model::emotion::Emotion;
use crate::remote::ResponseSchema;
use crate::test_support::{
    MockReply, document_sentiment_body, predictions_body, start_mock_remote,
};

#[tokio::test]
async fn test_dominant_emotion_scenarios() {
    let cases = [
        ("I am glad this happened", predictions_body(0.01, 0.01, 0.02, 0.96, 0.04), Emotion::Joy),
        ("I am really mad about this", predictions_body(0.88, 0.05, 0.02, 0.01, 0.04), Emotion::Anger),
        ("I feel disgusted just hearing about this", predictions_body(0.10, 0.77, 0.03, 0.01, 0.09), Emotion::Disgust),
        ("I am so sad about this", predictions_body(0.02, 0.01, 0.05, 0.02, 0.91), Emotion::Sadness),
        ("I am really afraid that this will happen", predictions_body(0.03, 0.01, 0.93, 0.01, 0.06), Emotion::Fear),
    ];

    for (text, body, expected) in cases {
        let mock = start_mock_remote(MockReply::Json(StatusCode::OK, body)).await;
        let analyzer = mock.analyzer(ResponseSchema::EmotionPredictions);
        let result = run_pipeline(&analyzer, Some(text)).await.unwrap();
        assert_eq!(result.dominant(), Some(expected), "Failed for input: '{text}'");
        assert_eq!(mock.hits(), 1);
    }
}

#[tokio::test]
async fn test_blank_input_never_calls_remote() {
    let mock = start_mock_remote(MockReply::Json(
        StatusCode::OK,
        predictions_body(0.1, 0.1, 0.1, 0.9, 0.1),
    ))
    .await;
    let analyzer = mock.analyzer(ResponseSchema::EmotionPredictions);

    for text in [None, Some(""), Some("   "), Some("\n\t")] {
        let result = run_pipeline(&analyzer, text).await.unwrap();
        assert_eq!(result, AnalysisResult::NoResult(NoResultReason::BlankInput));
    }
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn test_remote_rejection_matches_blank_shape() {
    let mock = start_mock_remote(MockReply::Raw(StatusCode::BAD_REQUEST, String::new())).await;
    let analyzer = mock.analyzer(ResponseSchema::EmotionPredictions);

    let result = run_pipeline(&analyzer, Some("@@@")).await.unwrap();
    assert_eq!(result, AnalysisResult::NoResult(NoResultReason::RemoteRejected));
    assert!(result.profile().is_none());
    assert_eq!(mock.hits(), 1);
}

#[tokio::test]
async fn test_timeout_is_unavailable_not_no_result() {
    let mock = start_mock_remote(MockReply::Delay(
        Duration::from_secs(3),
        predictions_body(0.1, 0.1, 0.1, 0.9, 0.1),
    ))
    .await;
    let analyzer =
        mock.analyzer_with_timeout(ResponseSchema::EmotionPredictions, Duration::from_millis(200));

    let err = run_pipeline(&analyzer, Some("I am glad this happened"))
        .await
        .unwrap_err();
    match err {
        AnalysisError::Unavailable { reason, .. } => {
            assert!(reason.contains("timed out"), "{reason}");
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_fear_defaults_to_zero() {
    let body = json!({
        "emotionPredictions": [{
            "emotion": {"anger": 0.2, "disgust": 0.1, "joy": 0.3, "sadness": 0.25}
        }]
    });
    let mock = start_mock_remote(MockReply::Json(StatusCode::OK, body)).await;
    let analyzer = mock.analyzer(ResponseSchema::EmotionPredictions);

    let result = run_pipeline(&analyzer, Some("I am not sure")).await.unwrap();
    let profile = result.profile().unwrap();
    assert_eq!(profile.scores().fear, 0.0);
    assert_eq!(profile.dominant(), Emotion::Joy);
}

#[tokio::test]
async fn test_document_sentiment_schema() {
    let body = document_sentiment_body(json!({
        "anger": 0.01, "disgust": 0.02, "fear": 0.03, "joy": 0.97, "sadness": 0.05
    }));
    let mock = start_mock_remote(MockReply::Json(StatusCode::OK, body)).await;
    let analyzer = mock.analyzer(ResponseSchema::DocumentSentiment);

    let result = run_pipeline(&analyzer, Some("I love my life")).await.unwrap();
    assert_eq!(result.dominant(), Some(Emotion::Joy));
}

#[tokio::test]
async fn test_pointer_schema() {
    let body = json!({"result": {"docs": [{"emotion": {"sadness": 0.8, "joy": 0.1}}]}});
    let mock = start_mock_remote(MockReply::Json(StatusCode::OK, body)).await;
    let analyzer = mock.analyzer(ResponseSchema::Pointer("/result/docs/0/emotion".to_string()));

    let result = run_pipeline(&analyzer, Some("so sad")).await.unwrap();
    assert_eq!(result.dominant(), Some(Emotion::Sadness));
}

#[tokio::test]
async fn test_wrong_schema_is_malformed_not_zero_scores() {
    let mock = start_mock_remote(MockReply::Json(
        StatusCode::OK,
        json!({"emotionPredictions": []}),
    ))
    .await;
    let analyzer = mock.analyzer(ResponseSchema::EmotionPredictions);

    let err = run_pipeline(&analyzer, Some("hello")).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_non_json_success_body_is_malformed() {
    let mock = start_mock_remote(MockReply::Raw(StatusCode::OK, "OK".to_string())).await;
    let analyzer = mock.analyzer(ResponseSchema::EmotionPredictions);

    let err = run_pipeline(&analyzer, Some("hello")).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_concurrent_calls_share_analyzer() {
    let mock = start_mock_remote(MockReply::Json(
        StatusCode::OK,
        predictions_body(0.1, 0.1, 0.1, 0.1, 0.7),
    ))
    .await;
    let analyzer = std::sync::Arc::new(mock.analyzer(ResponseSchema::EmotionPredictions));

    let mut handles = Vec::new();
    for i in 0..8 {
        let analyzer = std::sync::Arc::clone(&analyzer);
        handles.push(tokio::spawn(async move {
            let text = format!("message {i}");
            run_pipeline(&analyzer, Some(text.as_str())).await
        }));
    }
    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.dominant(), Some(Emotion::Sadness));
    }
    assert_eq!(mock.hits(), 8);
}

#[tokio::test]
#[traced_test]
async fn test_malformed_response_logged_as_warning_only() {
    let mock = start_mock_remote(MockReply::Json(
        StatusCode::OK,
        json!({"documentSentiment": {}}),
    ))
    .await;
    let analyzer = mock.analyzer(ResponseSchema::DocumentSentiment);

    let err = run_pipeline(&analyzer, Some("hello")).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse { .. }));
    assert!(logs_contain("did not match the expected schema"));
    assert!(logs_contain("WARN"));
    assert!(!logs_contain("ERROR"));
}
