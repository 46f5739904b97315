//! HTTP surface: feedback batches, comments and the cumulative report.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::classifier::{AnalysisResult, SurpriseClassifier};
use crate::config::Config;
use crate::error::{ApiError, ErrorBody};
use crate::store::{CommentRecord, CommentStore, FeedbackRecord, FeedbackStore};
use crate::summary::{summarize, CumulativeSummary, SummaryReport};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NLP Feedback API",
        description = "API for processing user feedback and detecting surprise sentiment."
    ),
    paths(submit_feedback_batch, add_comment, get_report),
    components(
        schemas(
            FeedbackItem,
            FeedbackBatchRequest,
            BatchResponse,
            CommentRequest,
            CommentResponse,
            ReportResponse,
            ErrorBody,
            FeedbackRecord,
            CommentRecord,
            AnalysisResult,
            SummaryReport,
            CumulativeSummary
        )
    ),
    tags(
        (name = "feedback", description = "Feedback and comment intake"),
        (name = "report", description = "Cumulative statistics")
    )
)]
pub struct ApiDoc;

/// Shared by every handler; the two logs are the only mutable state.
pub struct AppState {
    pub classifier: SurpriseClassifier,
    pub feedback: FeedbackStore,
    pub comments: CommentStore,
}

impl AppState {
    pub fn new(classifier: SurpriseClassifier, feedback: FeedbackStore, comments: CommentStore) -> Self {
        Self {
            classifier,
            feedback,
            comments,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SurpriseClassifier::default(),
            FeedbackStore::new(config.feedback_capacity),
            CommentStore::new(config.comment_capacity),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

// Request bodies are validated by hand from `Value` (see `parse_batch`) so the
// error messages stay exact; these types only describe the schema.
#[derive(Debug, Clone, ToSchema)]
pub struct FeedbackItem {
    #[schema(example = "alice")]
    pub user: String,
    #[schema(example = "Wow, that's amazing!")]
    pub message: String,
}

#[derive(Debug, ToSchema)]
pub struct FeedbackBatchRequest {
    pub feedbacks: Vec<FeedbackItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchResponse {
    #[schema(example = "Batch feedback processed")]
    pub message: String,
    pub summary: SummaryReport,
    pub data: Vec<FeedbackRecord>,
}

#[derive(Debug, ToSchema)]
pub struct CommentRequest {
    #[schema(example = "bob")]
    pub user: String,
    #[schema(example = "Please add dark mode")]
    pub comment: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    #[schema(example = "Comment added")]
    pub message: String,
    pub data: CommentRecord,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    pub summary: CumulativeSummary,
    pub feedbacks: Vec<FeedbackRecord>,
    pub comments: Vec<CommentRecord>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/feedback-batch", post(submit_feedback_batch))
        .route("/comment", post(add_comment))
        .route("/report", get(get_report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Validates the whole batch before anything is classified or stored.
fn parse_batch(body: &Value) -> Result<Vec<FeedbackItem>, ApiError> {
    let items = body
        .get("feedbacks")
        .and_then(Value::as_array)
        .ok_or(ApiError::FeedbacksNotArray)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let field = |name: &str| item.get(name).and_then(Value::as_str).map(str::to_string);
            match (field("user"), field("message")) {
                (Some(user), Some(message)) => Ok(FeedbackItem { user, message }),
                _ => Err(ApiError::InvalidFeedback(index)),
            }
        })
        .collect()
}

/// Both fields must be non-empty strings.
fn parse_comment(body: &Value) -> Result<CommentRequest, ApiError> {
    let field = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    match (field("user"), field("comment")) {
        (Some(user), Some(comment)) => Ok(CommentRequest { user, comment }),
        _ => Err(ApiError::MissingUserOrComment),
    }
}

#[utoipa::path(
    post,
    path = "/feedback-batch",
    tag = "feedback",
    request_body = FeedbackBatchRequest,
    responses(
        (status = 201, description = "Batch feedback processed with summary", body = BatchResponse),
        (status = 400, description = "Malformed batch", body = ErrorBody),
        (status = 503, description = "Feedback store is full", body = ErrorBody)
    )
)]
pub async fn submit_feedback_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BatchResponse>), ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::MalformedBody(e.body_text()))?;
    let items = parse_batch(&body)?;

    let records: Vec<FeedbackRecord> = items
        .into_iter()
        .map(|item| {
            let analysis = state.classifier.classify(&item.message);
            debug!(user = %item.user, surprise = analysis.surprise, "analyzed feedback");
            FeedbackRecord::new(item.user, item.message, analysis)
        })
        .collect();

    let summary = summarize(records.iter().map(|r| &r.analysis));
    state
        .feedback
        .append_all(records.clone())
        .map_err(ApiError::FeedbackStoreFull)?;

    info!(
        total = summary.total,
        surprises = summary.surprise_count,
        stored = state.feedback.len(),
        "processed feedback batch"
    );

    Ok((
        StatusCode::CREATED,
        Json(BatchResponse {
            message: "Batch feedback processed".to_string(),
            summary,
            data: records,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/comment",
    tag = "feedback",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added", body = CommentResponse),
        (status = 400, description = "Missing user or comment", body = ErrorBody),
        (status = 503, description = "Comment store is full", body = ErrorBody)
    )
)]
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::MalformedBody(e.body_text()))?;
    let request = parse_comment(&body)?;

    let record = CommentRecord::new(request.user, request.comment);
    state
        .comments
        .append(record.clone())
        .map_err(ApiError::CommentStoreFull)?;

    info!(user = %record.user, "comment added");

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            message: "Comment added".to_string(),
            data: record,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/report",
    tag = "report",
    responses(
        (status = 200, description = "Cumulative summary with every stored feedback and comment", body = ReportResponse)
    )
)]
pub async fn get_report(State(state): State<Arc<AppState>>) -> Json<ReportResponse> {
    // summary and listing come from the same snapshot
    let feedbacks = state.feedback.snapshot();
    let comments = state.comments.snapshot();
    let summary = summarize(feedbacks.iter().map(|f| &f.analysis));

    Json(ReportResponse {
        summary: summary.into(),
        feedbacks,
        comments,
    })
}
