use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::store::StoreError;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Feedbacks must be an array")]
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Feedbacks must be an array")]
    FeedbacksNotArray,
    #[error("Feedback at index {0} must have a string user and message")]
    InvalidFeedback(usize),
    #[error("Missing user or comment")]
    MissingUserOrComment,
    #[error("{0}")]
    MalformedBody(String),
    #[error("Feedback store is full")]
    FeedbackStoreFull(#[source] StoreError),
    #[error("Comment store is full")]
    CommentStoreFull(#[source] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FeedbacksNotArray
            | ApiError::InvalidFeedback(_)
            | ApiError::MissingUserOrComment
            | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::FeedbackStoreFull(_) | ApiError::CommentStoreFull(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::FeedbackStoreFull(source) | ApiError::CommentStoreFull(source) => {
                tracing::warn!(%source, "rejecting append");
            }
            other => tracing::warn!(error = %other, "rejecting request"),
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_bad_request() {
        assert_eq!(ApiError::FeedbacksNotArray.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidFeedback(3).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingUserOrComment.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_capacity_is_unavailable() {
        let err = ApiError::CommentStoreFull(StoreError::CapacityExceeded {
            capacity: 1,
            len: 1,
            requested: 1,
        });
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Comment store is full");
    }

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(ApiError::FeedbacksNotArray.to_string(), "Feedbacks must be an array");
        assert_eq!(
            ApiError::InvalidFeedback(1).to_string(),
            "Feedback at index 1 must have a string user and message"
        );
    }
}
