use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::topic_not_found;
use crate::{
    api::schemas::{ErrorResponse, ValidationErrorResponse},
    auth::{
        adapter::incoming::web::extractors::auth::VerifiedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::{UpsertTopicCommand, UpsertTopicError},
        outgoing::TopicResult,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Every field is optional so that a missing one is reported per field
/// instead of failing deserialization.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpsertTopicRequest {
    #[schema(example = "3f1b7c1e-8a2d-4c4e-9b1a-2f6d5e7c8a90")]
    pub id: Option<String>,
    #[schema(example = "Rust")]
    pub name: Option<String>,
    #[schema(example = "rust")]
    pub slug: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Creates the topic when the id is unused, otherwise updates the caller's
/// live topic in place.
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = String, Path, description = "Topic UUID, usually from /api/topics/create")),
    request_body = UpsertTopicRequest,
    responses(
        (status = 200, description = "Topic saved", body = TopicResult),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "Topic is trashed or owned by someone else", body = ErrorResponse),
        (status = 422, description = "Field validation failed", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}")]
pub async fn upsert_topic_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpsertTopicRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let path_id = path.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match UpsertTopicCommand::new(
        owner,
        &path_id,
        payload.id.as_deref(),
        payload.name.as_deref(),
        payload.slug.as_deref(),
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(&errors),
    };

    // 2️⃣ Execute use case
    match data.topic.upsert.execute(command).await {
        Ok(topic) => ApiResponse::ok(topic),
        Err(err) => map_upsert_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_upsert_topic_error(err: UpsertTopicError) -> HttpResponse {
    match err {
        UpsertTopicError::TopicNotFound => topic_not_found(),
        UpsertTopicError::ValidationFailed(errors) => ApiResponse::validation_failed(&errors),
        UpsertTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to save topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
