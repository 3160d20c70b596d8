// src/modules/topic/adapter/incoming/web/routes/soft_delete_topic.rs
use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use super::topic_not_found;
use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::VerifiedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::SoftDeleteTopicError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Moves the topic to the trash. Its slug and post links are kept.
#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = String, Path, description = "Topic UUID")),
    responses(
        (status = 204, description = "Topic trashed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/topics/{topic_id}")]
pub async fn soft_delete_topic_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(topic_id) = Uuid::parse_str(&path.into_inner()) else {
        return topic_not_found();
    };
    let owner = UserId::from(user.user_id);

    match data.topic.soft_delete.execute(owner, topic_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_soft_delete_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_soft_delete_topic_error(err: SoftDeleteTopicError) -> HttpResponse {
    match err {
        SoftDeleteTopicError::TopicNotFound => topic_not_found(),
        SoftDeleteTopicError::DatabaseError(msg) => {
            tracing::error!("Failed to delete topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
