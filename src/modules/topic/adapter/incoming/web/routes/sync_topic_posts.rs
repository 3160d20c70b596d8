use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::topic_not_found;
use crate::{
    api::schemas::{ErrorResponse, ValidationErrorResponse},
    auth::{
        adapter::incoming::web::extractors::auth::VerifiedUser,
        application::domain::entities::UserId,
    },
    shared::{api::ApiResponse, validation::FieldErrors},
    topic::application::ports::{
        incoming::use_cases::{SyncTopicPostsCommand, SyncTopicPostsError},
        outgoing::SyncOutcome,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// The complete set of posts the topic should end up linked to.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SyncTopicPostsRequest {
    #[schema(example = json!(["0b8f6a52-4f3e-4d7b-a6c1-1d2e3f4a5b6c"]))]
    pub post_ids: Option<Vec<String>>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    put,
    path = "/api/topics/{topic_id}/posts",
    tag = "topics",
    params(("topic_id" = String, Path, description = "Topic UUID")),
    request_body = SyncTopicPostsRequest,
    responses(
        (status = 200, description = "Links replaced", body = SyncOutcome),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 422, description = "Unknown or deleted posts", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/topics/{topic_id}/posts")]
pub async fn sync_topic_posts_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<SyncTopicPostsRequest>,
) -> impl Responder {
    let Ok(topic_id) = Uuid::parse_str(&path.into_inner()) else {
        return topic_not_found();
    };
    let owner = UserId::from(user.user_id);

    let command = match SyncTopicPostsCommand::new(owner, topic_id, payload.into_inner().post_ids)
    {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(&errors),
    };

    match data.topic.sync_posts.execute(command).await {
        Ok(outcome) => ApiResponse::ok(outcome),
        Err(err) => map_sync_topic_posts_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_sync_topic_posts_error(err: SyncTopicPostsError) -> HttpResponse {
    match err {
        SyncTopicPostsError::TopicNotFound => topic_not_found(),
        SyncTopicPostsError::UnknownPosts(ids) => {
            let mut errors = FieldErrors::default();
            for id in ids {
                errors.add("post_ids", format!("The post {id} does not exist."));
            }
            ApiResponse::validation_failed(&errors)
        }
        SyncTopicPostsError::RepositoryError(msg) => {
            tracing::error!("Failed to sync topic posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
