use actix_web::{post, web, HttpResponse, Responder};
use uuid::Uuid;

use super::topic_not_found;
use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::VerifiedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    topic::application::ports::{incoming::use_cases::RestoreTopicError, outgoing::TopicResult},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/restore",
    tag = "topics",
    params(("topic_id" = String, Path, description = "Topic UUID")),
    responses(
        (status = 200, description = "Topic taken out of the trash", body = TopicResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "No trashed topic with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/restore")]
pub async fn restore_topic_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(topic_id) = Uuid::parse_str(&path.into_inner()) else {
        return topic_not_found();
    };
    let owner = UserId::from(user.user_id);

    match data.topic.restore.execute(owner, topic_id).await {
        Ok(topic) => ApiResponse::ok(topic),
        Err(err) => map_restore_topic_error(err),
    }
}

fn map_restore_topic_error(err: RestoreTopicError) -> HttpResponse {
    match err {
        RestoreTopicError::TopicNotFound => topic_not_found(),
        RestoreTopicError::DatabaseError(msg) => {
            tracing::error!("Failed to restore topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
