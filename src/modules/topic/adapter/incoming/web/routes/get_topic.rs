use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use super::topic_not_found;
use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::VerifiedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    topic::application::ports::{incoming::use_cases::GetTopicError, outgoing::TopicResult},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = String, Path, description = "Topic UUID")),
    responses(
        (status = 200, description = "Topic owned by the caller", body = TopicResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics/{topic_id}")]
pub async fn get_topic_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(topic_id) = Uuid::parse_str(&path.into_inner()) else {
        return topic_not_found();
    };
    let owner = UserId::from(user.user_id);

    match data.topic.get_single.execute(owner, topic_id).await {
        Ok(topic) => ApiResponse::ok(topic),
        Err(err) => map_get_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_get_topic_error(err: GetTopicError) -> HttpResponse {
    match err {
        GetTopicError::TopicNotFound => topic_not_found(),
        GetTopicError::QueryFailed(msg) => {
            tracing::error!("Failed to fetch topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
