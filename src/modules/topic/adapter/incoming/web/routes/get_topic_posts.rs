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
    topic::application::ports::incoming::use_cases::{GetTopicPostsError, TopicPosts},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/posts",
    tag = "topics",
    params(("topic_id" = String, Path, description = "Topic UUID")),
    responses(
        (status = 200, description = "Live posts linked to the topic", body = TopicPosts),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics/{topic_id}/posts")]
pub async fn get_topic_posts_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(topic_id) = Uuid::parse_str(&path.into_inner()) else {
        return topic_not_found();
    };
    let owner = UserId::from(user.user_id);

    match data.topic.get_posts.execute(owner, topic_id).await {
        Ok(posts) => ApiResponse::ok(posts),
        Err(err) => map_get_topic_posts_error(err),
    }
}

fn map_get_topic_posts_error(err: GetTopicPostsError) -> HttpResponse {
    match err {
        GetTopicPostsError::TopicNotFound => topic_not_found(),
        GetTopicPostsError::QueryFailed(msg) => {
            tracing::error!("Failed to list topic posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
