use actix_web::{get, web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::VerifiedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::TopicTemplate,
    AppState,
};

/// Hands out a fresh id with blank fields. Nothing is stored until the
/// template is saved through `POST /api/topics/{id}`.
#[utoipa::path(
    get,
    path = "/api/topics/create",
    tag = "topics",
    responses(
        (status = 200, description = "Blank topic with a fresh id", body = TopicTemplate),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics/create")]
pub async fn new_topic_handler(_user: VerifiedUser, data: web::Data<AppState>) -> impl Responder {
    ApiResponse::ok(data.topic.new_template.execute().await)
}
