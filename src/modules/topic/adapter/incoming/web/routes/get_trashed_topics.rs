use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::VerifiedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::GetTrashedTopicsError, outgoing::TrashedTopicItem,
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/topics/trashed",
    tag = "topics",
    responses(
        (status = 200, description = "Caller's trashed topics, most recently deleted first", body = [TrashedTopicItem]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics/trashed")]
pub async fn get_trashed_topics_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.topic.get_trashed.execute(owner).await {
        Ok(items) => ApiResponse::ok(items),
        Err(err) => map_get_trashed_topics_error(err),
    }
}

fn map_get_trashed_topics_error(err: GetTrashedTopicsError) -> HttpResponse {
    match err {
        GetTrashedTopicsError::QueryFailed(msg) => {
            tracing::error!("Failed to list trashed topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
