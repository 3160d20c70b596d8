use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::VerifiedUser,
        application::domain::entities::UserId,
    },
    post::application::ports::incoming::use_cases::SoftDeletePostError,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = String, Path, description = "Post UUID")),
    responses(
        (status = 204, description = "Post deleted and detached from every topic"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/posts/{post_id}")]
pub async fn soft_delete_post_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(post_id) = Uuid::parse_str(&path.into_inner()) else {
        return post_not_found();
    };
    let owner = UserId::from(user.user_id);

    match data.post.soft_delete.execute(owner, post_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_soft_delete_post_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn post_not_found() -> HttpResponse {
    ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
}

fn map_soft_delete_post_error(err: SoftDeletePostError) -> HttpResponse {
    match err {
        SoftDeletePostError::PostNotFound => post_not_found(),
        SoftDeletePostError::DatabaseError(msg) => {
            tracing::error!("Failed to delete post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
