use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, TopicListPage, ValidationErrorResponse};
use crate::topic::adapter::incoming::web::routes::{SyncTopicPostsRequest, UpsertTopicRequest};
use crate::topic::application::ports::incoming::use_cases::{TopicPosts, TopicTemplate};
use crate::topic::application::ports::outgoing::{
    SyncOutcome, TopicListItem, TopicPostItem, TopicResult, TrashedTopicItem,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Topic Admin API",
        version = "1.0.0",
        description = "Admin API for topics and their posts"
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::new_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_trashed_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_handler,
        crate::topic::adapter::incoming::web::routes::upsert_topic_handler,
        crate::topic::adapter::incoming::web::routes::soft_delete_topic_handler,
        crate::topic::adapter::incoming::web::routes::restore_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_posts_handler,
        crate::topic::adapter::incoming::web::routes::sync_topic_posts_handler,

        // Post endpoints
        crate::post::adapter::incoming::web::routes::soft_delete_post_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            ValidationErrorResponse,

            // Topic DTOs
            TopicListPage,
            TopicListItem,
            TopicTemplate,
            TopicResult,
            TrashedTopicItem,
            UpsertTopicRequest,
            TopicPosts,
            TopicPostItem,
            SyncTopicPostsRequest,
            SyncOutcome
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic management endpoints"),
        (name = "posts", description = "Post management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}

/// Swagger UI under `/swagger-ui/`, backed by the document at `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
}
