mod get_topic;
mod get_topic_posts;
mod get_topics;
mod get_trashed_topics;
mod new_topic;
mod restore_topic;
mod soft_delete_topic;
mod sync_topic_posts;
mod upsert_topic;

pub use get_topic::*;
pub use get_topic_posts::*;
pub use get_topics::*;
pub use get_trashed_topics::*;
pub use new_topic::*;
pub use restore_topic::*;
pub use soft_delete_topic::*;
pub use sync_topic_posts::*;
pub use upsert_topic::*;

use actix_web::HttpResponse;

use crate::shared::api::ApiResponse;

/// Missing, malformed, trashed and foreign topics all answer the same way.
fn topic_not_found() -> HttpResponse {
    ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
}
