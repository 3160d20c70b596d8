use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, TopicListPage},
    auth::adapter::incoming::web::extractors::auth::VerifiedUser,
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::GetTopicsError, outgoing::PageRequest,
    },
    AppState,
};

/// Unparseable values fall back to the defaults rather than failing the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopicListQuery {
    /// 1-based page number (default 1)
    #[param(value_type = Option<u64>)]
    page: Option<String>,
    /// Page size (default 15, max 100)
    #[param(value_type = Option<u64>)]
    per_page: Option<String>,
}

impl TopicListQuery {
    fn to_page_request(&self) -> PageRequest {
        let parse = |raw: &Option<String>| raw.as_deref().and_then(|v| v.trim().parse().ok());
        PageRequest::new(parse(&self.page), parse(&self.per_page))
    }
}

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    params(TopicListQuery),
    responses(
        (status = 200, description = "Live topics, newest first", body = TopicListPage),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics")]
pub async fn get_topics_handler(
    _user: VerifiedUser,
    data: web::Data<AppState>,
    query: web::Query<TopicListQuery>,
) -> impl Responder {
    match data.topic.get_list.execute(query.to_page_request()).await {
        Ok(page) => ApiResponse::ok(page),
        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> HttpResponse {
    match err {
        GetTopicsError::QueryFailed(msg) => {
            tracing::error!("Failed to list topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
