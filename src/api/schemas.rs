// src/api/schemas.rs
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::topic::application::ports::outgoing::TopicListItem;

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "TOPIC_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Topic not found")]
    pub message: String,
}

/// 422 body: the standard error plus messages keyed by field.
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
    #[schema(example = json!({ "slug": ["The slug has already been taken."] }))]
    pub errors: BTreeMap<String, Vec<String>>,
}

/// One page of the topic listing.
#[derive(Serialize, ToSchema)]
pub struct TopicListPage {
    pub data: Vec<TopicListItem>,
    #[schema(example = 42)]
    pub total: u64,
    #[schema(example = 1)]
    pub page: u64,
    #[schema(example = 15)]
    pub per_page: u64,
}
