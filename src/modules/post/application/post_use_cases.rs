use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::SoftDeletePostUseCase;

#[derive(Clone)]
pub struct PostUseCases {
    pub soft_delete: Arc<dyn SoftDeletePostUseCase + Send + Sync>,
}
