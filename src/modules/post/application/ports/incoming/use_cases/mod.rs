mod soft_delete_post_use_case;

pub use soft_delete_post_use_case::{SoftDeletePostError, SoftDeletePostUseCase};
