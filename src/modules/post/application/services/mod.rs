mod soft_delete_post_service;

pub use soft_delete_post_service::SoftDeletePostService;
