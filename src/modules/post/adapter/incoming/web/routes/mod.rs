mod soft_delete_post;

pub use soft_delete_post::*;
