pub mod posts_topics;
pub mod topics;
