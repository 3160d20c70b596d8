pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::post;
pub use modules::topic;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::config::AppConfig;
use crate::post::adapter::outgoing::PostRepositoryPostgres;
use crate::post::application::{post_use_cases::PostUseCases, services::SoftDeletePostService};
use crate::shared::api::custom_json_config;
use crate::topic::adapter::outgoing::{
    TopicPostRepositoryPostgres, TopicQueryPostgres, TopicRepositoryPostgres,
};
use crate::topic::application::services::{
    GetTopicPostsService, GetTopicService, GetTopicsService, GetTrashedTopicsService,
    NewTopicService, RestoreTopicService, SoftDeleteTopicService, SyncTopicPostsService,
    UpsertTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};

use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
    pub post: PostUseCases,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{context}: {e}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load().map_err(|e| startup_error("Invalid configuration", e))?;
    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("Invalid JWT config", e))?;

    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error("Failed to run migrations", e))?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Topic components
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let topic_post_repo = TopicPostRepositoryPostgres::new(Arc::clone(&db_arc));

    let topic = TopicUseCases {
        get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
        new_template: Arc::new(NewTopicService::new()),
        get_single: Arc::new(GetTopicService::new(topic_query.clone())),
        upsert: Arc::new(UpsertTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
        )),
        soft_delete: Arc::new(SoftDeleteTopicService::new(topic_repo.clone())),
        get_trashed: Arc::new(GetTrashedTopicsService::new(topic_query.clone())),
        restore: Arc::new(RestoreTopicService::new(topic_repo)),
        get_posts: Arc::new(GetTopicPostsService::new(topic_query)),
        sync_posts: Arc::new(SyncTopicPostsService::new(topic_post_repo)),
    };

    // Post components
    let post = PostUseCases {
        soft_delete: Arc::new(SoftDeletePostService::new(PostRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
    };

    let state = AppState { topic, post };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

/// `/api/topics/create` and `/api/topics/trashed` must be registered before
/// `/api/topics/{topic_id}` or the path segment would swallow them.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::post::adapter::incoming::web::routes as post_routes;
    use crate::topic::adapter::incoming::web::routes as topic_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // API docs
    cfg.service(crate::api::openapi::swagger_ui());
    // Topics
    cfg.service(topic_routes::get_topics_handler);
    cfg.service(topic_routes::new_topic_handler);
    cfg.service(topic_routes::get_trashed_topics_handler);
    cfg.service(topic_routes::get_topic_handler);
    cfg.service(topic_routes::upsert_topic_handler);
    cfg.service(topic_routes::soft_delete_topic_handler);
    cfg.service(topic_routes::restore_topic_handler);
    cfg.service(topic_routes::get_topic_posts_handler);
    cfg.service(topic_routes::sync_topic_posts_handler);
    // Posts
    cfg.service(post_routes::soft_delete_post_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
