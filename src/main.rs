use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use sweetrecipe::application::{
    ports::{security::PasswordHasher, sessions::SessionStore, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use sweetrecipe::config::AppConfig;
use sweetrecipe::domain::{
    category::CategoryRepository,
    comment::CommentRepository,
    dessert::{DessertReadRepository, DessertWriteRepository},
    profile::ProfileRepository,
    user::UserRepository,
};
use sweetrecipe::infrastructure::{
    database,
    repositories::{
        PostgresCategoryRepository, PostgresCommentRepository, PostgresDessertRepository,
        PostgresProfileRepository, PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, InMemorySessionStore},
    time::SystemClock,
    util::TransliteratingSlugGenerator,
};
use sweetrecipe::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let profile_repo: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));
    let dessert_repo = PostgresDessertRepository::new(pool.clone());
    let dessert_write_repo: Arc<dyn DessertWriteRepository> = Arc::new(dessert_repo.clone());
    let dessert_read_repo: Arc<dyn DessertReadRepository> = Arc::new(dessert_repo);
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));

    let hasher = config.hasher();
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new(
        hasher.memory_kib,
        hasher.iterations,
        hasher.parallelism,
    )?);
    let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TransliteratingSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        profile_repo,
        dessert_write_repo,
        dessert_read_repo,
        category_repo,
        comment_repo,
        password_hasher,
        session_store,
        clock,
        slugger,
        config.session_ttl(),
    ));

    let app = build_router(HttpState::new(services), config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
