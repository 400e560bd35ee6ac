use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use todo_service::config::Config;
use todo_service::domain::authentication::service::AuthService;
use todo_service::domain::task::service::TaskService;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;
use todo_service::inbound::http::router::AppState;
use todo_service::outbound::repositories::InMemoryTaskRepository;
use todo_service::outbound::repositories::InMemoryUserRepository;
use todo_service::outbound::repositories::PostgresTaskRepository;
use todo_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "todo-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        database = config.database.url.is_some(),
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let state = match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
            let task_repository = Arc::new(PostgresTaskRepository::new(pg_pool));

            AppState {
                auth_service: Arc::new(AuthService::new(
                    Arc::clone(&user_repository),
                    Arc::clone(&authenticator),
                )),
                user_service: Arc::new(UserService::new(user_repository)),
                task_service: Arc::new(TaskService::new(task_repository)),
                authenticator,
            }
        }
        None => {
            tracing::warn!("No database.url configured, data is kept in memory only");

            let user_repository = Arc::new(InMemoryUserRepository::new());
            let task_repository = Arc::new(InMemoryTaskRepository::new());

            AppState {
                auth_service: Arc::new(AuthService::new(
                    Arc::clone(&user_repository),
                    Arc::clone(&authenticator),
                )),
                user_service: Arc::new(UserService::new(user_repository)),
                task_service: Arc::new(TaskService::new(task_repository)),
                authenticator,
            }
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
