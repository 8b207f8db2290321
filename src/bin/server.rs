//! Taskledger HTTP server.
//!
//! Wires explicit configuration, the `PostgreSQL` repositories, and the
//! REST router into a running service. Secrets come from the environment
//! (`DATABASE_URL`, `SESSION_SECRET`); everything else is a CLI flag.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Duration;
use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use eyre::WrapErr;
use mockable::DefaultClock;
use taskledger::config::{Config, DEFAULT_TOKEN_TTL_SECS, SessionConfig};
use taskledger::identity::adapters::postgres::PostgresCredentialRepository;
use taskledger::rest::{self, AppState};
use taskledger::task::adapters::postgres::PostgresTaskRepository;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "taskledger-server", about = "Task-tracking API server")]
struct Args {
    /// Socket address to bind.
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Session token lifetime in seconds.
    #[arg(long, default_value_t = DEFAULT_TOKEN_TTL_SECS)]
    token_ttl_secs: i64,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let database_url = env::var("DATABASE_URL").wrap_err("DATABASE_URL must be set")?;
    let signing_secret = env::var("SESSION_SECRET").wrap_err("SESSION_SECRET must be set")?;

    let config = Config {
        bind_addr: args.bind,
        database_url,
        session: SessionConfig::new(signing_secret, Duration::seconds(args.token_ttl_secs)),
    };

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder()
        .build(manager)
        .wrap_err("failed to build database connection pool")?;

    let credential_repository = Arc::new(PostgresCredentialRepository::new(pool.clone()));
    let task_repository = Arc::new(PostgresTaskRepository::new(pool));
    let clock = Arc::new(DefaultClock);

    let state = Arc::new(AppState::new(
        credential_repository,
        task_repository,
        &config.session,
        clock,
    )?);
    let app = rest::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
