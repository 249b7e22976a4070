mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    IReminderRepo, ITransactionRepo, ITransactionTypeRepo, IUserRepo, Repos, TransactionQuery,
    TransactionStats,
};
pub use services::{Delivery, DisabledTransport, ITransport, TelegramTransport};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct PlazoContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub transport: Arc<dyn ITransport>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl PlazoContext {
    async fn create(params: ContextParams) -> Self {
        let config = Config::new();
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let transport: Arc<dyn ITransport> = match &config.telegram_token {
            Some(token) => Arc::new(TelegramTransport::new(token)),
            None => Arc::new(DisabledTransport),
        };
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            transport,
        }
    }

    /// Context over in-process repositories. Used by tests, which usually
    /// also swap in a fixed clock and a scripted transport.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            transport: Arc::new(DisabledTransport),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> PlazoContext {
    PlazoContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
