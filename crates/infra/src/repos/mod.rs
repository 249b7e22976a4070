mod reminder;
mod shared;
mod transaction;
mod transaction_type;
mod user;

use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
pub use reminder::{IReminderRepo, ReminderCollection};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use transaction::{InMemoryTransactionRepo, PostgresTransactionRepo, TransactionCollection};
pub use transaction::ITransactionRepo;
use transaction_type::{InMemoryTransactionTypeRepo, PostgresTransactionTypeRepo};
pub use transaction_type::ITransactionTypeRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};
pub use user::IUserRepo;

pub use shared::query_structs::*;

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub transaction_types: Arc<dyn ITransactionTypeRepo>,
    pub transactions: Arc<dyn ITransactionRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            transaction_types: Arc::new(PostgresTransactionTypeRepo::new(pool.clone())),
            transactions: Arc::new(PostgresTransactionRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        // The transaction and reminder repos share their collections so that
        // record writes and reminder materialisation stay one atomic step,
        // as they are within a postgres transaction.
        let transactions: TransactionCollection = Default::default();
        let reminders: ReminderCollection = Default::default();
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            transaction_types: Arc::new(InMemoryTransactionTypeRepo::new()),
            transactions: Arc::new(InMemoryTransactionRepo::new(
                transactions.clone(),
                reminders.clone(),
            )),
            reminders: Arc::new(InMemoryReminderRepo::new(reminders, transactions)),
        }
    }
}
