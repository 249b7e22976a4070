mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::{TransactionQuery, TransactionStats};
use chrono::NaiveDate;
pub use inmemory::{InMemoryTransactionRepo, TransactionCollection};
use plazo_domain::{Reminder, Transaction, ID};
pub use postgres::PostgresTransactionRepo;

#[async_trait::async_trait]
pub trait ITransactionRepo: Send + Sync {
    /// Persists a new transaction together with its planned reminders. The
    /// two writes happen in a single database transaction so that either
    /// both succeed or both roll back.
    async fn insert(&self, transaction: &Transaction, reminders: &[Reminder])
        -> anyhow::Result<()>;
    /// Saves a mutated transaction. When `new_reminders` is given, the
    /// re-plan protocol runs in the same database transaction: every unsent
    /// reminder of this record is dropped and the replacements inserted.
    /// Sent reminders are immutable history and are never touched.
    async fn save(
        &self,
        transaction: &Transaction,
        new_reminders: Option<&[Reminder]>,
    ) -> anyhow::Result<()>;
    async fn find(&self, transaction_id: &ID) -> Option<Transaction>;
    async fn find_many(&self, transaction_ids: &[ID]) -> anyhow::Result<Vec<Transaction>>;
    /// Ordered by end date ascending (absent dates last), ties broken by
    /// creation time descending
    async fn find_by_user(&self, owner_id: i64, query: TransactionQuery) -> Vec<Transaction>;
    /// Case-insensitive substring match over title and description
    async fn search(&self, owner_id: i64, needle: &str) -> Vec<Transaction>;
    /// Soft delete. The reminders stay but are suppressed from dispatch
    async fn delete(&self, transaction_id: &ID) -> Option<Transaction>;
    async fn statistics(
        &self,
        owner_id: Option<i64>,
        today: NaiveDate,
    ) -> anyhow::Result<TransactionStats>;
}
