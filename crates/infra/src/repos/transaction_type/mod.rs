mod inmemory;
mod postgres;

pub use inmemory::InMemoryTransactionTypeRepo;
pub use postgres::PostgresTransactionTypeRepo;
use plazo_domain::{TransactionType, ID};

#[async_trait::async_trait]
pub trait ITransactionTypeRepo: Send + Sync {
    async fn insert(&self, transaction_type: &TransactionType) -> anyhow::Result<()>;
    async fn find(&self, type_id: &ID) -> Option<TransactionType>;
    /// Active types, ordered by hierarchy level and name
    async fn find_all(&self) -> Vec<TransactionType>;
}
