mod inmemory;
mod postgres;

pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;
use plazo_domain::User;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    /// Inserts the user on first contact or refreshes the stored profile and
    /// `last_active`. Idempotent by id.
    async fn upsert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: i64) -> Option<User>;
    async fn find_many(&self, user_ids: &[i64]) -> anyhow::Result<Vec<User>>;
}
