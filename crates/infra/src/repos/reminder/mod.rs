mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::{InMemoryReminderRepo, ReminderCollection};
use plazo_domain::{Reminder, ID};
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Reminders due on exactly the given civil date: unsent, parent active,
    /// not soft-deleted, with an end date such that
    /// `end_date - days_before = today`. Ordered by creation time ascending.
    /// The equality keeps a reminder a candidate for its whole calendar day;
    /// days missed during an outage are not swept up afterwards.
    async fn find_due(&self, today: NaiveDate) -> Vec<Reminder>;
    /// Retires a reminder after delivery. Returns false when it was already
    /// sent, so a racing sweep cannot retire it twice.
    async fn mark_sent(&self, reminder_id: &ID, sent_at: i64) -> anyhow::Result<bool>;
    async fn find_by_transaction(&self, transaction_id: &ID) -> Vec<Reminder>;
}
