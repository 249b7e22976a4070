use super::IReminderRepo;
use crate::repos::shared::inmemory_repo;
use crate::repos::transaction::TransactionCollection;
use chrono::NaiveDate;
use plazo_domain::{Reminder, ID};
use std::sync::{Arc, Mutex};

pub type ReminderCollection = Arc<Mutex<Vec<Reminder>>>;

/// Shares its collections with `InMemoryTransactionRepo`; the due query
/// joins both, mirroring the SQL predicate.
pub struct InMemoryReminderRepo {
    reminders: ReminderCollection,
    transactions: TransactionCollection,
}

impl InMemoryReminderRepo {
    pub fn new(reminders: ReminderCollection, transactions: TransactionCollection) -> Self {
        Self {
            reminders,
            transactions,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn find_due(&self, today: NaiveDate) -> Vec<Reminder> {
        let transactions = self.transactions.lock().unwrap();
        let reminders = self.reminders.lock().unwrap();

        let mut due: Vec<Reminder> = reminders
            .iter()
            .filter(|r| {
                if r.sent {
                    return false;
                }
                transactions.iter().any(|t| {
                    t.id == r.transaction_id
                        && t.is_schedulable()
                        && t.end_date.map_or(false, |end_date| r.fires_on(end_date) == today)
                })
            })
            .cloned()
            .collect();
        due.sort_by_key(|r| r.created);
        due
    }

    async fn mark_sent(&self, reminder_id: &ID, sent_at: i64) -> anyhow::Result<bool> {
        let updated = inmemory_repo::update_many(
            &self.reminders,
            |r: &Reminder| r.id == *reminder_id && !r.sent,
            |r| {
                r.sent = true;
                r.sent_at = Some(sent_at);
            },
        );
        Ok(updated > 0)
    }

    async fn find_by_transaction(&self, transaction_id: &ID) -> Vec<Reminder> {
        let mut reminders = inmemory_repo::find_by(&self.reminders, |r: &Reminder| {
            r.transaction_id == *transaction_id
        });
        reminders.sort_by(|a, b| b.days_before.cmp(&a.days_before));
        reminders
    }
}
