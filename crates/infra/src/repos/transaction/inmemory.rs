use super::ITransactionRepo;
use crate::repos::reminder::ReminderCollection;
use crate::repos::shared::inmemory_repo;
use crate::repos::shared::query_structs::{TransactionQuery, TransactionStats};
use chrono::{Duration, NaiveDate};
use plazo_domain::{Reminder, Transaction, TransactionStatus, ID};
use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

pub type TransactionCollection = Arc<Mutex<Vec<Transaction>>>;

/// Shares its reminder collection with `InMemoryReminderRepo` so that the
/// insert and re-plan protocols mutate both collections in one step, like
/// the postgres implementation does within one database transaction.
pub struct InMemoryTransactionRepo {
    transactions: TransactionCollection,
    reminders: ReminderCollection,
}

impl InMemoryTransactionRepo {
    pub fn new(transactions: TransactionCollection, reminders: ReminderCollection) -> Self {
        Self {
            transactions,
            reminders,
        }
    }
}

fn order_for_listing(transactions: &mut Vec<Transaction>) {
    transactions.sort_by(|a, b| match (a.end_date, b.end_date) {
        (Some(a_end), Some(b_end)) => a_end.cmp(&b_end).then(b.created.cmp(&a.created)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.created.cmp(&a.created),
    });
}

#[async_trait::async_trait]
impl ITransactionRepo for InMemoryTransactionRepo {
    async fn insert(
        &self,
        transaction: &Transaction,
        reminders: &[Reminder],
    ) -> anyhow::Result<()> {
        inmemory_repo::insert(transaction, &self.transactions);
        for reminder in reminders {
            inmemory_repo::insert(reminder, &self.reminders);
        }
        Ok(())
    }

    async fn save(
        &self,
        transaction: &Transaction,
        new_reminders: Option<&[Reminder]>,
    ) -> anyhow::Result<()> {
        inmemory_repo::save(transaction, &self.transactions);
        if let Some(reminders) = new_reminders {
            inmemory_repo::find_and_delete_by(&self.reminders, |r| {
                r.transaction_id == transaction.id && !r.sent
            });
            for reminder in reminders {
                inmemory_repo::insert(reminder, &self.reminders);
            }
        }
        Ok(())
    }

    async fn find(&self, transaction_id: &ID) -> Option<Transaction> {
        inmemory_repo::find(transaction_id, &self.transactions)
    }

    async fn find_many(&self, transaction_ids: &[ID]) -> anyhow::Result<Vec<Transaction>> {
        Ok(inmemory_repo::find_by(&self.transactions, |t| {
            transaction_ids.contains(&t.id)
        }))
    }

    async fn find_by_user(&self, owner_id: i64, query: TransactionQuery) -> Vec<Transaction> {
        let mut transactions = inmemory_repo::find_by(&self.transactions, |t| {
            t.owner_id == owner_id
                && !t.deleted
                && query
                    .transaction_type_id
                    .as_ref()
                    .map_or(true, |type_id| t.transaction_type_id == *type_id)
                && query.status.map_or(true, |status| t.status == status)
                && query
                    .priority
                    .map_or(true, |priority| t.priority == priority)
        });
        order_for_listing(&mut transactions);
        if let Some(limit) = query.limit {
            transactions.truncate(limit.max(0) as usize);
        }
        transactions
    }

    async fn search(&self, owner_id: i64, needle: &str) -> Vec<Transaction> {
        let needle = needle.to_lowercase();
        let mut transactions = inmemory_repo::find_by(&self.transactions, |t| {
            t.owner_id == owner_id
                && !t.deleted
                && (t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle))
        });
        order_for_listing(&mut transactions);
        transactions
    }

    async fn delete(&self, transaction_id: &ID) -> Option<Transaction> {
        let mut transactions = self.transactions.lock().unwrap();
        let transaction = transactions
            .iter_mut()
            .find(|t| t.id == *transaction_id)?;
        transaction.deleted = true;
        Some(transaction.clone())
    }

    async fn statistics(
        &self,
        owner_id: Option<i64>,
        today: NaiveDate,
    ) -> anyhow::Result<TransactionStats> {
        let mut stats = TransactionStats::default();
        let transactions = self.transactions.lock().unwrap();
        let week_ahead = today + Duration::days(7);

        for t in transactions
            .iter()
            .filter(|t| !t.deleted && owner_id.map_or(true, |owner| t.owner_id == owner))
        {
            match t.status {
                TransactionStatus::Active => stats.active += 1,
                TransactionStatus::Completed => stats.completed += 1,
                TransactionStatus::Cancelled => stats.cancelled += 1,
            }
            if t.status == TransactionStatus::Active {
                match t.priority {
                    plazo_domain::Priority::High => stats.high_priority += 1,
                    plazo_domain::Priority::Critical => stats.critical_priority += 1,
                    plazo_domain::Priority::Normal => {}
                }
                if let Some(end_date) = t.end_date {
                    if end_date >= today && end_date <= week_ahead {
                        stats.due_within_week += 1;
                    }
                }
            }
        }

        let reminders = self.reminders.lock().unwrap();
        stats.pending_reminders = reminders
            .iter()
            .filter(|r| {
                !r.sent
                    && transactions.iter().any(|t| {
                        t.id == r.transaction_id
                            && t.is_schedulable()
                            && owner_id.map_or(true, |owner| t.owner_id == owner)
                    })
            })
            .count() as i64;

        Ok(stats)
    }
}
