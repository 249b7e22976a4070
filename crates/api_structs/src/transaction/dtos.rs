use chrono::NaiveDate;
use plazo_domain::{Payload, Priority, Transaction, TransactionStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDTO {
    pub id: ID,
    pub transaction_type_id: ID,
    pub owner_id: i64,
    pub responsible_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub payload: Payload,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: TransactionStatus,
    pub created: i64,
    pub updated: i64,
}

impl TransactionDTO {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            transaction_type_id: transaction.transaction_type_id,
            owner_id: transaction.owner_id,
            responsible_id: transaction.responsible_id,
            title: transaction.title,
            description: transaction.description,
            payload: transaction.payload,
            start_date: transaction.start_date,
            end_date: transaction.end_date,
            priority: transaction.priority,
            status: transaction.status,
            created: transaction.created,
            updated: transaction.updated,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatsDTO {
    pub active: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub high_priority: i64,
    pub critical_priority: i64,
    pub due_within_week: i64,
    pub pending_reminders: i64,
}
