use crate::dtos::{TransactionDTO, TransactionStatsDTO};
use chrono::NaiveDate;
use plazo_domain::{Payload, Priority, Transaction, TransactionStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub transaction: TransactionDTO,
}

impl TransactionResponse {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction: TransactionDTO::new(transaction),
        }
    }
}

pub mod create_transaction {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub transaction_type_id: ID,
        pub owner_id: i64,
        pub responsible_id: Option<i64>,
        pub title: String,
        pub description: Option<String>,
        pub payload: Option<Payload>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub priority: Option<Priority>,
    }

    pub type APIResponse = TransactionResponse;
}

pub mod get_transaction {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub transaction_id: ID,
    }

    pub type APIResponse = TransactionResponse;
}

pub mod list_transactions {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub owner_id: i64,
        pub transaction_type_id: Option<ID>,
        pub status: Option<TransactionStatus>,
        pub priority: Option<Priority>,
        pub limit: Option<i64>,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub transactions: Vec<TransactionDTO>,
    }

    impl APIResponse {
        pub fn new(transactions: Vec<Transaction>) -> Self {
            Self {
                transactions: transactions.into_iter().map(TransactionDTO::new).collect(),
            }
        }
    }
}

pub mod search_transactions {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub owner_id: i64,
        pub q: String,
    }

    pub use super::list_transactions::APIResponse;
}

pub mod get_transaction_reminders {
    use super::*;
    use crate::dtos::ReminderDTO;
    use plazo_domain::Reminder;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub transaction_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod update_transaction {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub transaction_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: Option<String>,
        pub description: Option<String>,
        pub end_date: Option<NaiveDate>,
        pub priority: Option<Priority>,
        pub status: Option<TransactionStatus>,
        pub responsible_id: Option<i64>,
    }

    pub type APIResponse = TransactionResponse;
}

pub mod delete_transaction {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub transaction_id: ID,
    }

    pub type APIResponse = TransactionResponse;
}

pub mod get_transaction_stats {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub owner_id: Option<i64>,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub stats: TransactionStatsDTO,
    }
}
