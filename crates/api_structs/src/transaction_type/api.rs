use crate::dtos::TransactionTypeDTO;
use plazo_domain::TransactionType;
use serde::{Deserialize, Serialize};

pub mod list_transaction_types {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub transaction_types: Vec<TransactionTypeDTO>,
    }

    impl APIResponse {
        pub fn new(transaction_types: Vec<TransactionType>) -> Self {
            Self {
                transaction_types: transaction_types
                    .into_iter()
                    .map(TransactionTypeDTO::new)
                    .collect(),
            }
        }
    }
}

pub mod create_transaction_type {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub fields: Option<Vec<String>>,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub transaction_type: TransactionTypeDTO,
    }

    impl APIResponse {
        pub fn new(transaction_type: TransactionType) -> Self {
            Self {
                transaction_type: TransactionTypeDTO::new(transaction_type),
            }
        }
    }
}
