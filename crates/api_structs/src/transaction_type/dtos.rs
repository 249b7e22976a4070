use plazo_domain::{TransactionType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTypeDTO {
    pub id: ID,
    pub name: String,
    pub level: i64,
    pub parent_id: Option<ID>,
    pub fields: Vec<String>,
}

impl TransactionTypeDTO {
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            id: transaction_type.id,
            name: transaction_type.name,
            level: transaction_type.level,
            parent_id: transaction_type.parent_id,
            fields: transaction_type.fields,
        }
    }
}
