use super::ITransactionTypeRepo;
use crate::repos::shared::inmemory_repo;
use plazo_domain::{TransactionType, ID};
use std::sync::Mutex;

pub struct InMemoryTransactionTypeRepo {
    transaction_types: Mutex<Vec<TransactionType>>,
}

impl InMemoryTransactionTypeRepo {
    pub fn new() -> Self {
        Self {
            transaction_types: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITransactionTypeRepo for InMemoryTransactionTypeRepo {
    async fn insert(&self, transaction_type: &TransactionType) -> anyhow::Result<()> {
        inmemory_repo::insert(transaction_type, &self.transaction_types);
        Ok(())
    }

    async fn find(&self, type_id: &ID) -> Option<TransactionType> {
        inmemory_repo::find(type_id, &self.transaction_types)
    }

    async fn find_all(&self) -> Vec<TransactionType> {
        let mut types = inmemory_repo::find_by(&self.transaction_types, |t| t.active);
        types.sort_by(|a, b| a.level.cmp(&b.level).then(a.name.cmp(&b.name)));
        types
    }
}
