use plazo_domain::{Priority, TransactionStatus, ID};

/// Filters for listing a user's transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub transaction_type_id: Option<ID>,
    pub status: Option<TransactionStatus>,
    pub priority: Option<Priority>,
    pub limit: Option<i64>,
}

/// Aggregate counts backing the dashboard and the analyze tool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStats {
    pub active: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub high_priority: i64,
    pub critical_priority: i64,
    /// Active transactions whose end date falls within the next seven days
    pub due_within_week: i64,
    /// Unsent reminders that are still dispatchable
    pub pending_reminders: i64,
}
