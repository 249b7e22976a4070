use plazo_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub transaction_id: ID,
    pub days_before: i64,
    pub recipients: Vec<i64>,
    pub message: String,
    pub sent: bool,
    pub sent_at: Option<i64>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            transaction_id: reminder.transaction_id,
            days_before: reminder.days_before,
            recipients: reminder.recipients,
            message: reminder.message,
            sent: reminder.sent,
            sent_at: reminder.sent_at,
        }
    }
}
