use super::IReminderRepo;
use chrono::NaiveDate;
use plazo_domain::{Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    notification_uid: Uuid,
    transaction_uid: Uuid,
    days_before: i64,
    recipients: Vec<i64>,
    message: String,
    sent: bool,
    sent_at: Option<i64>,
    created: i64,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        Self {
            id: raw.notification_uid.into(),
            transaction_id: raw.transaction_uid.into(),
            days_before: raw.days_before,
            recipients: raw.recipients,
            message: raw.message,
            sent: raw.sent,
            sent_at: raw.sent_at,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn find_due(&self, today: NaiveDate) -> Vec<Reminder> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT n.* FROM notifications AS n
            INNER JOIN transactions AS t ON t.transaction_uid = n.transaction_uid
            WHERE n.sent = false
            AND t.status = 'active'
            AND t.deleted = false
            AND t.end_date IS NOT NULL
            AND t.end_date - n.days_before::integer = $1
            ORDER BY n.created ASC
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        reminders.into_iter().map(|r| r.into()).collect()
    }

    async fn mark_sent(&self, reminder_id: &ID, sent_at: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE notifications SET sent = true, sent_at = $2
            WHERE notification_uid = $1 AND sent = false
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(sent_at)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() > 0)
    }

    async fn find_by_transaction(&self, transaction_id: &ID) -> Vec<Reminder> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.transaction_uid = $1
            ORDER BY n.days_before DESC
            "#,
        )
        .bind(transaction_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        reminders.into_iter().map(|r| r.into()).collect()
    }
}
