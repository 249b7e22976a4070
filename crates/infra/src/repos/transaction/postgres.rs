use super::ITransactionRepo;
use crate::repos::shared::query_structs::{TransactionQuery, TransactionStats};
use chrono::NaiveDate;
use plazo_domain::{Reminder, Transaction, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool, Postgres,
};

pub struct PostgresTransactionRepo {
    pool: PgPool,
}

impl PostgresTransactionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TransactionRaw {
    transaction_uid: Uuid,
    type_uid: Uuid,
    owner_uid: i64,
    responsible_uid: Option<i64>,
    title: String,
    description: String,
    payload: serde_json::Value,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    priority: String,
    status: String,
    deleted: bool,
    created: i64,
    updated: i64,
}

impl From<TransactionRaw> for Transaction {
    fn from(raw: TransactionRaw) -> Self {
        Self {
            id: raw.transaction_uid.into(),
            transaction_type_id: raw.type_uid.into(),
            owner_id: raw.owner_uid,
            responsible_id: raw.responsible_uid,
            title: raw.title,
            description: raw.description,
            payload: serde_json::from_value(raw.payload).unwrap_or_default(),
            start_date: raw.start_date,
            end_date: raw.end_date,
            priority: raw.priority.parse().unwrap_or_default(),
            status: raw.status.parse().unwrap_or_default(),
            deleted: raw.deleted,
            created: raw.created,
            updated: raw.updated,
        }
    }
}

#[derive(Debug, FromRow)]
struct StatusCountsRaw {
    active: i64,
    completed: i64,
    cancelled: i64,
    high_priority: i64,
    critical_priority: i64,
    due_within_week: i64,
}

#[derive(Debug, FromRow)]
struct PendingCountRaw {
    pending: i64,
}

async fn insert_reminders(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    reminders: &[Reminder],
) -> anyhow::Result<()> {
    for reminder in reminders {
        sqlx::query(
            r#"
            INSERT INTO notifications
            (notification_uid, transaction_uid, days_before, recipients, message, sent, sent_at, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.transaction_id.inner_ref())
        .bind(reminder.days_before)
        .bind(&reminder.recipients)
        .bind(&reminder.message)
        .bind(reminder.sent)
        .bind(reminder.sent_at)
        .bind(reminder.created)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[async_trait::async_trait]
impl ITransactionRepo for PostgresTransactionRepo {
    async fn insert(
        &self,
        transaction: &Transaction,
        reminders: &[Reminder],
    ) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            INSERT INTO transactions
            (transaction_uid, type_uid, owner_uid, responsible_uid, title, description,
             payload, start_date, end_date, priority, status, deleted, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(transaction.id.inner_ref())
        .bind(transaction.transaction_type_id.inner_ref())
        .bind(transaction.owner_id)
        .bind(transaction.responsible_id)
        .bind(&transaction.title)
        .bind(&transaction.description)
        .bind(Json(&transaction.payload))
        .bind(transaction.start_date)
        .bind(transaction.end_date)
        .bind(transaction.priority.as_str())
        .bind(transaction.status.as_str())
        .bind(transaction.deleted)
        .bind(transaction.created)
        .bind(transaction.updated)
        .execute(&mut *tx)
        .await?;

        insert_reminders(&mut tx, reminders).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn save(
        &self,
        transaction: &Transaction,
        new_reminders: Option<&[Reminder]>,
    ) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            UPDATE transactions SET
                type_uid = $2,
                owner_uid = $3,
                responsible_uid = $4,
                title = $5,
                description = $6,
                payload = $7,
                start_date = $8,
                end_date = $9,
                priority = $10,
                status = $11,
                deleted = $12,
                updated = $13
            WHERE transaction_uid = $1
            "#,
        )
        .bind(transaction.id.inner_ref())
        .bind(transaction.transaction_type_id.inner_ref())
        .bind(transaction.owner_id)
        .bind(transaction.responsible_id)
        .bind(&transaction.title)
        .bind(&transaction.description)
        .bind(Json(&transaction.payload))
        .bind(transaction.start_date)
        .bind(transaction.end_date)
        .bind(transaction.priority.as_str())
        .bind(transaction.status.as_str())
        .bind(transaction.deleted)
        .bind(transaction.updated)
        .execute(&mut *tx)
        .await?;

        if let Some(reminders) = new_reminders {
            sqlx::query(
                r#"
                DELETE FROM notifications
                WHERE transaction_uid = $1 AND sent = false
                "#,
            )
            .bind(transaction.id.inner_ref())
            .execute(&mut *tx)
            .await?;

            insert_reminders(&mut tx, reminders).await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn find(&self, transaction_id: &ID) -> Option<Transaction> {
        let transaction: TransactionRaw = match sqlx::query_as(
            r#"
            SELECT * FROM transactions AS t
            WHERE t.transaction_uid = $1
            "#,
        )
        .bind(transaction_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(transaction) => transaction,
            Err(_) => return None,
        };
        Some(transaction.into())
    }

    async fn find_many(&self, transaction_ids: &[ID]) -> anyhow::Result<Vec<Transaction>> {
        let ids = transaction_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();
        let transactions: Vec<TransactionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM transactions AS t
            WHERE t.transaction_uid = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(transactions.into_iter().map(|t| t.into()).collect())
    }

    async fn find_by_user(&self, owner_id: i64, query: TransactionQuery) -> Vec<Transaction> {
        let transactions: Vec<TransactionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM transactions AS t
            WHERE t.owner_uid = $1 AND t.deleted = false
            AND ($2::uuid IS NULL OR t.type_uid = $2)
            AND ($3::text IS NULL OR t.status = $3)
            AND ($4::text IS NULL OR t.priority = $4)
            ORDER BY t.end_date ASC NULLS LAST, t.created DESC
            LIMIT $5
            "#,
        )
        .bind(owner_id)
        .bind(query.transaction_type_id.as_ref().map(|id| *id.inner_ref()))
        .bind(query.status.map(|s| s.as_str()))
        .bind(query.priority.map(|p| p.as_str()))
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        transactions.into_iter().map(|t| t.into()).collect()
    }

    async fn search(&self, owner_id: i64, needle: &str) -> Vec<Transaction> {
        let transactions: Vec<TransactionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM transactions AS t
            WHERE t.owner_uid = $1 AND t.deleted = false
            AND (t.title ILIKE '%' || $2 || '%' OR t.description ILIKE '%' || $2 || '%')
            ORDER BY t.end_date ASC NULLS LAST, t.created DESC
            "#,
        )
        .bind(owner_id)
        .bind(needle)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        transactions.into_iter().map(|t| t.into()).collect()
    }

    async fn delete(&self, transaction_id: &ID) -> Option<Transaction> {
        match sqlx::query_as::<_, TransactionRaw>(
            r#"
            UPDATE transactions SET deleted = true
            WHERE transaction_uid = $1
            RETURNING *
            "#,
        )
        .bind(transaction_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(transaction) => Some(transaction.into()),
            Err(_) => None,
        }
    }

    async fn statistics(
        &self,
        owner_id: Option<i64>,
        today: NaiveDate,
    ) -> anyhow::Result<TransactionStats> {
        let counts: StatusCountsRaw = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE t.status = 'active') AS active,
                COUNT(*) FILTER (WHERE t.status = 'completed') AS completed,
                COUNT(*) FILTER (WHERE t.status = 'cancelled') AS cancelled,
                COUNT(*) FILTER (WHERE t.status = 'active' AND t.priority = 'high') AS high_priority,
                COUNT(*) FILTER (WHERE t.status = 'active' AND t.priority = 'critical') AS critical_priority,
                COUNT(*) FILTER (WHERE t.status = 'active' AND t.end_date IS NOT NULL
                                 AND t.end_date >= $2 AND t.end_date <= $2 + 7) AS due_within_week
            FROM transactions AS t
            WHERE t.deleted = false
            AND ($1::bigint IS NULL OR t.owner_uid = $1)
            "#,
        )
        .bind(owner_id)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        let pending: PendingCountRaw = sqlx::query_as(
            r#"
            SELECT COUNT(*) AS pending
            FROM notifications AS n
            INNER JOIN transactions AS t ON t.transaction_uid = n.transaction_uid
            WHERE n.sent = false
            AND t.status = 'active' AND t.deleted = false AND t.end_date IS NOT NULL
            AND ($1::bigint IS NULL OR t.owner_uid = $1)
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(TransactionStats {
            active: counts.active,
            completed: counts.completed,
            cancelled: counts.cancelled,
            high_priority: counts.high_priority,
            critical_priority: counts.critical_priority,
            due_within_week: counts.due_within_week,
            pending_reminders: pending.pending,
        })
    }
}
