use super::ITransactionTypeRepo;
use plazo_domain::{TransactionType, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresTransactionTypeRepo {
    pool: PgPool,
}

impl PostgresTransactionTypeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TransactionTypeRaw {
    type_uid: Uuid,
    name: String,
    level: i64,
    parent_uid: Option<Uuid>,
    fields: Vec<String>,
    active: bool,
}

impl From<TransactionTypeRaw> for TransactionType {
    fn from(raw: TransactionTypeRaw) -> Self {
        Self {
            id: raw.type_uid.into(),
            name: raw.name,
            level: raw.level,
            parent_id: raw.parent_uid.map(|uid| uid.into()),
            fields: raw.fields,
            active: raw.active,
        }
    }
}

#[async_trait::async_trait]
impl ITransactionTypeRepo for PostgresTransactionTypeRepo {
    async fn insert(&self, transaction_type: &TransactionType) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO transaction_types
            (type_uid, name, level, parent_uid, fields, active)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(transaction_type.id.inner_ref())
        .bind(&transaction_type.name)
        .bind(transaction_type.level)
        .bind(
            transaction_type
                .parent_id
                .as_ref()
                .map(|id| *id.inner_ref()),
        )
        .bind(&transaction_type.fields)
        .bind(transaction_type.active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, type_id: &ID) -> Option<TransactionType> {
        let transaction_type: TransactionTypeRaw = match sqlx::query_as(
            r#"
            SELECT * FROM transaction_types AS t
            WHERE t.type_uid = $1
            "#,
        )
        .bind(type_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(transaction_type) => transaction_type,
            Err(_) => return None,
        };
        Some(transaction_type.into())
    }

    async fn find_all(&self) -> Vec<TransactionType> {
        let types: Vec<TransactionTypeRaw> = sqlx::query_as(
            r#"
            SELECT * FROM transaction_types AS t
            WHERE t.active = true
            ORDER BY t.level ASC, t.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        types.into_iter().map(|t| t.into()).collect()
    }
}
