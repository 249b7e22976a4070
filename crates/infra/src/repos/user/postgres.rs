use super::IUserRepo;
use plazo_domain::User;
use sqlx::{FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_id: i64,
    name: String,
    username: Option<String>,
    active: bool,
    first_seen: i64,
    last_active: i64,
}

impl From<UserRaw> for User {
    fn from(raw: UserRaw) -> Self {
        Self {
            id: raw.user_id,
            name: raw.name,
            username: raw.username,
            active: raw.active,
            first_seen: raw.first_seen,
            last_active: raw.last_active,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn upsert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users
            (user_id, name, username, active, first_seen, last_active)
            VALUES($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                name = $2,
                username = $3,
                active = $4,
                last_active = $6
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.username)
        .bind(user.active)
        .bind(user.first_seen)
        .bind(user.last_active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: i64) -> Option<User> {
        let user: UserRaw = match sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => user,
            Err(_) => return None,
        };
        Some(user.into())
    }

    async fn find_many(&self, user_ids: &[i64]) -> anyhow::Result<Vec<User>> {
        let users: Vec<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_id = ANY($1)
            "#,
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }
}
