use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use plazo_api_structs::create_transaction::*;
use plazo_domain::{Payload, Priority, Reminder, Transaction, TransactionStatus, User, ID};
use plazo_infra::PlazoContext;

pub async fn create_transaction_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let body = body.0;
    let usecase = CreateTransactionUseCase {
        transaction_type_id: body.transaction_type_id,
        owner_id: body.owner_id,
        responsible_id: body.responsible_id,
        title: body.title,
        description: body.description.unwrap_or_default(),
        payload: body.payload.unwrap_or_default(),
        start_date: body.start_date,
        end_date: body.end_date,
        priority: body.priority.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction| HttpResponse::Created().json(APIResponse::new(transaction)))
        .map_err(PlazoError::from)
}

#[derive(Debug)]
pub struct CreateTransactionUseCase {
    pub transaction_type_id: ID,
    pub owner_id: i64,
    pub responsible_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub payload: Payload,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub priority: Priority,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    TypeNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::TypeNotFound(type_id) => Self::NotFound(format!(
                "The transaction type with id: {}, was not found.",
                type_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateTransactionUseCase {
    type Response = Transaction;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTransaction";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        let transaction_type = ctx
            .repos
            .transaction_types
            .find(&self.transaction_type_id)
            .await
            .filter(|t| t.active)
            .ok_or_else(|| UseCaseError::TypeNotFound(self.transaction_type_id.clone()))?;

        let now = ctx.sys.get_timestamp_millis();
        let today = ctx.sys.today(&ctx.config.timezone);

        // Owners appear on first contact
        if ctx.repos.users.find(self.owner_id).await.is_none() {
            let user = User::new(self.owner_id, format!("user-{}", self.owner_id), now);
            ctx.repos
                .users
                .upsert(&user)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }

        let transaction = Transaction {
            id: Default::default(),
            transaction_type_id: transaction_type.id.clone(),
            owner_id: self.owner_id,
            responsible_id: self.responsible_id,
            title: self.title.clone(),
            description: self.description.clone(),
            payload: self.payload.clone(),
            start_date: self.start_date.unwrap_or(today),
            end_date: self.end_date,
            priority: self.priority,
            status: TransactionStatus::Active,
            deleted: false,
            created: now,
            updated: now,
        };

        let reminders = Reminder::plan(&transaction, today, now);

        ctx.repos
            .transactions
            .insert(&transaction, &reminders)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plazo_domain::TransactionType;
    use plazo_infra::ISys;
    use std::sync::Arc;

    struct StaticTimeSys {
        millis: i64,
    }
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.millis
        }
    }

    // 2025-01-10 12:00:00 UTC
    const JAN_10: i64 = 1736510400000;

    struct TestContext {
        ctx: PlazoContext,
        transaction_type: TransactionType,
    }

    async fn setup() -> TestContext {
        let mut ctx = PlazoContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys { millis: JAN_10 });
        let transaction_type = TransactionType::new("Licence", &["authority"]);
        ctx.repos
            .transaction_types
            .insert(&transaction_type)
            .await
            .unwrap();

        TestContext {
            ctx,
            transaction_type,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usecase_factory(type_id: &ID, end_date: Option<NaiveDate>) -> CreateTransactionUseCase {
        CreateTransactionUseCase {
            transaction_type_id: type_id.clone(),
            owner_id: 42,
            responsible_id: None,
            title: "Hunting licence".into(),
            description: String::new(),
            payload: Default::default(),
            start_date: None,
            end_date,
            priority: Priority::Normal,
        }
    }

    #[actix_web::test]
    async fn creates_transaction_and_materialises_reminders() {
        let TestContext {
            ctx,
            transaction_type,
        } = setup().await;

        let mut usecase = usecase_factory(&transaction_type.id, Some(date(2025, 3, 1)));
        let transaction = usecase.execute(&ctx).await.unwrap();

        assert_eq!(transaction.start_date, date(2025, 1, 10));
        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert_eq!(reminders.len(), 5);

        // The owner row appeared on first contact
        assert!(ctx.repos.users.find(42).await.is_some());
    }

    #[actix_web::test]
    async fn drops_past_thresholds_at_creation() {
        let TestContext {
            ctx,
            transaction_type,
        } = setup().await;

        // Five days out: only the 3 and 0 day thresholds are still ahead
        let mut usecase = usecase_factory(&transaction_type.id, Some(date(2025, 1, 15)));
        let transaction = usecase.execute(&ctx).await.unwrap();

        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        let days: Vec<_> = reminders.iter().map(|r| r.days_before).collect();
        assert_eq!(days, vec![3, 0]);
    }

    #[actix_web::test]
    async fn transaction_without_end_date_gets_no_reminders() {
        let TestContext {
            ctx,
            transaction_type,
        } = setup().await;

        let mut usecase = usecase_factory(&transaction_type.id, None);
        let transaction = usecase.execute(&ctx).await.unwrap();

        assert!(ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await
            .is_empty());
    }

    #[actix_web::test]
    async fn rejects_unknown_transaction_type() {
        let TestContext { ctx, .. } = setup().await;

        let unknown = ID::default();
        let mut usecase = usecase_factory(&unknown, None);
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap_err(), UseCaseError::TypeNotFound(unknown));
    }
}
