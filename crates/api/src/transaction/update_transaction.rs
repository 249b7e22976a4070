use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use plazo_api_structs::update_transaction::*;
use plazo_domain::{Priority, Reminder, Transaction, TransactionStatus, ID};
use plazo_infra::PlazoContext;

pub async fn update_transaction_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let body = body.0;
    let usecase = UpdateTransactionUseCase {
        transaction_id: path_params.transaction_id.clone(),
        title: body.title,
        description: body.description,
        end_date: body.end_date,
        priority: body.priority,
        status: body.status,
        responsible_id: body.responsible_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction| HttpResponse::Ok().json(APIResponse::new(transaction)))
        .map_err(PlazoError::from)
}

/// Partial update over the mutable columns. When the end date or the
/// recipients change, the unsent reminders are re-planned in the same store
/// transaction; sent reminders stay untouched as history.
#[derive(Debug)]
pub struct UpdateTransactionUseCase {
    pub transaction_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub end_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<TransactionStatus>,
    pub responsible_id: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(transaction_id) => Self::NotFound(format!(
                "The transaction with id: {}, was not found.",
                transaction_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateTransactionUseCase {
    type Response = Transaction;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateTransaction";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        let old = match ctx.repos.transactions.find(&self.transaction_id).await {
            Some(transaction) if !transaction.deleted => transaction,
            _ => return Err(UseCaseError::NotFound(self.transaction_id.clone())),
        };

        let now = ctx.sys.get_timestamp_millis();
        let today = ctx.sys.today(&ctx.config.timezone);

        let mut transaction = old.clone();
        if let Some(title) = &self.title {
            transaction.title = title.clone();
        }
        if let Some(description) = &self.description {
            transaction.description = description.clone();
        }
        if let Some(end_date) = self.end_date {
            transaction.end_date = Some(end_date);
        }
        if let Some(priority) = self.priority {
            transaction.priority = priority;
        }
        if let Some(status) = self.status {
            transaction.status = status;
        }
        if let Some(responsible_id) = self.responsible_id {
            transaction.responsible_id = Some(responsible_id);
        }
        transaction.updated = now;

        // Only a changed end date or recipient set re-arms the schedule. A
        // status change never touches the reminders; suppression is enforced
        // by the due-query predicate.
        let new_reminders = if transaction.end_date != old.end_date
            || transaction.responsible_id != old.responsible_id
        {
            Some(Reminder::plan(&transaction, today, now))
        } else {
            None
        };

        ctx.repos
            .transactions
            .save(&transaction, new_reminders.as_deref())
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::create_transaction::CreateTransactionUseCase;
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

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct TestContext {
        ctx: PlazoContext,
        transaction: Transaction,
    }

    async fn setup(end_date: Option<NaiveDate>) -> TestContext {
        let mut ctx = PlazoContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys { millis: JAN_10 });
        let transaction_type = TransactionType::new("Court hearing", &["court"]);
        ctx.repos
            .transaction_types
            .insert(&transaction_type)
            .await
            .unwrap();

        let mut usecase = CreateTransactionUseCase {
            transaction_type_id: transaction_type.id.clone(),
            owner_id: 42,
            responsible_id: None,
            title: "Preliminary hearing".into(),
            description: String::new(),
            payload: Default::default(),
            start_date: None,
            end_date,
            priority: Priority::Normal,
        };
        let transaction = usecase.execute(&ctx).await.unwrap();

        TestContext { ctx, transaction }
    }

    fn identity_update(transaction_id: &ID) -> UpdateTransactionUseCase {
        UpdateTransactionUseCase {
            transaction_id: transaction_id.clone(),
            title: None,
            description: None,
            end_date: None,
            priority: None,
            status: None,
            responsible_id: None,
        }
    }

    #[actix_web::test]
    async fn pushing_the_end_date_out_rearms_all_thresholds() {
        // Created with an end date five days out: only reminders for 3 and 0
        let TestContext { ctx, transaction } = setup(Some(date(2025, 1, 15))).await;
        assert_eq!(
            ctx.repos
                .reminders
                .find_by_transaction(&transaction.id)
                .await
                .len(),
            2
        );

        let mut usecase = identity_update(&transaction.id);
        usecase.end_date = Some(date(2025, 2, 20));
        usecase.execute(&ctx).await.unwrap();

        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        let days: Vec<_> = reminders.iter().map(|r| r.days_before).collect();
        assert_eq!(days, vec![30, 15, 7, 3, 0]);
        assert!(reminders.iter().all(|r| !r.sent));
    }

    #[actix_web::test]
    async fn identity_update_keeps_the_reminder_set() {
        let TestContext { ctx, transaction } = setup(Some(date(2025, 1, 15))).await;
        let before = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;

        let mut usecase = identity_update(&transaction.id);
        usecase.title = Some("Rescheduled preliminary hearing".into());
        usecase.execute(&ctx).await.unwrap();

        let after = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert_eq!(before, after);
    }

    #[actix_web::test]
    async fn changing_the_responsible_user_replans_recipients() {
        let TestContext { ctx, transaction } = setup(Some(date(2025, 1, 15))).await;

        let mut usecase = identity_update(&transaction.id);
        usecase.responsible_id = Some(77);
        usecase.execute(&ctx).await.unwrap();

        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert!(!reminders.is_empty());
        for reminder in reminders {
            assert_eq!(reminder.recipients, vec![42, 77]);
        }
    }

    #[actix_web::test]
    async fn status_change_leaves_reminders_alone() {
        let TestContext { ctx, transaction } = setup(Some(date(2025, 1, 15))).await;
        let before = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;

        let mut usecase = identity_update(&transaction.id);
        usecase.status = Some(TransactionStatus::Cancelled);
        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated.status, TransactionStatus::Cancelled);
        let after = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert_eq!(before, after);
    }

    #[actix_web::test]
    async fn rejects_unknown_or_deleted_transaction() {
        let TestContext { ctx, transaction } = setup(None).await;

        let unknown = ID::default();
        let mut usecase = identity_update(&unknown);
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(unknown)
        );

        ctx.repos.transactions.delete(&transaction.id).await;
        let mut usecase = identity_update(&transaction.id);
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(transaction.id.clone())
        );
    }
}
