use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::get_transaction_reminders::*;
use plazo_domain::{Reminder, ID};
use plazo_infra::PlazoContext;

pub async fn get_transaction_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let usecase = GetTransactionRemindersUseCase {
        transaction_id: path_params.transaction_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(PlazoError::from)
}

/// The full reminder schedule of one transaction, sent history included
#[derive(Debug)]
pub struct GetTransactionRemindersUseCase {
    pub transaction_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(transaction_id) => Self::NotFound(format!(
                "The transaction with id: {}, was not found.",
                transaction_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTransactionRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTransactionReminders";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.transactions.find(&self.transaction_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.transaction_id.clone()));
        }

        Ok(ctx
            .repos
            .reminders
            .find_by_transaction(&self.transaction_id)
            .await)
    }
}
