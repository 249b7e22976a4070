use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::delete_transaction::*;
use plazo_domain::{Transaction, ID};
use plazo_infra::PlazoContext;

pub async fn delete_transaction_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let usecase = DeleteTransactionUseCase {
        transaction_id: path_params.transaction_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction| HttpResponse::Ok().json(APIResponse::new(transaction)))
        .map_err(PlazoError::from)
}

/// Soft delete: the record and its reminders stay in the store, but the
/// reminders are suppressed from dispatch from now on.
#[derive(Debug)]
pub struct DeleteTransactionUseCase {
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
impl UseCase for DeleteTransactionUseCase {
    type Response = Transaction;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTransaction";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .transactions
            .delete(&self.transaction_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.transaction_id.clone()))
    }
}
