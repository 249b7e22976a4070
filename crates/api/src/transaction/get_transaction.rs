use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::get_transaction::*;
use plazo_domain::{Transaction, ID};
use plazo_infra::PlazoContext;

pub async fn get_transaction_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let usecase = GetTransactionUseCase {
        transaction_id: path_params.transaction_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction| HttpResponse::Ok().json(APIResponse::new(transaction)))
        .map_err(PlazoError::from)
}

#[derive(Debug)]
pub struct GetTransactionUseCase {
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
impl UseCase for GetTransactionUseCase {
    type Response = Transaction;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTransaction";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.transactions.find(&self.transaction_id).await {
            Some(transaction) if !transaction.deleted => Ok(transaction),
            _ => Err(UseCaseError::NotFound(self.transaction_id.clone())),
        }
    }
}
