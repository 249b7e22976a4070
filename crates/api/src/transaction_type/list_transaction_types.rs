use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::list_transaction_types::*;
use plazo_domain::TransactionType;
use plazo_infra::PlazoContext;

pub async fn list_transaction_types_controller(
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let usecase = ListTransactionTypesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|types| HttpResponse::Ok().json(APIResponse::new(types)))
        .map_err(PlazoError::from)
}

#[derive(Debug)]
pub struct ListTransactionTypesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListTransactionTypesUseCase {
    type Response = Vec<TransactionType>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListTransactionTypes";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.transaction_types.find_all().await)
    }
}
