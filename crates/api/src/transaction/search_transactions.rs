use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::search_transactions::*;
use plazo_domain::Transaction;
use plazo_infra::PlazoContext;

pub async fn search_transactions_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let query_params = query_params.0;
    let usecase = SearchTransactionsUseCase {
        owner_id: query_params.owner_id,
        needle: query_params.q,
    };

    execute(usecase, &ctx)
        .await
        .map(|transactions| HttpResponse::Ok().json(APIResponse::new(transactions)))
        .map_err(PlazoError::from)
}

#[derive(Debug)]
pub struct SearchTransactionsUseCase {
    pub owner_id: i64,
    pub needle: String,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SearchTransactionsUseCase {
    type Response = Vec<Transaction>;

    type Error = UseCaseError;

    const NAME: &'static str = "SearchTransactions";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx
            .repos
            .transactions
            .search(self.owner_id, &self.needle)
            .await)
    }
}
