use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::list_transactions::*;
use plazo_domain::{Priority, Transaction, TransactionStatus, ID};
use plazo_infra::{PlazoContext, TransactionQuery};

pub async fn list_transactions_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let query_params = query_params.0;
    let usecase = ListTransactionsUseCase {
        owner_id: query_params.owner_id,
        transaction_type_id: query_params.transaction_type_id,
        status: query_params.status,
        priority: query_params.priority,
        limit: query_params.limit,
    };

    execute(usecase, &ctx)
        .await
        .map(|transactions| HttpResponse::Ok().json(APIResponse::new(transactions)))
        .map_err(PlazoError::from)
}

#[derive(Debug)]
pub struct ListTransactionsUseCase {
    pub owner_id: i64,
    pub transaction_type_id: Option<ID>,
    pub status: Option<TransactionStatus>,
    pub priority: Option<Priority>,
    pub limit: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListTransactionsUseCase {
    type Response = Vec<Transaction>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListTransactions";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        let query = TransactionQuery {
            transaction_type_id: self.transaction_type_id.clone(),
            status: self.status,
            priority: self.priority,
            limit: self.limit,
        };
        Ok(ctx.repos.transactions.find_by_user(self.owner_id, query).await)
    }
}
