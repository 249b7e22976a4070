use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::dtos::TransactionStatsDTO;
use plazo_api_structs::get_transaction_stats::*;
use plazo_infra::{PlazoContext, TransactionStats};

pub async fn get_transaction_stats_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let usecase = GetTransactionStatsUseCase {
        owner_id: query_params.owner_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|stats| {
            HttpResponse::Ok().json(APIResponse {
                stats: TransactionStatsDTO {
                    active: stats.active,
                    completed: stats.completed,
                    cancelled: stats.cancelled,
                    high_priority: stats.high_priority,
                    critical_priority: stats.critical_priority,
                    due_within_week: stats.due_within_week,
                    pending_reminders: stats.pending_reminders,
                },
            })
        })
        .map_err(PlazoError::from)
}

#[derive(Debug)]
pub struct GetTransactionStatsUseCase {
    pub owner_id: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTransactionStatsUseCase {
    type Response = TransactionStats;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTransactionStats";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.today(&ctx.config.timezone);
        ctx.repos
            .transactions
            .statistics(self.owner_id, today)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
