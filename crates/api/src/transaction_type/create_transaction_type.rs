use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::create_transaction_type::*;
use plazo_domain::TransactionType;
use plazo_infra::PlazoContext;

pub async fn create_transaction_type_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let body = body.0;
    let usecase = CreateTransactionTypeUseCase {
        name: body.name,
        fields: body.fields.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction_type| HttpResponse::Created().json(APIResponse::new(transaction_type)))
        .map_err(PlazoError::from)
}

#[derive(Debug)]
pub struct CreateTransactionTypeUseCase {
    pub name: String,
    pub fields: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    StorageError,
}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => {
                Self::BadClientData("A transaction type needs a non-empty name".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateTransactionTypeUseCase {
    type Response = TransactionType;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTransactionType";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }

        let fields: Vec<&str> = self.fields.iter().map(|f| f.as_str()).collect();
        let transaction_type = TransactionType::new(self.name.trim(), &fields);

        ctx.repos
            .transaction_types
            .insert(&transaction_type)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(transaction_type)
    }
}
