use crate::shared::usecase::UseCase;
use plazo_domain::TransactionType;
use plazo_infra::PlazoContext;
use tracing::info;

/// Seeds the fixed default type set the first time the service starts
/// against an empty store. A no-op on every later start.
#[derive(Debug)]
pub struct InitDefaultTypesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for InitDefaultTypesUseCase {
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "InitDefaultTypes";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        if !ctx.repos.transaction_types.find_all().await.is_empty() {
            return Ok(0);
        }

        let defaults = TransactionType::defaults();
        for transaction_type in &defaults {
            ctx.repos
                .transaction_types
                .insert(transaction_type)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }
        info!("Seeded {} default transaction types", defaults.len());

        Ok(defaults.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;

    #[actix_web::test]
    async fn seeds_once_and_only_once() {
        let ctx = PlazoContext::create_inmemory();

        let seeded = execute(InitDefaultTypesUseCase {}, &ctx).await.unwrap();
        assert_eq!(seeded, 6);
        assert_eq!(ctx.repos.transaction_types.find_all().await.len(), 6);

        let seeded = execute(InitDefaultTypesUseCase {}, &ctx).await.unwrap();
        assert_eq!(seeded, 0);
        assert_eq!(ctx.repos.transaction_types.find_all().await.len(), 6);
    }
}
