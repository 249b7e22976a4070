use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::upsert_user::*;
use plazo_domain::User;
use plazo_infra::PlazoContext;

pub async fn upsert_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let body = body.0;
    let usecase = UpsertUserUseCase {
        user_id: body.id,
        name: body.name,
        username: body.username,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(PlazoError::from)
}

/// Registers a user on first contact or refreshes the profile and the
/// last-activity timestamp of a returning one.
#[derive(Debug)]
pub struct UpsertUserUseCase {
    pub user_id: i64,
    pub name: String,
    pub username: Option<String>,
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
impl UseCase for UpsertUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "UpsertUser";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();

        let mut user = match ctx.repos.users.find(self.user_id).await {
            Some(user) => user,
            None => User::new(self.user_id, self.name.clone(), now),
        };
        user.name = self.name.clone();
        user.username = self.username.clone();
        user.active = true;
        user.last_active = now;

        ctx.repos
            .users
            .upsert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[actix_web::test]
    async fn is_idempotent_by_id_and_tracks_activity() {
        let mut ctx = PlazoContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys { millis: 1000 });

        let mut usecase = UpsertUserUseCase {
            user_id: 5,
            name: "Nina".into(),
            username: None,
        };
        let user = usecase.execute(&ctx).await.unwrap();
        assert_eq!(user.first_seen, 1000);

        ctx.sys = Arc::new(StaticTimeSys { millis: 2000 });
        let mut usecase = UpsertUserUseCase {
            user_id: 5,
            name: "Nina".into(),
            username: Some("nina".into()),
        };
        let user = usecase.execute(&ctx).await.unwrap();

        assert_eq!(user.first_seen, 1000);
        assert_eq!(user.last_active, 2000);
        assert_eq!(user.username, Some("nina".into()));
    }
}
