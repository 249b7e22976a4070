use crate::error::PlazoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use plazo_api_structs::get_user::*;
use plazo_domain::User;
use plazo_infra::PlazoContext;

pub async fn get_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    let usecase = GetUserUseCase {
        user_id: path_params.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(PlazoError::from)
}

#[derive(Debug)]
pub struct GetUserUseCase {
    pub user_id: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(i64),
}

impl From<UseCaseError> for PlazoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(user_id) => {
                Self::NotFound(format!("The user with id: {}, was not found.", user_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUser";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .users
            .find(self.user_id)
            .await
            .ok_or(UseCaseError::NotFound(self.user_id))
    }
}
