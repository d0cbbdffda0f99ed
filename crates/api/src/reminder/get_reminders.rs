use crate::error::BillwatchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use billwatch_api_structs::get_reminders::*;
use billwatch_domain::Reminder;
use billwatch_infra::BillwatchContext;

pub async fn get_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<BillwatchContext>,
) -> Result<HttpResponse, BillwatchError> {
    let user_id = protect_route(&http_req, &ctx).await?;

    let usecase = GetRemindersUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(BillwatchError::from)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub user_id: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for BillwatchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &BillwatchContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
