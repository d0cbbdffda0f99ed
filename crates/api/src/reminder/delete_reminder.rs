use crate::error::BillwatchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use billwatch_api_structs::delete_reminder::*;
use billwatch_domain::{Reminder, ID};
use billwatch_infra::BillwatchContext;

pub async fn delete_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<BillwatchContext>,
) -> Result<HttpResponse, BillwatchError> {
    let user_id = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteReminderUseCase {
        user_id,
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(BillwatchError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub user_id: String,
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for BillwatchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &BillwatchContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) if reminder.user_id == self.user_id => {
                // The record was just found, so nothing coming back from
                // the remove step means the store failed mid-operation
                ctx.repos
                    .reminders
                    .delete(&reminder.id)
                    .await
                    .ok_or(UseCaseError::StorageError)?;
                Ok(reminder)
            }
            _ => Err(UseCaseError::NotFound(self.reminder_id.clone())),
        }
    }
}
