use crate::error::BillwatchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use billwatch_api_structs::mark_reminder_paid::*;
use billwatch_domain::{Reminder, ID};
use billwatch_infra::BillwatchContext;

pub async fn mark_reminder_paid_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<BillwatchContext>,
) -> Result<HttpResponse, BillwatchError> {
    let user_id = protect_route(&http_req, &ctx).await?;

    let usecase = MarkReminderPaidUseCase {
        user_id,
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(BillwatchError::from)
}

#[derive(Debug)]
pub struct MarkReminderPaidUseCase {
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
impl UseCase for MarkReminderPaidUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkReminderPaid";

    async fn execute(&mut self, ctx: &BillwatchContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(mut reminder) if reminder.user_id == self.user_id => {
                // Marking an already paid reminder again is a no-op so
                // that the original `paid_at` stamp never moves
                if reminder.mark_paid(ctx.sys.get_timestamp_millis()) {
                    ctx.repos
                        .reminders
                        .save(&reminder)
                        .await
                        .map_err(|_| UseCaseError::StorageError)?;
                }
                Ok(reminder)
            }
            _ => Err(UseCaseError::NotFound(self.reminder_id.clone())),
        }
    }
}
