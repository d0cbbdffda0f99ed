use crate::error::BillwatchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use billwatch_api_structs::create_reminder::*;
use billwatch_domain::{parse_due_date, Frequency, Priority, Reminder};
use billwatch_infra::BillwatchContext;

pub async fn create_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BillwatchContext>,
) -> Result<HttpResponse, BillwatchError> {
    let user_id = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateReminderUseCase {
        user_id,
        bill_name: body.bill_name,
        due_date: body.due_date,
        amount: body.amount,
        priority: body.priority,
        frequency: body.frequency,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(BillwatchError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: String,
    pub bill_name: String,
    /// Raw client input, validated before any store interaction
    pub due_date: String,
    pub amount: Option<f64>,
    pub priority: Option<Priority>,
    pub frequency: Option<Frequency>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingField(&'static str),
    InvalidDueDate(String),
    StorageError,
}

impl From<UseCaseError> for BillwatchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingField(field) => {
                Self::BadClientData(format!("Required field: {} is missing or empty", field))
            }
            UseCaseError::InvalidDueDate(due_date) => Self::BadClientData(format!(
                "Due date: {} is not a valid calendar date",
                due_date
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &BillwatchContext) -> Result<Self::Response, Self::Error> {
        if self.user_id.trim().is_empty() {
            return Err(UseCaseError::MissingField("user_id"));
        }
        if self.bill_name.trim().is_empty() {
            return Err(UseCaseError::MissingField("bill_name"));
        }
        if self.due_date.trim().is_empty() {
            return Err(UseCaseError::MissingField("due_date"));
        }
        let due_date = parse_due_date(&self.due_date)
            .map_err(|_| UseCaseError::InvalidDueDate(self.due_date.clone()))?;

        let mut reminder =
            Reminder::new(self.user_id.clone(), self.bill_name.clone(), due_date);
        reminder.amount = self.amount;
        reminder.priority = self.priority.unwrap_or_default();
        reminder.frequency = self.frequency.unwrap_or_default();

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
