use crate::error::BillwatchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use billwatch_api_structs::get_due_reminders::*;
use billwatch_domain::{calendar_day_window, Reminder};
use billwatch_infra::BillwatchContext;
use chrono_tz::Tz;

pub async fn get_due_reminders_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<BillwatchContext>,
) -> Result<HttpResponse, BillwatchError> {
    let user_id = protect_route(&http_req, &ctx).await?;

    let query = query_params.0;
    let usecase = GetDueRemindersUseCase {
        user_id,
        // The reference instant comes from the caller so that the engine
        // stays deterministic, now is just the default
        as_of: query
            .as_of
            .unwrap_or_else(|| ctx.sys.get_timestamp_millis()),
        timezone: query.timezone.unwrap_or(chrono_tz::UTC),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(BillwatchError::from)
}

#[derive(Debug)]
pub struct GetDueRemindersUseCase {
    pub user_id: String,
    pub as_of: i64,
    pub timezone: Tz,
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
impl UseCase for GetDueRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDueReminders";

    async fn execute(&mut self, ctx: &BillwatchContext) -> Result<Self::Response, Self::Error> {
        let window = calendar_day_window(self.as_of, self.timezone);

        ctx.repos
            .reminders
            .find_unpaid_in_span(&self.user_id, &window)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::UTC;

    fn as_of() -> i64 {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    async fn insert_reminder(ctx: &BillwatchContext, due_date: i64, paid: bool) -> Reminder {
        let mut reminder = Reminder::new("u1".into(), "Electric".into(), due_date);
        if paid {
            reminder.mark_paid(due_date);
        }
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        reminder
    }

    fn usecase() -> GetDueRemindersUseCase {
        GetDueRemindersUseCase {
            user_id: "u1".into(),
            as_of: as_of(),
            timezone: UTC,
        }
    }

    #[actix_web::test]
    async fn includes_unpaid_reminders_due_that_day() {
        let ctx = BillwatchContext::create_inmemory();
        let due = insert_reminder(&ctx, as_of(), false).await;

        let reminders = usecase().execute(&ctx).await.unwrap();

        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0], due);
    }

    #[actix_web::test]
    async fn excludes_paid_reminders_due_that_day() {
        let ctx = BillwatchContext::create_inmemory();
        insert_reminder(&ctx, as_of(), true).await;

        let reminders = usecase().execute(&ctx).await.unwrap();

        assert!(reminders.is_empty());
    }

    #[actix_web::test]
    async fn day_boundaries_are_inclusive_to_the_millisecond() {
        let ctx = BillwatchContext::create_inmemory();
        let window = calendar_day_window(as_of(), UTC);
        insert_reminder(&ctx, window.start(), false).await;
        insert_reminder(&ctx, window.end(), false).await;
        insert_reminder(&ctx, window.start() - 1, false).await;
        insert_reminder(&ctx, window.end() + 1, false).await;

        let reminders = usecase().execute(&ctx).await.unwrap();

        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].due_date, window.start());
        assert_eq!(reminders[1].due_date, window.end());
    }

    #[actix_web::test]
    async fn respects_the_callers_timezone() {
        let ctx = BillwatchContext::create_inmemory();
        // Due at 10:00 UTC on March 15th
        insert_reminder(&ctx, as_of(), false).await;

        // 23:30 UTC on March 15th is already March 16th in Oslo, so the
        // morning reminder is no longer in the Oslo caller's day
        let late_evening_utc = Utc
            .with_ymd_and_hms(2024, 3, 15, 23, 30, 0)
            .unwrap()
            .timestamp_millis();

        let mut in_utc = usecase();
        in_utc.as_of = late_evening_utc;
        assert_eq!(in_utc.execute(&ctx).await.unwrap().len(), 1);

        let mut in_oslo = usecase();
        in_oslo.as_of = late_evening_utc;
        in_oslo.timezone = chrono_tz::Europe::Oslo;
        assert!(in_oslo.execute(&ctx).await.unwrap().is_empty());
    }
}
