mod inmemory;
mod mongo;

use billwatch_domain::{Reminder, TimeSpan, ID};
pub use inmemory::InMemoryReminderRepo;
pub use mongo::MongoReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All reminders owned by the user, ascending by due date with ties
    /// broken by id so that repeated calls stay stable
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Reminder>>;
    /// Unpaid reminders owned by the user with a due date inside the
    /// closed `span`, same ordering as `find_by_user`
    async fn find_unpaid_in_span(
        &self,
        user_id: &str,
        span: &TimeSpan,
    ) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
}
