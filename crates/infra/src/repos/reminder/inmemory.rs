use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use billwatch_domain::{Reminder, TimeSpan, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

fn sort_by_due_date(reminders: &mut Vec<Reminder>) {
    reminders.sort_by(|a, b| {
        (a.due_date, a.id.as_string()).cmp(&(b.due_date, b.id.as_string()))
    });
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |reminder| reminder.user_id == user_id);
        sort_by_due_date(&mut reminders);
        Ok(reminders)
    }

    async fn find_unpaid_in_span(
        &self,
        user_id: &str,
        span: &TimeSpan,
    ) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |reminder| {
            reminder.user_id == user_id && !reminder.is_paid && span.contains(reminder.due_date)
        });
        sort_by_due_date(&mut reminders);
        Ok(reminders)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }
}
