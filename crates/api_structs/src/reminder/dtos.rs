use billwatch_domain::{Frequency, Priority, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: String,
    pub bill_name: String,
    pub amount: Option<f64>,
    pub due_date: i64,
    pub priority: Priority,
    pub frequency: Frequency,
    pub is_paid: bool,
    pub paid_at: Option<i64>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            user_id: reminder.user_id,
            bill_name: reminder.bill_name,
            amount: reminder.amount,
            due_date: reminder.due_date,
            priority: reminder.priority,
            frequency: reminder.frequency,
            is_paid: reminder.is_paid,
            paid_at: reminder.paid_at,
        }
    }
}
