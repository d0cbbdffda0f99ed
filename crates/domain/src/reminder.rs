use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A `Reminder` is a single bill-payment obligation owned by exactly one
/// user. The owner is the verified subject returned by the identity
/// provider and is never reassigned after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub user_id: String,
    pub bill_name: String,
    /// Raw magnitude, no currency handling
    pub amount: Option<f64>,
    /// Timestamp in millis. Immutable after creation.
    pub due_date: i64,
    pub priority: Priority,
    /// Advisory only. Nothing in the engine rolls a monthly reminder
    /// over to the next month.
    pub frequency: Frequency,
    pub is_paid: bool,
    /// Timestamp in millis. `Some` if and only if `is_paid`.
    pub paid_at: Option<i64>,
}

impl Reminder {
    pub fn new(user_id: String, bill_name: String, due_date: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            bill_name,
            amount: None,
            due_date,
            priority: Default::default(),
            frequency: Default::default(),
            is_paid: false,
            paid_at: None,
        }
    }

    /// Unpaid -> Paid transition. Returns `true` if this call performed
    /// the transition and `false` if the reminder already was paid, in
    /// which case the original `paid_at` stamp is kept.
    pub fn mark_paid(&mut self, now: i64) -> bool {
        if self.is_paid {
            return false;
        }
        self.is_paid = true;
        self.paid_at = Some(now);
        true
    }
}

impl Entity for Reminder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    Monthly,
    Quarterly,
    Yearly,
}

impl Default for Frequency {
    fn default() -> Self {
        Self::Monthly
    }
}
