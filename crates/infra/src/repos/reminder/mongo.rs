use super::IReminderRepo;
use crate::repos::shared::mongo_repo;
use billwatch_domain::{Frequency, Priority, Reminder, TimeSpan, ID};
use mongo_repo::MongoDocument;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::FindOptions,
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoReminderRepo {
    collection: Collection<Document>,
}

impl MongoReminderRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("reminders"),
        }
    }

    fn sorted_by_due_date() -> FindOptions {
        FindOptions::builder()
            .sort(doc! { "due_date": 1, "_id": 1 })
            .build()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for MongoReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ReminderMongo>(&self.collection, reminder).await
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::save::<_, ReminderMongo>(&self.collection, reminder).await
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        mongo_repo::find::<_, ReminderMongo>(&self.collection, reminder_id.inner_ref()).await
    }

    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "user_id": user_id
        };
        mongo_repo::find_many_by::<_, ReminderMongo>(
            &self.collection,
            filter,
            Some(Self::sorted_by_due_date()),
        )
        .await
    }

    async fn find_unpaid_in_span(
        &self,
        user_id: &str,
        span: &TimeSpan,
    ) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "user_id": user_id,
            "is_paid": false,
            "due_date": {
                "$gte": span.start(),
                "$lte": span.end()
            }
        };
        mongo_repo::find_many_by::<_, ReminderMongo>(
            &self.collection,
            filter,
            Some(Self::sorted_by_due_date()),
        )
        .await
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        mongo_repo::delete::<_, ReminderMongo>(&self.collection, reminder_id.inner_ref()).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderMongo {
    _id: ObjectId,
    user_id: String,
    bill_name: String,
    amount: Option<f64>,
    due_date: i64,
    priority: Priority,
    frequency: Frequency,
    is_paid: bool,
    paid_at: Option<i64>,
}

impl MongoDocument<Reminder> for ReminderMongo {
    fn to_domain(self) -> Reminder {
        Reminder {
            id: ID::from(self._id),
            user_id: self.user_id,
            bill_name: self.bill_name,
            amount: self.amount,
            due_date: self.due_date,
            priority: self.priority,
            frequency: self.frequency,
            is_paid: self.is_paid,
            paid_at: self.paid_at,
        }
    }

    fn from_domain(reminder: &Reminder) -> Self {
        Self {
            _id: *reminder.id.inner_ref(),
            user_id: reminder.user_id.clone(),
            bill_name: reminder.bill_name.clone(),
            amount: reminder.amount,
            due_date: reminder.due_date,
            priority: reminder.priority,
            frequency: reminder.frequency,
            is_paid: reminder.is_paid,
            paid_at: reminder.paid_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
