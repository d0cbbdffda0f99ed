mod date;
mod reminder;
mod shared;
mod timespan;

pub use date::{calendar_day_window, parse_due_date, InvalidDueDateError};
pub use reminder::{Frequency, Priority, Reminder};
pub use shared::entity::{Entity, ID};
pub use timespan::TimeSpan;
