mod create_reminder;
mod delete_reminder;
mod get_due_reminders;
mod get_reminders;
mod mark_reminder_paid;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_due_reminders::get_due_reminders_controller;
use get_reminders::get_reminders_controller;
use mark_reminder_paid::mark_reminder_paid_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route(
        "/reminders/due-today",
        web::get().to(get_due_reminders_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/mark-paid",
        web::put().to(mark_reminder_paid_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}
