pub mod manage_notifications;

pub use manage_notifications::{
    delete_all_notifications_handler, delete_notification_handler, list_notifications_handler,
    mark_all_read_handler, mark_read_handler, unread_count_handler,
};
