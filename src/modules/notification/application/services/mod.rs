pub mod manage_notifications;
pub mod notify;

pub use manage_notifications::{
    IManageNotificationsUseCase, ManageNotificationError, ManageNotificationsService,
};
pub use notify::NotifyService;
